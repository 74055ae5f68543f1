//! Mule runtime Edge/LTS versions with JDK compatibility.

use tracing::{debug, info, instrument, warn};

use super::ScrapeContext;
use super::error::ScrapeError;
use super::extract::{RowScan, java_compatibility, scan_rows};
use super::model::{Fallback, LatestVersions, ReleaseKind, RuntimeVersions, ScrapeResult, VersionRecord};

/// How many leading rows the positional fallback treats as Edge.
const POSITIONAL_EDGE_COUNT: usize = 3;

/// Progress of a runtime scrape, logged at each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    FetchingEdgeLts,
    FetchingJava,
    Extracting,
    Done,
    Failed,
}

pub struct RuntimeScraper {
    ctx: ScrapeContext,
}

impl RuntimeScraper {
    pub fn new(ctx: ScrapeContext) -> Self {
        Self { ctx }
    }

    /// Every Edge and LTS release plus the Java support matrix.
    #[instrument(skip_all)]
    pub fn scrape(&self) -> ScrapeResult<RuntimeVersions> {
        let result = self.run();
        match &result {
            Ok(_) => debug!(stage = ?Stage::Done, "Runtime scrape finished"),
            Err(err) => warn!(stage = ?Stage::Failed, error = %err, "Runtime scrape failed"),
        }
        result.into()
    }

    /// Only the newest Edge and LTS releases.
    #[instrument(skip_all)]
    pub fn latest(&self) -> ScrapeResult<LatestVersions> {
        self.scrape().map(|full| LatestVersions::from(&full))
    }

    fn run(&self) -> Result<RuntimeVersions, ScrapeError> {
        let urls = &self.ctx.config.urls;
        debug!(stage = ?Stage::Init, "Starting runtime scrape");

        debug!(stage = ?Stage::FetchingEdgeLts, url = %urls.lts_edge_release_cadence);
        let cadence = self.ctx.fetcher.fetch(&urls.lts_edge_release_cadence)?;

        debug!(stage = ?Stage::FetchingJava, url = %urls.java_support);
        let java = self.ctx.fetcher.fetch(&urls.java_support)?;

        debug!(stage = ?Stage::Extracting);
        let all_versions: Vec<VersionRecord> = scan_rows(&cadence, RowScan::RELEASE_CADENCE)
            .iter()
            .map(|cells| VersionRecord::new(&cells[0], &cells[1], &cells[2]))
            .collect();

        let (edge_versions, lts_versions, applied_fallbacks) = classify(&all_versions);
        let java_compatibility = java_compatibility(&java);

        info!(
            edge = edge_versions.len(),
            lts = lts_versions.len(),
            java = java_compatibility.len(),
            "Extracted runtime versions"
        );

        Ok(RuntimeVersions {
            edge_versions,
            lts_versions,
            all_versions,
            java_compatibility,
            applied_fallbacks,
            source_urls: vec![urls.lts_edge_release_cadence.clone(), urls.java_support.clone()],
        })
    }
}

/// Split records into Edge and LTS lists.
///
/// When no record is labelled at all, the first three are taken as Edge and
/// the last one as LTS.
fn classify(all: &[VersionRecord]) -> (Vec<VersionRecord>, Vec<VersionRecord>, Vec<Fallback>) {
    let of_kind = |kind: ReleaseKind| -> Vec<VersionRecord> {
        all.iter().filter(|r| r.kind == kind).cloned().collect()
    };
    let edge = of_kind(ReleaseKind::Edge);
    let lts = of_kind(ReleaseKind::Lts);

    if !edge.is_empty() || !lts.is_empty() || all.is_empty() {
        return (edge, lts, Vec::new());
    }

    warn!(
        fallback = ?Fallback::PositionalEdgeLts,
        rows = all.len(),
        "No Edge/LTS labels found; assuming newest-first ordering"
    );
    let edge = all.iter().take(POSITIONAL_EDGE_COUNT).cloned().collect();
    let lts = all.last().cloned().into_iter().collect();
    (edge, lts, vec![Fallback::PositionalEdgeLts])
}
