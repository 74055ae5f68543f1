//! DataWeave / Mule runtime pairings and per-version release notes.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::ScrapeContext;
use super::document::{ParsedDocument, element_text};
use super::error::ScrapeError;
use super::extract::{RowScan, java_compatibility, scan_rows, sections};
use super::fetcher::Headers;
use super::model::{
    DataWeaveCompatibilityEntry, DataWeaveVersions, Fallback, JavaCompatibilityMap,
    ReleaseNotesEntry, ScrapeResult, VersionMap,
};
use super::versions::compare_versions;

/// Release notes section a heading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotesSection {
    Breaking,
    NewFeatures,
    Important,
}

impl NotesSection {
    /// Checked in this order; the first keyword hit wins.
    fn classify(heading: &str) -> Option<Self> {
        let heading = heading.to_lowercase().replace('\u{2019}', "'");
        if heading.contains("breaking") {
            Some(Self::Breaking)
        } else if heading.contains("what's new") || heading.contains("new features") {
            Some(Self::NewFeatures)
        } else if heading.contains("important") || heading.contains("upgrade") {
            Some(Self::Important)
        } else {
            None
        }
    }

    /// Blocks taken from a single section.
    fn per_section(self) -> usize {
        match self {
            Self::Breaking | Self::Important => 2,
            Self::NewFeatures => 3,
        }
    }

    /// Blocks kept across the whole page.
    fn total(self) -> usize {
        match self {
            Self::Breaking | Self::Important => 3,
            Self::NewFeatures => 5,
        }
    }
}

const WARNING_MARKERS: [&str; 3] = ["warning:", "caution:", "deprecated"];

pub struct DataWeaveScraper {
    ctx: ScrapeContext,
}

impl DataWeaveScraper {
    pub fn new(ctx: ScrapeContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip_all)]
    pub fn scrape(&self) -> ScrapeResult<DataWeaveVersions> {
        let result = self.run();
        if let Err(err) = &result {
            warn!(error = %err, "DataWeave scrape failed");
        }
        result.into()
    }

    fn run(&self) -> Result<DataWeaveVersions, ScrapeError> {
        let config = &self.ctx.config;
        let dataweave = self.ctx.fetcher.fetch(&config.urls.dataweave)?;
        let java = self.ctx.fetcher.fetch(&config.urls.java_support)?;

        let java_compatibility = java_compatibility(&java);
        let all_compatibility_data = compatibility_entries(&dataweave, &java_compatibility);
        let recent_dataweave_versions: Vec<_> = all_compatibility_data
            .iter()
            .take(config.recent_limit)
            .cloned()
            .collect();

        let mut source_urls = vec![config.urls.dataweave.clone(), config.urls.java_support.clone()];
        let mut release_notes = VersionMap::new();
        for entry in recent_dataweave_versions.iter().take(config.release_notes_limit) {
            let version = &entry.dataweave_version;
            let url = config.urls.dataweave_release_notes(version);
            if source_urls.contains(&url) {
                continue;
            }
            source_urls.push(url.clone());
            if let Some(notes) = self.release_notes(version, url) {
                release_notes.insert(version.clone(), notes);
            }
        }

        info!(
            pairs = all_compatibility_data.len(),
            release_notes = release_notes.len(),
            "Extracted DataWeave versions"
        );

        Ok(DataWeaveVersions {
            recent_dataweave_versions,
            all_compatibility_data,
            release_notes,
            java_compatibility,
            source_urls,
        })
    }

    /// Fetch one release notes page. Failures only drop the entry.
    fn release_notes(&self, version: &str, url: String) -> Option<ReleaseNotesEntry> {
        let config = &self.ctx.config;
        let timeout = Duration::from_secs(config.release_notes_timeout_secs);

        match self.ctx.fetcher.fetch_with(&url, &Headers::new(), timeout) {
            Ok(doc) => Some(release_notes_entry(&doc, url)),
            Err(err) => {
                debug!(version, error = %err, "Skipping DataWeave release notes");
                None
            }
        }
    }
}

/// Runtime/DataWeave pairs, newest runtime first, each with its JDK list.
///
/// Duplicate pairs keep their first occurrence. Equal runtime versions keep
/// page order.
fn compatibility_entries(
    doc: &ParsedDocument,
    java: &JavaCompatibilityMap,
) -> Vec<DataWeaveCompatibilityEntry> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for cells in scan_rows(doc, RowScan::DATAWEAVE) {
        let pair = (cells[0].clone(), cells[1].clone());
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }
    pairs.sort_by(|a, b| compare_versions(&b.0, &a.0));

    pairs
        .into_iter()
        .map(|(mule_version, dataweave_version)| DataWeaveCompatibilityEntry {
            jdk_versions: java
                .jdk_versions
                .get_or_prefixed(&mule_version)
                .cloned()
                .unwrap_or_default(),
            mule_version,
            dataweave_version,
        })
        .collect()
}

fn release_notes_entry(doc: &ParsedDocument, source_url: String) -> ReleaseNotesEntry {
    let mut breaking_changes = Vec::new();
    let mut new_features = Vec::new();
    let mut important_notes = Vec::new();

    for section in sections(doc) {
        let Some(kind) = NotesSection::classify(&section.heading) else {
            continue;
        };
        let target = match kind {
            NotesSection::Breaking => &mut breaking_changes,
            NotesSection::NewFeatures => &mut new_features,
            NotesSection::Important => &mut important_notes,
        };
        target.extend(section.body.into_iter().take(kind.per_section()));
    }

    let mut applied_fallbacks = Vec::new();
    if breaking_changes.is_empty() {
        breaking_changes = doc
            .paragraphs()
            .map(|p| element_text(&p))
            .filter(|text| {
                let lower = text.to_lowercase();
                WARNING_MARKERS.iter().any(|m| lower.contains(m))
            })
            .collect();
        if !breaking_changes.is_empty() {
            debug!(fallback = ?Fallback::WarningParagraphScan, url = %source_url);
            applied_fallbacks.push(Fallback::WarningParagraphScan);
        }
    }

    breaking_changes.truncate(NotesSection::Breaking.total());
    new_features.truncate(NotesSection::NewFeatures.total());
    important_notes.truncate(NotesSection::Important.total());

    ReleaseNotesEntry {
        breaking_changes,
        new_features,
        important_notes,
        source_url,
        applied_fallbacks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::mulesoft::error::FetchCause;
    use crate::domains::mulesoft::fetcher::fixtures::FixtureSource;
    use crate::domains::mulesoft::test_pages;
    use crate::domains::mulesoft::versions::version_sort_key;

    const DATAWEAVE: &str = r#"
        <html><body>
          <table>
            <tr><th>Feature</th><th>Since</th></tr>
            <tr><td>9.9.9</td><td>9.9.9</td></tr>
          </table>
          <table>
            <tr><th>Mule Runtime</th><th>DataWeave</th></tr>
            <tr><td>4.4</td><td>2.4</td></tr>
            <tr><td>4.10.0</td><td>2.10.0</td></tr>
            <tr><td>4.9.0</td><td>2.9.0</td></tr>
            <tr><td>4.9.0</td><td>2.9.0</td></tr>
            <tr><td>4.6.0</td><td>2.6.0</td></tr>
            <tr><td>4.5.0</td><td>2.5.0</td></tr>
            <tr><td>4.3.0</td><td>2.3.0</td></tr>
            <tr><td>Next</td><td>TBD</td></tr>
          </table>
        </body></html>
    "#;

    const JAVA: &str = r#"
        <table>
          <tr><th>Mule</th><th>JDK</th></tr>
          <tr><td>4.10.0</td><td>17 and 21</td></tr>
          <tr><td>4.4 LTS</td><td>8, 11</td></tr>
        </table>
    "#;

    const NOTES_2_10: &str = r#"
        <h2>DataWeave 2.10.0 Release Notes</h2>
        <h3>What's New</h3>
        <p>Feature one</p><p>Feature two</p><p>Feature three</p><p>Feature four</p>
        <h3>Breaking Changes</h3>
        <p>Removed a function</p><p>Changed a default</p><p>Third change</p>
        <h3>Upgrade Requirements</h3>
        <p>Upgrade JDK</p>
    "#;

    const NOTES_2_9: &str = r#"
        <h2>Fixed Issues</h2>
        <p>Warning: the old parser is going away</p>
        <p>Regular note</p>
        <p>This function is deprecated</p>
    "#;

    fn source() -> FixtureSource {
        let config = test_pages::config();
        let urls = &config.urls;
        FixtureSource::new()
            .page(&urls.dataweave, DATAWEAVE)
            .page(&urls.java_support, JAVA)
            .page(&urls.dataweave_release_notes("2.10.0"), NOTES_2_10)
            .page(&urls.dataweave_release_notes("2.9.0"), NOTES_2_9)
            .failing(
                &urls.dataweave_release_notes("2.6.0"),
                FetchCause::Transport("timed out after 10s".into()),
            )
    }

    #[test]
    fn test_pairs_sorted_newest_first() {
        let (ctx, _) = test_pages::context(source());
        let result = DataWeaveScraper::new(ctx).scrape();
        let versions = result.success().unwrap();

        let mule: Vec<_> = versions
            .all_compatibility_data
            .iter()
            .map(|e| e.mule_version.as_str())
            .collect();
        assert_eq!(mule, vec!["4.10.0", "4.9.0", "4.6.0", "4.5.0", "4.4", "4.3.0"]);
        for pair in versions.all_compatibility_data.windows(2) {
            assert!(version_sort_key(&pair[0].mule_version) >= version_sort_key(&pair[1].mule_version));
        }
        assert_eq!(versions.recent_dataweave_versions.len(), 5);
        assert_eq!(versions.recent_dataweave_versions[4].mule_version, "4.4");
    }

    #[test]
    fn test_jdk_lookup_exact_then_prefix() {
        let (ctx, _) = test_pages::context(source());
        let result = DataWeaveScraper::new(ctx).scrape();
        let versions = result.success().unwrap();
        let all = &versions.all_compatibility_data;
        assert_eq!(all[0].jdk_versions, vec![17, 21]);
        let v44 = all.iter().find(|e| e.mule_version == "4.4").unwrap();
        assert_eq!(v44.jdk_versions, vec![8, 11]);
        let v45 = all.iter().find(|e| e.mule_version == "4.5.0").unwrap();
        assert!(v45.jdk_versions.is_empty());
    }

    #[test]
    fn test_release_notes_for_top_three() {
        let (ctx, source) = test_pages::context(source());
        let result = DataWeaveScraper::new(ctx).scrape();
        let versions = result.success().unwrap();

        // 2.6.0 timed out and is simply absent
        let keys: Vec<_> = versions.release_notes.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["2.10.0", "2.9.0"]);

        let notes = versions.release_notes.get("2.10.0").unwrap();
        assert_eq!(notes.new_features, vec!["Feature one", "Feature two", "Feature three"]);
        assert_eq!(notes.breaking_changes, vec!["Removed a function", "Changed a default"]);
        assert_eq!(notes.important_notes, vec!["Upgrade JDK"]);
        assert!(notes.applied_fallbacks.is_empty());
        assert!(notes.source_url.ends_with("dataweave-2.10.0-release-notes"));

        let requests = source.requests();
        let notes_requests: Vec<_> = requests
            .iter()
            .filter(|r| r.url.contains("release-notes"))
            .collect();
        assert_eq!(notes_requests.len(), 3);
        assert!(notes_requests.iter().all(|r| r.timeout == Duration::from_secs(10)));
    }

    #[test]
    fn test_source_urls_include_release_notes_attempts() {
        let (ctx, source) = test_pages::context(source());
        let result = DataWeaveScraper::new(ctx).scrape();
        let versions = result.success().unwrap();

        let config = test_pages::config();
        // the timed-out 2.6.0 page was still consulted
        assert!(versions
            .source_urls
            .contains(&config.urls.dataweave_release_notes("2.6.0")));
        for url in source.requested_urls() {
            assert!(versions.source_urls.contains(&url), "{url} missing from source_urls");
        }
        assert_eq!(versions.source_urls.len(), 5);
    }

    #[test]
    fn test_warning_paragraph_fallback() {
        let (ctx, _) = test_pages::context(source());
        let result = DataWeaveScraper::new(ctx).scrape();
        let versions = result.success().unwrap();
        let notes = versions.release_notes.get("2.9.0").unwrap();
        assert_eq!(
            notes.breaking_changes,
            vec!["Warning: the old parser is going away", "This function is deprecated"]
        );
        assert_eq!(notes.applied_fallbacks, vec![Fallback::WarningParagraphScan]);
    }

    #[test]
    fn test_section_totals_capped() {
        let mut html = String::new();
        for i in 0..4 {
            html.push_str(&format!("<h3>New Features {i}</h3><p>a{i}</p><p>b{i}</p><p>c{i}</p>"));
        }
        let entry = release_notes_entry(&ParsedDocument::parse(&html), "u".into());
        assert_eq!(entry.new_features.len(), 5);
        assert_eq!(entry.new_features[3], "a1");
    }

    #[test]
    fn test_dataweave_page_failure() {
        let config = test_pages::config();
        let source = FixtureSource::new().page(&config.urls.java_support, JAVA);
        let (ctx, _) = test_pages::context(source);
        let result = DataWeaveScraper::new(ctx).scrape();
        assert!(!result.is_success());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["error_kind"], "fetch");
    }

    #[test]
    fn test_java_compatibility_serialized_as_lists() {
        let (ctx, _) = test_pages::context(source());
        let result = DataWeaveScraper::new(ctx).scrape();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["java_compatibility"]["4.10.0"], serde_json::json!([17, 21]));
        assert!(json.get("java_compatibility_strings").is_none());
    }
}
