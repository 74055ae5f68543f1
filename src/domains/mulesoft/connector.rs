//! Anypoint connector version compatibility.
//!
//! Without an artifact id only the runtime-wide Java matrix is reported.
//! With one, the connector's release notes page is located through the
//! release notes index and its version headings are read.

use tracing::{info, instrument, warn};

use super::ScrapeContext;
use super::document::ParsedDocument;
use super::error::{ErrorKind, FetchError, ScrapeError};
use super::extract::{HeaderFilter, heading_versions, java_compatibility, matching_tables};
use super::matcher::{find_connector_link, maven_artifact_id, name_variations, resolve_connector_url};
use super::model::{
    ConnectorFailure, ConnectorVersionEntry, ConnectorVersions, Fallback,
    GeneralCompatibilityEntry, ScrapeResult,
};
use super::versions::{extract_version_number, find_version_mentions, parse_jdk_versions};

pub const GENERAL_NOTE: &str = "General Mule runtime compatibility - check individual connector release notes for specific connector compatibility";

pub const GENERAL_DISCLAIMER: &str = "Connector-specific version compatibility requires an artifact_id (for example http, salesforce, snowflake, email or sockets). The list above is the general Mule runtime to JDK matrix.";

/// Compatibility tables have a "Software | Version" header.
const COMPATIBILITY_HEADER: HeaderFilter = HeaderFilter::HasAllCells(&["software", "version"]);

/// Versions taken from raw page text when no heading names one.
const FREE_TEXT_VERSION_LIMIT: usize = 5;

const UNKNOWN: &str = "Unknown";

pub type ConnectorResult = ScrapeResult<ConnectorVersions, ConnectorFailure>;

/// Runtime and JDK versions a connector page declares.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Compatibility {
    mule_version: String,
    jdk_versions: Vec<u64>,
}

impl Default for Compatibility {
    fn default() -> Self {
        Self {
            mule_version: UNKNOWN.to_string(),
            jdk_versions: Vec::new(),
        }
    }
}

pub struct ConnectorScraper {
    ctx: ScrapeContext,
}

impl ConnectorScraper {
    pub fn new(ctx: ScrapeContext) -> Self {
        Self { ctx }
    }

    /// Look up one connector, or the general matrix when `artifact_id` is
    /// absent or blank.
    #[instrument(skip(self))]
    pub fn scrape(&self, artifact_id: Option<&str>) -> ConnectorResult {
        let result = match artifact_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self.connector_specific(id),
            None => self.general(),
        };
        if let ScrapeResult::Failure(failure) = &result {
            warn!(error = failure.message(), "Connector lookup failed");
        }
        result
    }

    fn general(&self) -> ConnectorResult {
        let urls = &self.ctx.config.urls;
        let pages = self
            .ctx
            .fetcher
            .fetch(&urls.connectors)
            .and_then(|_| self.ctx.fetcher.fetch(&urls.java_support));
        let java = match pages {
            Ok(doc) => java_compatibility(&doc),
            Err(err) => return ScrapeResult::Failure(unavailable(err)),
        };

        let connector_compatibility = java
            .jdk_versions
            .iter()
            .map(|(mule_version, jdk_versions)| GeneralCompatibilityEntry {
                mule_version: mule_version.to_string(),
                jdk_versions: jdk_versions.clone(),
                note: GENERAL_NOTE.to_string(),
            })
            .collect();

        ScrapeResult::Success(ConnectorVersions::General {
            connector_compatibility,
            disclaimer: GENERAL_DISCLAIMER.to_string(),
            java_compatibility: java,
            source_urls: vec![urls.connectors.clone(), urls.java_support.clone()],
        })
    }

    fn connector_specific(&self, artifact_id: &str) -> ConnectorResult {
        let config = &self.ctx.config;
        let urls = &config.urls;

        let java = match self.ctx.fetcher.fetch(&urls.java_support) {
            Ok(doc) => java_compatibility(&doc),
            Err(err) => return ScrapeResult::Failure(unavailable(err)),
        };

        let index = match self.ctx.fetcher.fetch(&urls.connector_release_notes) {
            Ok(doc) => doc,
            Err(err) => {
                return ScrapeResult::Failure(ConnectorFailure::IndexUnavailable {
                    error: format!("Could not access connector release notes page: {err}"),
                    error_kind: ErrorKind::Fetch,
                    artifact_id: artifact_id.to_string(),
                });
            }
        };

        let variations = name_variations(artifact_id);
        let links: Vec<_> = index.links().collect();
        let Some(found) = find_connector_link(&links, &variations) else {
            return ScrapeResult::Failure(ConnectorFailure::NotFound {
                error: format!(
                    "Connector '{artifact_id}' not found in the release notes. Please check the artifactId and try again."
                ),
                error_kind: ErrorKind::NotFound,
                artifact_id: artifact_id.to_string(),
                attempted_variations: variations,
            });
        };

        let connector_url = resolve_connector_url(&found.href, &config.site_root, &urls.connectors);
        info!(
            connector = %found.connector_name,
            url = %connector_url,
            rule = ?found.rule,
            "Found connector link"
        );

        let page = match self.ctx.fetcher.fetch(&connector_url) {
            Ok(doc) => doc,
            Err(err) => {
                return ScrapeResult::Failure(ConnectorFailure::PageUnavailable {
                    error: format!(
                        "Could not fetch connector page for '{artifact_id}' at {connector_url}: {err}"
                    ),
                    error_kind: ErrorKind::Fetch,
                    artifact_id: artifact_id.to_string(),
                    connector_url,
                    connector_name: found.connector_name,
                });
            }
        };

        let source_urls = vec![
            connector_url.clone(),
            urls.connector_release_notes.clone(),
            urls.java_support.clone(),
        ];
        let entry = |connector_version: String, compat: &Compatibility| ConnectorVersionEntry {
            connector_version,
            mule_version: compat.mule_version.clone(),
            jdk_versions: compat.jdk_versions.clone(),
            artifact_id: artifact_id.to_string(),
            maven_artifact_id: maven_artifact_id(artifact_id),
            connector_name: found.connector_name.clone(),
        };

        let headings = heading_versions(&page);
        let (versions, applied_fallbacks): (Vec<ConnectorVersionEntry>, _) = if !headings.is_empty() {
            let (compat, fallbacks) = default_compatibility(&page);
            let entries = headings.into_iter().map(|v| entry(v, &compat)).collect();
            (entries, fallbacks)
        } else {
            let mentions = free_text_versions(&page);
            if !mentions.is_empty() {
                info!(
                    fallback = ?Fallback::FreeTextVersionScan,
                    found = mentions.len(),
                    "No version headings; scanned page text"
                );
            }
            let unknown = Compatibility::default();
            let entries: Vec<_> = mentions.into_iter().map(|v| entry(v, &unknown)).collect();
            let fallbacks = if entries.is_empty() {
                Vec::new()
            } else {
                vec![Fallback::FreeTextVersionScan]
            };
            (entries, fallbacks)
        };

        if versions.is_empty() {
            return ScrapeResult::Success(ConnectorVersions::NoVersionData {
                message: format!(
                    "Connector '{artifact_id}' found at {connector_url}, but specific version compatibility information could not be extracted. Please check the connector documentation directly."
                ),
                artifact_id: artifact_id.to_string(),
                connector_url,
                connector_name: found.connector_name,
                java_compatibility: java,
                source_urls,
            });
        }

        ScrapeResult::Success(ConnectorVersions::ConnectorSpecific {
            connector_specific: versions,
            java_compatibility: java,
            applied_fallbacks,
            source_urls,
        })
    }
}

fn unavailable(err: FetchError) -> ConnectorFailure {
    let err = ScrapeError::from(err);
    ConnectorFailure::Unavailable {
        error_kind: err.kind(),
        error: err.to_string(),
    }
}

/// Compatibility declared by each "Software | Version" table, in page order.
fn compatibility_tables(page: &ParsedDocument) -> Vec<Compatibility> {
    matching_tables(page, COMPATIBILITY_HEADER, 2)
        .into_iter()
        .map(|table| {
            let mut compat = Compatibility::default();
            for cells in table.rows.iter().filter(|cells| cells.len() >= 2) {
                let (software, version) = (&cells[0], &cells[1]);
                if software == "Mule" {
                    compat.mule_version = version.clone();
                } else if software.contains("OpenJDK") || software.contains("JDK") {
                    compat.jdk_versions = parse_jdk_versions(version);
                }
            }
            compat
        })
        .collect()
}

/// The first compatibility table, applied to every version on the page.
fn default_compatibility(page: &ParsedDocument) -> (Compatibility, Vec<Fallback>) {
    match compatibility_tables(page).into_iter().next() {
        Some(first) => {
            info!(
                fallback = ?Fallback::FirstCompatibilityTable,
                mule = %first.mule_version,
                "Using first compatibility table for every connector version"
            );
            (first, vec![Fallback::FirstCompatibilityTable])
        }
        None => (Compatibility::default(), Vec::new()),
    }
}

fn free_text_versions(page: &ParsedDocument) -> Vec<String> {
    find_version_mentions(&page.text())
        .iter()
        .take(FREE_TEXT_VERSION_LIMIT)
        .map(|m| extract_version_number(m))
        .collect()
}
