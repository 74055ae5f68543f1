//! Records and result payloads produced by the scrapers.
//!
//! All records are built once from a fresh fetch and never mutated
//! afterwards. Result payloads are tagged unions: a success payload or a
//! failure payload, never both.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::error::{ErrorKind, ScrapeError};
use super::versions::parse_jdk_versions;

// ============================================================================
// Ordered version map
// ============================================================================

/// A version-keyed map that keeps keys in discovery order.
///
/// Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> VersionMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Exact lookup, falling back to the first key that starts with `key`.
    ///
    /// Tolerates suffixed keys such as `"4.4 LTS"` when asked for `"4.4"`.
    pub fn get_or_prefixed(&self, key: &str) -> Option<&V> {
        self.get(key).or_else(|| {
            self.entries
                .iter()
                .find(|(k, _)| k.starts_with(key))
                .map(|(_, v)| v)
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> VersionMap<V> {
    /// Copy of the map restricted to the given keys, in map order.
    pub fn restricted_to(&self, keys: &[&str]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| keys.contains(&k.as_str()))
                .cloned()
                .collect(),
        }
    }
}

impl<V> Default for VersionMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for VersionMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ============================================================================
// Java compatibility
// ============================================================================

/// Runtime version to supported JDK versions, plus the unparsed source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JavaCompatibilityMap {
    #[serde(rename = "java_compatibility")]
    pub jdk_versions: VersionMap<Vec<u64>>,

    #[serde(rename = "java_compatibility_strings")]
    pub raw: VersionMap<String>,
}

impl JavaCompatibilityMap {
    pub fn insert(&mut self, version: &str, jdk_support: &str) {
        self.jdk_versions
            .insert(version, parse_jdk_versions(jdk_support));
        self.raw.insert(version, jdk_support.to_string());
    }

    pub fn len(&self) -> usize {
        self.jdk_versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jdk_versions.is_empty()
    }
}

/// Serialize only the parsed JDK lists of a [`JavaCompatibilityMap`].
pub fn serialize_jdk_only<S: Serializer>(
    map: &JavaCompatibilityMap,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    map.jdk_versions.serialize(serializer)
}

// ============================================================================
// Runtime versions
// ============================================================================

/// Release track of a runtime version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReleaseKind {
    Edge,
    #[serde(rename = "LTS")]
    Lts,
    Unknown,
}

impl ReleaseKind {
    /// Classify by substring: `"Edge"` wins over `"LTS"`.
    pub fn classify(version: &str) -> Self {
        if version.contains("Edge") {
            Self::Edge
        } else if version.contains("LTS") {
            Self::Lts
        } else {
            Self::Unknown
        }
    }
}

/// One runtime release row from the release cadence page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionRecord {
    pub version: String,
    pub release_date: String,
    pub jdk_versions: Vec<u64>,
    pub jdk_versions_raw: String,
    pub kind: ReleaseKind,
}

impl VersionRecord {
    pub fn new(version: &str, release_date: &str, jdk_versions_raw: &str) -> Self {
        Self {
            version: version.to_string(),
            release_date: release_date.to_string(),
            jdk_versions: parse_jdk_versions(jdk_versions_raw),
            jdk_versions_raw: jdk_versions_raw.to_string(),
            kind: ReleaseKind::classify(version),
        }
    }
}

/// Heuristic branches a scrape took to produce its output.
///
/// Anything derived through one of these is a best guess about the page
/// layout, not something the page stated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// No row was labelled Edge or LTS; the first three rows were taken as
    /// Edge and the last as LTS.
    PositionalEdgeLts,
    /// Every connector version was paired with the first compatibility table.
    FirstCompatibilityTable,
    /// No version headings; versions were pulled from raw page text.
    FreeTextVersionScan,
    /// No breaking-change heading; warning paragraphs were used instead.
    WarningParagraphScan,
}

/// Full runtime scrape: every Edge/LTS version with JDK compatibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeVersions {
    pub edge_versions: Vec<VersionRecord>,
    pub lts_versions: Vec<VersionRecord>,
    pub all_versions: Vec<VersionRecord>,
    #[serde(flatten)]
    pub java_compatibility: JavaCompatibilityMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applied_fallbacks: Vec<Fallback>,
    pub source_urls: Vec<String>,
}

/// Only the newest Edge and LTS versions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestVersions {
    pub latest_edge: Option<VersionRecord>,
    pub latest_lts: Option<VersionRecord>,
    pub java_compatibility: VersionMap<Vec<u64>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applied_fallbacks: Vec<Fallback>,
    pub source_urls: Vec<String>,
}

impl From<&RuntimeVersions> for LatestVersions {
    fn from(full: &RuntimeVersions) -> Self {
        let latest_edge = full.edge_versions.first().cloned();
        let latest_lts = full.lts_versions.first().cloned();

        let keys: Vec<&str> = [&latest_edge, &latest_lts]
            .into_iter()
            .flatten()
            .map(|r| r.version.as_str())
            .collect();

        Self {
            java_compatibility: full.java_compatibility.jdk_versions.restricted_to(&keys),
            latest_edge,
            latest_lts,
            applied_fallbacks: full.applied_fallbacks.clone(),
            source_urls: full.source_urls.clone(),
        }
    }
}

// ============================================================================
// DataWeave versions
// ============================================================================

/// A Mule runtime / DataWeave pairing with JDK support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataWeaveCompatibilityEntry {
    pub mule_version: String,
    pub dataweave_version: String,
    pub jdk_versions: Vec<u64>,
}

/// Highlights pulled from a DataWeave release notes page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseNotesEntry {
    pub breaking_changes: Vec<String>,
    pub new_features: Vec<String>,
    pub important_notes: Vec<String>,
    pub source_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applied_fallbacks: Vec<Fallback>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataWeaveVersions {
    pub recent_dataweave_versions: Vec<DataWeaveCompatibilityEntry>,
    pub all_compatibility_data: Vec<DataWeaveCompatibilityEntry>,
    /// Keyed by DataWeave version.
    pub release_notes: VersionMap<ReleaseNotesEntry>,
    #[serde(serialize_with = "serialize_jdk_only")]
    pub java_compatibility: JavaCompatibilityMap,
    pub source_urls: Vec<String>,
}

// ============================================================================
// Connector versions
// ============================================================================

/// A single released version of one connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorVersionEntry {
    pub connector_version: String,
    pub mule_version: String,
    pub jdk_versions: Vec<u64>,
    pub artifact_id: String,
    pub maven_artifact_id: String,
    pub connector_name: String,
}

/// Runtime/JDK pairing reported when no connector was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralCompatibilityEntry {
    pub mule_version: String,
    pub jdk_versions: Vec<u64>,
    pub note: String,
}

/// Successful connector lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConnectorVersions {
    /// No artifact id given: runtime-wide compatibility only.
    General {
        connector_compatibility: Vec<GeneralCompatibilityEntry>,
        disclaimer: String,
        #[serde(serialize_with = "serialize_jdk_only")]
        java_compatibility: JavaCompatibilityMap,
        source_urls: Vec<String>,
    },

    /// Versions extracted from the connector's release notes page.
    ConnectorSpecific {
        connector_specific: Vec<ConnectorVersionEntry>,
        #[serde(serialize_with = "serialize_jdk_only")]
        java_compatibility: JavaCompatibilityMap,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        applied_fallbacks: Vec<Fallback>,
        source_urls: Vec<String>,
    },

    /// The page was found but nothing version-like could be extracted.
    NoVersionData {
        message: String,
        #[serde(rename = "artifactId")]
        artifact_id: String,
        connector_url: String,
        connector_name: String,
        #[serde(serialize_with = "serialize_jdk_only")]
        java_compatibility: JavaCompatibilityMap,
        source_urls: Vec<String>,
    },
}

/// Failed connector lookups, each carrying what the agent needs to retry.
///
/// The requested id is reported as `artifactId`, the name of the tool
/// parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConnectorFailure {
    /// A required page (connectors index or Java support) was unreachable.
    Unavailable { error: String, error_kind: ErrorKind },

    /// The connector release notes index was unreachable.
    IndexUnavailable {
        error: String,
        error_kind: ErrorKind,
        #[serde(rename = "artifactId")]
        artifact_id: String,
    },

    /// No link on the index matched the requested connector.
    NotFound {
        error: String,
        error_kind: ErrorKind,
        #[serde(rename = "artifactId")]
        artifact_id: String,
        attempted_variations: Vec<String>,
    },

    /// The connector's own page was unreachable.
    PageUnavailable {
        error: String,
        error_kind: ErrorKind,
        #[serde(rename = "artifactId")]
        artifact_id: String,
        connector_url: String,
        connector_name: String,
    },
}

impl ConnectorFailure {
    pub fn message(&self) -> &str {
        match self {
            Self::Unavailable { error, .. }
            | Self::IndexUnavailable { error, .. }
            | Self::NotFound { error, .. }
            | Self::PageUnavailable { error, .. } => error,
        }
    }
}

// ============================================================================
// Scrape results
// ============================================================================

/// Failure payload shared by the runtime and DataWeave scrapers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeFailure {
    pub error: String,
    pub error_kind: ErrorKind,
}

impl From<ScrapeError> for ScrapeFailure {
    fn from(err: ScrapeError) -> Self {
        Self {
            error_kind: err.kind(),
            error: err.to_string(),
        }
    }
}

/// Outcome of one scraper call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScrapeResult<T, E = ScrapeFailure> {
    Success(T),
    Failure(E),
}

impl<T, E> ScrapeResult<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScrapeResult<U, E> {
        match self {
            Self::Success(value) => ScrapeResult::Success(f(value)),
            Self::Failure(err) => ScrapeResult::Failure(err),
        }
    }
}

impl<T> From<Result<T, ScrapeError>> for ScrapeResult<T> {
    fn from(result: Result<T, ScrapeError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::mulesoft::error::FetchError;

    #[test]
    fn test_release_kind_classify() {
        assert_eq!(ReleaseKind::classify("4.9.0 Edge"), ReleaseKind::Edge);
        assert_eq!(ReleaseKind::classify("4.6.0 LTS"), ReleaseKind::Lts);
        assert_eq!(ReleaseKind::classify("4.4.0"), ReleaseKind::Unknown);
    }

    #[test]
    fn test_version_map_replaces_in_place() {
        let mut map = VersionMap::new();
        map.insert("4.6", 1);
        map.insert("4.9", 2);
        map.insert("4.6", 3);
        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["4.6", "4.9"]);
        assert_eq!(map.get("4.6"), Some(&3));
    }

    #[test]
    fn test_version_map_prefix_lookup() {
        let mut map = VersionMap::new();
        map.insert("4.4 LTS", vec![8, 11]);
        map.insert("4.4", vec![17]);
        assert_eq!(map.get_or_prefixed("4.4"), Some(&vec![17]));

        let mut suffixed = VersionMap::new();
        suffixed.insert("4.6 LTS", vec![8, 11, 17]);
        assert_eq!(suffixed.get_or_prefixed("4.6"), Some(&vec![8, 11, 17]));
        assert_eq!(suffixed.get_or_prefixed("4.7"), None);
    }

    #[test]
    fn test_java_map_serializes_parallel_views() {
        let mut java = JavaCompatibilityMap::default();
        java.insert("4.9.0 Edge", "17, 21");
        let json = serde_json::to_value(&java).unwrap();
        assert_eq!(json["java_compatibility"]["4.9.0 Edge"], serde_json::json!([17, 21]));
        assert_eq!(json["java_compatibility_strings"]["4.9.0 Edge"], "17, 21");
    }

    #[test]
    fn test_failure_serializes_as_error_object() {
        let result: ScrapeResult<RuntimeVersions> =
            Err(ScrapeError::from(FetchError::status("https://x", 503))).into();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["error"].as_str().unwrap().contains("503"));
        assert_eq!(json["error_kind"], "fetch");
        assert!(json.get("edge_versions").is_none());
    }

    #[test]
    fn test_latest_projection() {
        let mut java = JavaCompatibilityMap::default();
        java.insert("4.9.0 Edge", "17, 21");
        java.insert("4.8.0 Edge", "17");
        java.insert("4.6.0 LTS", "8, 11, 17");
        let edge = VersionRecord::new("4.9.0 Edge", "2024-05-01", "17, 21");
        let older = VersionRecord::new("4.8.0 Edge", "2024-02-01", "17");
        let lts = VersionRecord::new("4.6.0 LTS", "2023-04-01", "8, 11, 17");
        let full = RuntimeVersions {
            edge_versions: vec![edge.clone(), older],
            lts_versions: vec![lts.clone()],
            all_versions: vec![],
            java_compatibility: java,
            applied_fallbacks: vec![],
            source_urls: vec!["a".into(), "b".into()],
        };

        let latest = LatestVersions::from(&full);
        assert_eq!(latest.latest_edge, Some(edge));
        assert_eq!(latest.latest_lts, Some(lts));
        let keys: Vec<_> = latest.java_compatibility.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["4.9.0 Edge", "4.6.0 LTS"]);
    }

    #[test]
    fn test_latest_projection_empty_lists() {
        let full = RuntimeVersions {
            edge_versions: vec![],
            lts_versions: vec![],
            all_versions: vec![],
            java_compatibility: JavaCompatibilityMap::default(),
            applied_fallbacks: vec![],
            source_urls: vec![],
        };
        let latest = LatestVersions::from(&full);
        assert!(latest.latest_edge.is_none());
        assert!(latest.latest_lts.is_none());
        assert!(latest.java_compatibility.is_empty());
    }

    #[test]
    fn test_connector_versions_tagged() {
        let general = ConnectorVersions::General {
            connector_compatibility: vec![],
            disclaimer: "d".into(),
            java_compatibility: JavaCompatibilityMap::default(),
            source_urls: vec![],
        };
        let json = serde_json::to_value(&general).unwrap();
        assert_eq!(json["kind"], "general");
        assert!(json["java_compatibility"].is_object());
    }
}
