//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Browser-like User-Agent sent with every documentation request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Documentation sources and request settings for the scrapers.
    pub mulesoft: MulesoftConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    // Resources are registered in domains/resources/registry.rs
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Documentation page URLs consulted by the scrapers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocUrls {
    /// Edge/LTS release cadence table.
    pub lts_edge_release_cadence: String,

    /// Runtime to JDK support matrix.
    pub java_support: String,

    /// DataWeave landing page with the runtime compatibility table.
    pub dataweave: String,

    /// Connectors landing page. Also the base for relative connector links.
    pub connectors: String,

    /// Index of per-connector release notes.
    pub connector_release_notes: String,

    /// Per-version DataWeave release notes, with a `{version}` placeholder.
    pub dataweave_release_notes_template: String,
}

impl Default for DocUrls {
    fn default() -> Self {
        Self {
            lts_edge_release_cadence:
                "https://docs.mulesoft.com/release-notes/mule-runtime/lts-edge-release-cadence"
                    .to_string(),
            java_support: "https://docs.mulesoft.com/general/java-support".to_string(),
            dataweave: "https://docs.mulesoft.com/dataweave/".to_string(),
            connectors: "https://docs.mulesoft.com/connectors/".to_string(),
            connector_release_notes:
                "https://docs.mulesoft.com/connectors/introduction/connector-release-notes"
                    .to_string(),
            dataweave_release_notes_template:
                "https://docs.mulesoft.com/release-notes/dataweave/dataweave-{version}-release-notes"
                    .to_string(),
        }
    }
}

impl DocUrls {
    /// Release notes URL for one DataWeave version.
    pub fn dataweave_release_notes(&self, version: &str) -> String {
        self.dataweave_release_notes_template
            .replace("{version}", version)
    }
}

/// Scraper configuration, handed to every scraper at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MulesoftConfig {
    /// Site root used to absolutize root-relative links.
    pub site_root: String,

    /// Documentation pages.
    pub urls: DocUrls,

    /// User-Agent header value.
    pub user_agent: String,

    /// Additional headers merged over the defaults on every request.
    pub extra_headers: BTreeMap<String, String>,

    /// Timeout for primary page fetches.
    pub request_timeout_secs: u64,

    /// Timeout for DataWeave release notes fetches.
    pub release_notes_timeout_secs: u64,

    /// How many DataWeave pairings count as "recent".
    pub recent_limit: usize,

    /// How many recent DataWeave versions get release notes.
    pub release_notes_limit: usize,
}

impl Default for MulesoftConfig {
    fn default() -> Self {
        Self {
            site_root: "https://docs.mulesoft.com".to_string(),
            urls: DocUrls::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            extra_headers: BTreeMap::new(),
            request_timeout_secs: 30,
            release_notes_timeout_secs: 10,
            recent_limit: 5,
            release_notes_limit: 3,
        }
    }
}

impl MulesoftConfig {
    /// Apply `MCP_MULESOFT_*` overrides from the environment.
    pub fn apply_env(&mut self) {
        let overrides: [(&str, &mut String); 8] = [
            ("MCP_MULESOFT_SITE_ROOT", &mut self.site_root),
            (
                "MCP_MULESOFT_LTS_EDGE_URL",
                &mut self.urls.lts_edge_release_cadence,
            ),
            ("MCP_MULESOFT_JAVA_SUPPORT_URL", &mut self.urls.java_support),
            ("MCP_MULESOFT_DATAWEAVE_URL", &mut self.urls.dataweave),
            ("MCP_MULESOFT_CONNECTORS_URL", &mut self.urls.connectors),
            (
                "MCP_MULESOFT_CONNECTOR_RELEASE_NOTES_URL",
                &mut self.urls.connector_release_notes,
            ),
            (
                "MCP_MULESOFT_DATAWEAVE_RELEASE_NOTES_TEMPLATE",
                &mut self.urls.dataweave_release_notes_template,
            ),
            ("MCP_MULESOFT_USER_AGENT", &mut self.user_agent),
        ];

        for (var, slot) in overrides {
            if let Ok(value) = std::env::var(var) {
                info!("{} overridden from environment", var);
                *slot = value;
            }
        }

        if let Some(secs) = parse_env_u64("MCP_MULESOFT_TIMEOUT_SECS") {
            self.request_timeout_secs = secs;
        }
        if let Some(secs) = parse_env_u64("MCP_MULESOFT_RELEASE_NOTES_TIMEOUT_SECS") {
            self.release_notes_timeout_secs = secs;
        }
    }
}

fn parse_env_u64(var: &str) -> Option<u64> {
    let raw = std::env::var(var).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a whole number of seconds", var, raw);
            None
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mulesoft-assistant".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            mulesoft: MulesoftConfig::default(),
            resources: ResourcesConfig::default(),
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_MULESOFT_JAVA_SUPPORT_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.mulesoft.apply_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_urls_point_at_docs_site() {
        let config = Config::default();
        let urls = &config.mulesoft.urls;
        assert!(urls.java_support.starts_with(&config.mulesoft.site_root));
        assert!(urls.dataweave_release_notes_template.contains("{version}"));
        assert_eq!(config.mulesoft.request_timeout_secs, 30);
        assert_eq!(config.mulesoft.release_notes_timeout_secs, 10);
    }

    #[test]
    fn test_dataweave_release_notes_url() {
        let urls = DocUrls::default();
        assert_eq!(
            urls.dataweave_release_notes("2.10.0"),
            "https://docs.mulesoft.com/release-notes/dataweave/dataweave-2.10.0-release-notes"
        );
    }

    #[test]
    fn test_urls_overridden_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_MULESOFT_JAVA_SUPPORT_URL", "http://localhost:9/java");
            std::env::set_var("MCP_MULESOFT_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.mulesoft.urls.java_support, "http://localhost:9/java");
        assert_eq!(config.mulesoft.request_timeout_secs, 5);
        unsafe {
            std::env::remove_var("MCP_MULESOFT_JAVA_SUPPORT_URL");
            std::env::remove_var("MCP_MULESOFT_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_MULESOFT_RELEASE_NOTES_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.mulesoft.release_notes_timeout_secs, 10);
        unsafe {
            std::env::remove_var("MCP_MULESOFT_RELEASE_NOTES_TIMEOUT_SECS");
        }
    }
}
