//! Documentation pages consulted by the scrapers.

use serde_json::{Value, json};

use super::ResourceDefinition;
use crate::core::config::MulesoftConfig;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

pub struct DocSourcesResource;

impl ResourceDefinition for DocSourcesResource {
    const URI: &'static str = "mulesoft://sources";
    const NAME: &'static str = "MuleSoft documentation sources";
    const DESCRIPTION: &'static str =
        "Documentation URLs the version tools scrape, as currently configured";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::DocSources)
    }
}

impl DocSourcesResource {
    /// Render the configured URLs.
    pub fn resolve(config: &MulesoftConfig) -> Result<Value, serde_json::Error> {
        Ok(json!({
            "site_root": config.site_root,
            "pages": serde_json::to_value(&config.urls)?,
            "request_timeout_secs": config.request_timeout_secs,
            "release_notes_timeout_secs": config.release_notes_timeout_secs,
        }))
    }
}
