//! Resource service implementation.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

use super::definitions::DocSourcesResource;
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::{MulesoftConfig, ResourcesConfig};

/// Service for listing and reading resources.
pub struct ResourceService {
    #[allow(dead_code)]
    config: ResourcesConfig,

    /// Scraper settings, read by dynamic resources.
    mulesoft: MulesoftConfig,

    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Registration order, used for listing.
    order: Vec<String>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static JSON document.
    Json(Value),

    /// Content computed from the running configuration.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    /// Configured documentation URLs.
    DocSources,
}

impl ResourceService {
    pub fn new(config: ResourcesConfig, mulesoft: MulesoftConfig) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            mulesoft,
            resources: HashMap::new(),
            order: Vec::new(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        let uri = entry.resource.raw.uri.to_string();
        debug!("Registering resource: {}", uri);
        if !self.resources.contains_key(&uri) {
            self.order.push(uri.clone());
        }
        self.resources.insert(uri, entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.order
            .iter()
            .filter_map(|uri| self.resources.get(uri))
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let value = match &entry.content {
            ResourceContent::Json(value) => value.clone(),
            ResourceContent::Dynamic(DynamicResourceType::DocSources) => {
                DocSourcesResource::resolve(&self.mulesoft)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text: serde_json::to_string_pretty(&value)?,
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(ResourcesConfig::default(), MulesoftConfig::default())
    }

    fn read_json(result: &ReadResourceResult) -> Value {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                serde_json::from_str(text).unwrap()
            }
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_list_resources() {
        let resources = service().list_resources().await;
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].raw.uri, "about://calculator");
    }

    #[tokio::test]
    async fn test_read_calculator_about() {
        let result = service().read_resource("about://calculator").await.unwrap();
        let value = read_json(&result);
        assert_eq!(value["name"], "Simple Calculator Stdio");
    }

    #[tokio::test]
    async fn test_read_doc_sources_uses_config() {
        let mut mulesoft = MulesoftConfig::default();
        mulesoft.urls.connectors = "http://localhost:2/connectors".into();
        let service = ResourceService::new(ResourcesConfig::default(), mulesoft);

        let result = service.read_resource("mulesoft://sources").await.unwrap();
        assert_eq!(
            read_json(&result)["pages"]["connectors"],
            "http://localhost:2/connectors"
        );
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("mulesoft://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
