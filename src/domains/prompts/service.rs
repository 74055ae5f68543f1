//! Prompt service implementation.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::core::config::PromptsConfig;

/// Service for listing and instantiating prompts.
pub struct PromptService {
    #[allow(dead_code)]
    config: PromptsConfig,

    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,

    /// Registration order, used for listing.
    order: Vec<String>,
}

impl PromptService {
    pub fn new(config: PromptsConfig) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            config,
            prompts: HashMap::new(),
            order: Vec::new(),
        };
        for template in get_all_prompts() {
            service.register_prompt(template);
        }
        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        if !self.prompts.contains_key(&template.name) {
            self.order.push(template.name.clone());
        }
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.order
            .iter()
            .filter_map(|name| self.prompts.get(name))
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: (!template.arguments.is_empty()).then(|| template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            let present = arguments
                .get(&arg.name)
                .is_some_and(|value| !value.trim().is_empty());
            if arg.required.unwrap_or(false) && !present {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments);

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn service() -> PromptService {
        PromptService::new(PromptsConfig::default())
    }

    fn message_text(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_list_prompts_in_registration_order() {
        let prompts = service().list_prompts().await;
        assert_eq!(prompts.len(), 5);
        assert_eq!(prompts[0].name, "list_all_mulesoft_runtime_versions");
        assert!(prompts[0].arguments.is_none());
        assert_eq!(prompts[4].name, "connector_compatibility");
        assert_eq!(prompts[4].arguments.as_ref().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_fixed_prompt_is_user_message() {
        let result = service()
            .get_prompt("show_latest_mulesoft_versions", None)
            .await
            .unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].role, PromptMessageRole::User));
        assert!(message_text(&result).contains("**latest**"));
    }

    #[tokio::test]
    async fn test_connector_prompt_renders_artifact_id() {
        let mut args = HashMap::new();
        args.insert("artifact_id".to_string(), "mule-http-connector".to_string());

        let result = service()
            .get_prompt("connector_compatibility", Some(args))
            .await
            .unwrap();
        let text = message_text(&result);
        assert!(text.contains("**mule-http-connector**"));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let result = service().get_prompt("connector_compatibility", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));

        let mut args = HashMap::new();
        args.insert("artifact_id".to_string(), "  ".to_string());
        let result = service().get_prompt("connector_compatibility", Some(args)).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = service().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
