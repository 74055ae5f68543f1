//! Connector compatibility prompts.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// General runtime/JDK matrix across all connectors.
pub struct ListAllConnectorCompatibilityPrompt;

impl PromptDefinition for ListAllConnectorCompatibilityPrompt {
    const NAME: &'static str = "list_all_connector_compatibility";
    const DESCRIPTION: &'static str = "Retrieves a matrix of Mule runtime versions and JDK compatibility for all MuleSoft connectors (no specific artifactId)";

    fn template() -> &'static str {
        "Provide a compatibility matrix for **all** MuleSoft connectors, \
         showing which Mule runtime versions and JDK versions each connector supports."
    }
}

/// Compatibility of one connector, looked up by Maven artifact id.
pub struct ConnectorCompatibilityPrompt;

impl PromptDefinition for ConnectorCompatibilityPrompt {
    const NAME: &'static str = "connector_compatibility";
    const DESCRIPTION: &'static str = "Retrieves the Mule runtime and JDK compatibility of a single MuleSoft connector identified by its Maven artifactId";

    fn template() -> &'static str {
        "Show the Mule runtime versions and JDK versions supported by the \
         **{{artifact_id}}** connector, using its release notes."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "artifact_id".to_string(),
            title: None,
            description: Some(
                "Maven artifactId of the connector, e.g. mule-http-connector".to_string(),
            ),
            required: Some(true),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_prompt_requires_artifact_id() {
        let args = ConnectorCompatibilityPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "artifact_id");
        assert_eq!(args[0].required, Some(true));
        assert!(ConnectorCompatibilityPrompt::template().contains("{{artifact_id}}"));
    }

    #[test]
    fn test_general_prompt_takes_no_arguments() {
        assert!(ListAllConnectorCompatibilityPrompt::arguments().is_empty());
    }
}
