//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    ConnectorCompatibilityPrompt, ListAllConnectorCompatibilityPrompt,
    ListAllRuntimeVersionsPrompt, PromptDefinition, RecentDataWeaveCompatibilityPrompt,
    ShowLatestVersionsPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::template(),
    )
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<ListAllRuntimeVersionsPrompt>(),
        build_template::<ShowLatestVersionsPrompt>(),
        build_template::<RecentDataWeaveCompatibilityPrompt>(),
        build_template::<ListAllConnectorCompatibilityPrompt>(),
        build_template::<ConnectorCompatibilityPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        ListAllRuntimeVersionsPrompt::NAME,
        ShowLatestVersionsPrompt::NAME,
        RecentDataWeaveCompatibilityPrompt::NAME,
        ListAllConnectorCompatibilityPrompt::NAME,
        ConnectorCompatibilityPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 5);

        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, prompt_names());
    }
}
