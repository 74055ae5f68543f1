//! Prompt definitions module.
//!
//! Each prompt provides its metadata and template through `PromptDefinition`.
//! Prompts are grouped by the tool they steer the client towards.

use rmcp::model::PromptArgument;

mod connector;
mod dataweave;
mod runtime;

pub use connector::{ConnectorCompatibilityPrompt, ListAllConnectorCompatibilityPrompt};
pub use dataweave::RecentDataWeaveCompatibilityPrompt;
pub use runtime::{ListAllRuntimeVersionsPrompt, ShowLatestVersionsPrompt};

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }
}
