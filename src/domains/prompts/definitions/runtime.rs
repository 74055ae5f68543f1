//! Prompts for the Mule runtime version tools.

use super::PromptDefinition;

/// Every Edge and LTS runtime with its JDK matrix.
pub struct ListAllRuntimeVersionsPrompt;

impl PromptDefinition for ListAllRuntimeVersionsPrompt {
    const NAME: &'static str = "list_all_mulesoft_runtime_versions";
    const DESCRIPTION: &'static str = "Retrieves a complete list of MuleSoft EDGE and LTS runtime versions together with their JDK compatibility matrix";

    fn template() -> &'static str {
        "Please provide **all** MuleSoft EDGE and LTS runtime versions, \
         including release dates and the JDK versions each runtime supports."
    }
}

/// Only the newest Edge and LTS runtime.
pub struct ShowLatestVersionsPrompt;

impl PromptDefinition for ShowLatestVersionsPrompt {
    const NAME: &'static str = "show_latest_mulesoft_versions";
    const DESCRIPTION: &'static str = "Retrieves only the most recent MuleSoft EDGE and LTS runtime versions together with their JDK compatibility";

    fn template() -> &'static str {
        "Give me the **latest** MuleSoft EDGE and LTS runtime versions \
         with their release dates and supported JDK versions."
    }
}
