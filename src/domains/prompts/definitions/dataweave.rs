//! DataWeave compatibility prompt.

use super::PromptDefinition;

pub struct RecentDataWeaveCompatibilityPrompt;

impl PromptDefinition for RecentDataWeaveCompatibilityPrompt {
    const NAME: &'static str = "recent_dataweave_compatibility";
    const DESCRIPTION: &'static str = "Returns recent DataWeave versions and the Mule runtime versions they are compatible with, together with the supported JDK versions and any release-note highlights";

    fn template() -> &'static str {
        "List the most recent DataWeave versions, the Mule runtime versions they \
         work with, and the JDK versions supported. Include any notable release \
         notes or breaking changes for the last three DataWeave releases."
    }
}
