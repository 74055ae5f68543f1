//! Prompt templates.
//!
//! Templates use a plain `{{variable}}` placeholder syntax.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Substitute `{{key}}` with each argument value.
    ///
    /// Placeholders with no matching argument are removed.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = self.template.clone();
        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value.trim());
        }
        strip_placeholders(&result)
    }
}

fn strip_placeholders(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        match rest[start..].find("}}") {
            Some(end) => rest = &rest[start + end + 2..],
            None => {
                rest = &rest[start..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Show {{artifact_id}} versions");

        let mut args = HashMap::new();
        args.insert("artifact_id".to_string(), " mule-http-connector ".to_string());

        assert_eq!(template.render(&args), "Show mule-http-connector versions");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let template = PromptTemplate::new("test", None, vec![], "A{{missing}}B");
        assert_eq!(template.render(&HashMap::new()), "AB");
    }

    #[test]
    fn test_unclosed_placeholder_kept() {
        let template = PromptTemplate::new("test", None, vec![], "A {{broken");
        assert_eq!(template.render(&HashMap::new()), "A {{broken");
    }
}
