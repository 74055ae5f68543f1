//! Tool Registry - the catalogue of every tool the server exposes.

use rmcp::model::Tool;

use super::definitions::{
    AdditionTool, ConnectorVersionsTool, DataWeaveVersionsTool, DivideTool, LatestVersionsTool,
    MultiplyTool, ReminderTool, RuntimeVersionsTool, SubtractTool,
};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            RuntimeVersionsTool::NAME,
            LatestVersionsTool::NAME,
            DataWeaveVersionsTool::NAME,
            ConnectorVersionsTool::NAME,
            AdditionTool::NAME,
            SubtractTool::NAME,
            MultiplyTool::NAME,
            DivideTool::NAME,
            ReminderTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            RuntimeVersionsTool::to_tool(),
            LatestVersionsTool::to_tool(),
            DataWeaveVersionsTool::to_tool(),
            ConnectorVersionsTool::to_tool(),
            AdditionTool::to_tool(),
            SubtractTool::to_tool(),
            MultiplyTool::to_tool(),
            DivideTool::to_tool(),
            ReminderTool::to_tool(),
        ]
    }

    /// Names of the calculator tools, in registration order.
    pub fn calculator_tool_names() -> Vec<&'static str> {
        vec![
            AdditionTool::NAME,
            SubtractTool::NAME,
            MultiplyTool::NAME,
            DivideTool::NAME,
            ReminderTool::NAME,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"get_connector_versions"));
        assert!(names.contains(&"divide"));
    }

    #[test]
    fn test_tools_have_object_schemas() {
        for tool in ToolRegistry::get_all_tools() {
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema",
                tool.name
            );
            assert!(tool.description.is_some());
        }
    }
}
