//! Calculator description resource.

use serde_json::json;

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::ToolRegistry;

pub struct CalculatorAboutResource;

impl ResourceDefinition for CalculatorAboutResource {
    const URI: &'static str = "about://calculator";
    const NAME: &'static str = "about_calculator";
    const DESCRIPTION: &'static str = "Provides information about the calculator tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Json(json!({
            "version": "1.0.0",
            "name": "Simple Calculator Stdio",
            "description": "A simple calculator MCP that performs basic arithmetic operations.",
            "tools": ToolRegistry::calculator_tool_names(),
        }))
    }
}
