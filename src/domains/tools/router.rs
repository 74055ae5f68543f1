//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    AdditionTool, ConnectorVersionsTool, DataWeaveVersionsTool, DivideTool, LatestVersionsTool,
    MultiplyTool, ReminderTool, RuntimeVersionsTool, SubtractTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(RuntimeVersionsTool::create_route(config.clone()))
        .with_route(LatestVersionsTool::create_route(config.clone()))
        .with_route(DataWeaveVersionsTool::create_route(config.clone()))
        .with_route(ConnectorVersionsTool::create_route(config))
        .with_route(AdditionTool::create_route())
        .with_route(SubtractTool::create_route())
        .with_route(MultiplyTool::create_route())
        .with_route(DivideTool::create_route())
        .with_route(ReminderTool::create_route())
}
