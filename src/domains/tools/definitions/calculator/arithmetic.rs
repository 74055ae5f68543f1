//! Addition, subtraction and multiplication of two numbers.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::calculation_result;
use crate::domains::tools::definitions::common::parse_params;

/// Two operands.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct OperandsParams {
    #[schemars(description = "The first number")]
    pub first_number: f64,

    #[schemars(description = "The second number")]
    pub second_number: f64,
}

fn tool(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<OperandsParams>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

fn route<S>(tool: Tool, execute: fn(&OperandsParams) -> CallToolResult) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            let params: OperandsParams = parse_params(args)?;
            Ok(execute(&params))
        }
        .boxed()
    })
}

pub struct AdditionTool;

impl AdditionTool {
    pub const NAME: &'static str = "addition";
    pub const DESCRIPTION: &'static str = "Add two numbers. Returns the sum of first_number and second_number.";

    pub fn execute(params: &OperandsParams) -> CallToolResult {
        info!("addition tool called");
        calculation_result("Sum", params.first_number + params.second_number)
    }

    pub fn to_tool() -> Tool {
        tool(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S: Send + Sync + 'static>() -> ToolRoute<S> {
        route(Self::to_tool(), Self::execute)
    }
}

pub struct SubtractTool;

impl SubtractTool {
    pub const NAME: &'static str = "subtract";
    pub const DESCRIPTION: &'static str = "Subtract two numbers. Returns first_number minus second_number.";

    pub fn execute(params: &OperandsParams) -> CallToolResult {
        info!("subtract tool called");
        calculation_result("Difference", params.first_number - params.second_number)
    }

    pub fn to_tool() -> Tool {
        tool(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S: Send + Sync + 'static>() -> ToolRoute<S> {
        route(Self::to_tool(), Self::execute)
    }
}

pub struct MultiplyTool;

impl MultiplyTool {
    pub const NAME: &'static str = "multiply";
    pub const DESCRIPTION: &'static str = "Multiply two numbers. Returns the product of first_number and second_number.";

    pub fn execute(params: &OperandsParams) -> CallToolResult {
        info!("multiply tool called");
        calculation_result("Product", params.first_number * params.second_number)
    }

    pub fn to_tool() -> Tool {
        tool(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S: Send + Sync + 'static>() -> ToolRoute<S> {
        route(Self::to_tool(), Self::execute)
    }
}
