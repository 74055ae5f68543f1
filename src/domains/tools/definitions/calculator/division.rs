//! Division and remainder of two numbers.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::calculation_result;
use crate::domains::tools::definitions::common::{error_result, parse_params};

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero(divisor).";

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct DivisionParams {
    #[schemars(description = "The number to divide")]
    pub dividend: f64,

    #[schemars(description = "The number to divide by; must not be zero")]
    pub divisor: f64,
}

fn tool(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<DivisionParams>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

fn route<S>(tool: Tool, execute: fn(&DivisionParams) -> CallToolResult) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            let params: DivisionParams = parse_params(args)?;
            Ok(execute(&params))
        }
        .boxed()
    })
}

pub struct DivideTool;

impl DivideTool {
    pub const NAME: &'static str = "divide";
    pub const DESCRIPTION: &'static str = "Divide two numbers. Returns dividend divided by divisor; a zero divisor is an error.";

    pub fn execute(params: &DivisionParams) -> CallToolResult {
        info!("divide tool called");
        if params.divisor == 0.0 {
            return error_result(DIVIDE_BY_ZERO);
        }
        calculation_result("Quotient", params.dividend / params.divisor)
    }

    pub fn to_tool() -> Tool {
        tool(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S: Send + Sync + 'static>() -> ToolRoute<S> {
        route(Self::to_tool(), Self::execute)
    }
}

pub struct ReminderTool;

impl ReminderTool {
    pub const NAME: &'static str = "reminder";
    pub const DESCRIPTION: &'static str = "Divide two numbers and return the remainder. The result takes the sign of the divisor; a zero divisor is an error.";

    pub fn execute(params: &DivisionParams) -> CallToolResult {
        info!("reminder tool called");
        if params.divisor == 0.0 {
            return error_result(DIVIDE_BY_ZERO);
        }
        calculation_result("Remainder", floored_remainder(params.dividend, params.divisor))
    }

    pub fn to_tool() -> Tool {
        tool(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S: Send + Sync + 'static>() -> ToolRoute<S> {
        route(Self::to_tool(), Self::execute)
    }
}

/// Remainder of floored division: the sign follows the divisor.
fn floored_remainder(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    if rem != 0.0 && (rem < 0.0) != (divisor < 0.0) {
        rem + divisor
    } else {
        rem
    }
}
