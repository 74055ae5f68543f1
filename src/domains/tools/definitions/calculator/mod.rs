//! Basic arithmetic tools.

mod arithmetic;
mod division;

pub use arithmetic::{AdditionTool, MultiplyTool, OperandsParams, SubtractTool};
pub use division::{DivideTool, DivisionParams, ReminderTool};

use rmcp::model::CallToolResult;
use serde::Serialize;

use super::common::structured_result;

/// Structured output of every calculator tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub result: f64,
}

fn calculation_result(label: &str, value: f64) -> CallToolResult {
    structured_result(format!("{label}: {value}"), &CalculationResult { result: value })
}
