//! Helpers shared by every tool definition.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::domains::mulesoft::ScrapeResult;
use crate::domains::tools::ToolError;

/// Success result carrying `payload` as structured content.
pub fn structured_result<T: Serialize>(summary: String, payload: &T) -> CallToolResult {
    build_result(summary, payload, false)
}

/// Error result that still carries a structured payload the caller can read.
pub fn failure_result<T: Serialize>(summary: String, payload: &T) -> CallToolResult {
    build_result(summary, payload, true)
}

fn build_result<T: Serialize>(summary: String, payload: &T, is_error: bool) -> CallToolResult {
    match serde_json::to_value(payload) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(structured),
            is_error: Some(is_error),
            meta: None,
        },
        Err(e) => {
            warn!("Failed to serialize structured content: {}", e);
            error_result(&summary)
        }
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Render a scrape outcome. `summarize` only sees successful payloads.
pub fn scrape_result<T, E>(
    result: &ScrapeResult<T, E>,
    summarize: impl FnOnce(&T) -> String,
    describe_failure: impl FnOnce(&E) -> String,
) -> CallToolResult
where
    T: Serialize,
    E: Serialize,
{
    match result {
        ScrapeResult::Success(value) => structured_result(summarize(value), result),
        ScrapeResult::Failure(err) => failure_result(describe_failure(err), result),
    }
}

/// Parse tool arguments into `P`.
pub fn parse_params<P: serde::de::DeserializeOwned>(
    args: serde_json::Map<String, Value>,
) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()).into())
}

/// Run blocking work on tokio's blocking pool.
///
/// `reqwest::blocking` owns a runtime of its own and panics when driven from
/// inside a tokio worker, so every scrape runs here.
pub async fn run_blocking<F>(work: F) -> Result<CallToolResult, McpError>
where
    F: FnOnce() -> CallToolResult + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| {
            warn!("Blocking task failed: {:?}", e);
            ToolError::WorkerPanicked.into()
        })
}

/// First text block of a result, for tests.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
