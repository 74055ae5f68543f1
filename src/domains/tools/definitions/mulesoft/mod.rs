//! MuleSoft documentation tools.
//!
//! Each tool scrapes docs.mulesoft.com on a dedicated thread and returns the
//! scrape payload as structured content.

mod connector_versions;
mod dataweave_versions;
mod latest_versions;
mod runtime_versions;

use std::sync::Arc;

use crate::core::config::Config;
use crate::domains::mulesoft::ScrapeContext;
use crate::domains::mulesoft::model::Fallback;

pub use connector_versions::{ConnectorVersionsParams, ConnectorVersionsTool};
pub use dataweave_versions::{DataWeaveVersionsParams, DataWeaveVersionsTool};
pub use latest_versions::{LatestVersionsParams, LatestVersionsTool};
pub use runtime_versions::{RuntimeVersionsParams, RuntimeVersionsTool};

/// Live scrape context for one tool call.
pub fn scrape_context(config: &Config) -> ScrapeContext {
    ScrapeContext::http(Arc::new(config.mulesoft.clone()))
}

/// Sentence appended to a summary when heuristics shaped the result.
fn fallback_note(fallbacks: &[Fallback]) -> String {
    if fallbacks.is_empty() {
        return String::new();
    }
    let names: Vec<String> = fallbacks
        .iter()
        .filter_map(|f| serde_json::to_value(f).ok())
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    format!(
        " Derived through layout heuristics ({}); verify against the source pages.",
        names.join(", ")
    )
}
