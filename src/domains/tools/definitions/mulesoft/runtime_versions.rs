//! Full Mule runtime version listing.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{fallback_note, scrape_context};
use crate::core::config::Config;
use crate::domains::mulesoft::{RuntimeScraper, ScrapeContext};
use crate::domains::tools::definitions::common::{parse_params, run_blocking, scrape_result};

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RuntimeVersionsParams {}

pub struct RuntimeVersionsTool;

impl RuntimeVersionsTool {
    pub const NAME: &'static str = "get_mulesoft_runtime_versions";

    pub const DESCRIPTION: &'static str = "Scrape MuleSoft documentation to extract ALL Edge and LTS Mule runtime versions with JDK compatibility. Returns every Edge and LTS version with release dates and supported JDKs, plus the complete Java compatibility matrix.";

    #[instrument(skip_all)]
    pub fn execute(_params: &RuntimeVersionsParams, ctx: ScrapeContext) -> CallToolResult {
        info!("Runtime versions tool called");
        let result = RuntimeScraper::new(ctx).scrape();
        scrape_result(
            &result,
            |v| {
                format!(
                    "Found {} Edge and {} LTS Mule runtime versions; Java compatibility known for {} versions.{}",
                    v.edge_versions.len(),
                    v.lts_versions.len(),
                    v.java_compatibility.len(),
                    fallback_note(&v.applied_fallbacks)
                )
            },
            |f| f.error.clone(),
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RuntimeVersionsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: RuntimeVersionsParams = parse_params(args)?;
                run_blocking(move || Self::execute(&params, scrape_context(&config))).await
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::mulesoft::test_pages;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_execute_reports_counts() {
        let (ctx, _) = test_pages::context(test_pages::runtime_source());
        let result = RuntimeVersionsTool::execute(&RuntimeVersionsParams::default(), ctx);
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).contains("1 Edge and 1 LTS"));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["edge_versions"][0]["version"], "4.9.0 Edge");
        assert_eq!(structured["lts_versions"][0]["jdk_versions"], serde_json::json!([8, 11, 17]));
        assert_eq!(structured["java_compatibility_strings"]["4.9.0 Edge"], "17, 21");
        assert!(structured.get("applied_fallbacks").is_none());
    }

    #[test]
    fn test_execute_fetch_failure() {
        let (ctx, _) = test_pages::context(Default::default());
        let result = RuntimeVersionsTool::execute(&RuntimeVersionsParams::default(), ctx);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Failed to fetch MuleSoft documentation"));
    }

    #[test]
    fn test_to_tool() {
        let tool = RuntimeVersionsTool::to_tool();
        assert_eq!(tool.name, RuntimeVersionsTool::NAME);
    }
}
