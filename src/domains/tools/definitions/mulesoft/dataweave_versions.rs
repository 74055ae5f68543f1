//! DataWeave to Mule runtime compatibility with recent release notes.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::scrape_context;
use crate::core::config::Config;
use crate::domains::mulesoft::{DataWeaveScraper, ScrapeContext};
use crate::domains::tools::definitions::common::{parse_params, run_blocking, scrape_result};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DataWeaveVersionsParams {}

pub struct DataWeaveVersionsTool;

impl DataWeaveVersionsTool {
    pub const NAME: &'static str = "get_dataweave_versions";

    pub const DESCRIPTION: &'static str = "Scrape MuleSoft documentation to extract recent DataWeave version compatibility with Mule runtime. Returns the DataWeave to Mule runtime mapping newest first, supported JDK versions for each pairing, and breaking changes, new features and important notes for the most recent DataWeave releases.";

    #[instrument(skip_all)]
    pub fn execute(_params: &DataWeaveVersionsParams, ctx: ScrapeContext) -> CallToolResult {
        info!("DataWeave versions tool called");
        let result = DataWeaveScraper::new(ctx).scrape();
        scrape_result(
            &result,
            |v| {
                let newest = v
                    .recent_dataweave_versions
                    .first()
                    .map(|e| format!(" Newest: DataWeave {} on Mule {}.", e.dataweave_version, e.mule_version))
                    .unwrap_or_default();
                format!(
                    "Found {} DataWeave/Mule runtime pairings; release notes for {} versions.{}",
                    v.all_compatibility_data.len(),
                    v.release_notes.len(),
                    newest
                )
            },
            |f| f.error.clone(),
        )
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DataWeaveVersionsParams>(),
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
                let params: DataWeaveVersionsParams = parse_params(args)?;
                run_blocking(move || Self::execute(&params, scrape_context(&config))).await
            }
            .boxed()
        })
    }
}
