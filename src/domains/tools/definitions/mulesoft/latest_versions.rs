//! Latest Edge and LTS Mule runtime versions.

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
use crate::domains::mulesoft::model::VersionRecord;
use crate::domains::mulesoft::{RuntimeScraper, ScrapeContext};
use crate::domains::tools::definitions::common::{parse_params, run_blocking, scrape_result};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct LatestVersionsParams {}

pub struct LatestVersionsTool;

impl LatestVersionsTool {
    pub const NAME: &'static str = "get_latest_mulesoft_versions";

    pub const DESCRIPTION: &'static str = "Get ONLY the latest Edge and LTS MuleSoft runtime versions with JDK compatibility. Returns the newest Edge and LTS versions with release dates and supported JDKs, and a Java compatibility matrix restricted to those two versions.";

    #[instrument(skip_all)]
    pub fn execute(_params: &LatestVersionsParams, ctx: ScrapeContext) -> CallToolResult {
        info!("Latest versions tool called");
        let result = RuntimeScraper::new(ctx).latest();
        scrape_result(
            &result,
            |v| {
                format!(
                    "Latest Edge: {}. Latest LTS: {}.{}",
                    describe(v.latest_edge.as_ref()),
                    describe(v.latest_lts.as_ref()),
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
            input_schema: cached_schema_for_type::<LatestVersionsParams>(),
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
                let params: LatestVersionsParams = parse_params(args)?;
                run_blocking(move || Self::execute(&params, scrape_context(&config))).await
            }
            .boxed()
        })
    }
}

fn describe(record: Option<&VersionRecord>) -> String {
    match record {
        Some(r) => format!("{} (released {}, JDK {})", r.version, r.release_date, r.jdk_versions_raw),
        None => "none listed".to_string(),
    }
}
