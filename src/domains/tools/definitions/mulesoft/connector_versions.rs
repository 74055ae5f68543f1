//! Anypoint connector version compatibility.

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
use crate::domains::mulesoft::model::ConnectorVersions;
use crate::domains::mulesoft::{ConnectorScraper, ScrapeContext};
use crate::domains::tools::definitions::common::{parse_params, run_blocking, scrape_result};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ConnectorVersionsParams {
    /// Connector artifact id, e.g. http, salesforce, snowflake, email, sockets.
    #[schemars(
        description = "Connector artifact id (e.g. http, salesforce, snowflake, email, sockets). Omit for the general Mule runtime compatibility matrix."
    )]
    #[serde(default, alias = "artifactId")]
    pub artifact_id: Option<String>,
}

pub struct ConnectorVersionsTool;

impl ConnectorVersionsTool {
    pub const NAME: &'static str = "get_connector_versions";

    pub const DESCRIPTION: &'static str = "Scrape MuleSoft documentation to extract Anypoint Connector version compatibility. With an artifact id, returns each released connector version with its Mule runtime and JDK compatibility and Maven artifact id. Without one, returns the general Mule runtime to JDK matrix.";

    #[instrument(skip_all, fields(artifact_id = ?params.artifact_id))]
    pub fn execute(params: &ConnectorVersionsParams, ctx: ScrapeContext) -> CallToolResult {
        info!("Connector versions tool called");
        let result = ConnectorScraper::new(ctx).scrape(params.artifact_id.as_deref());
        scrape_result(&result, summarize, |f| f.message().to_string())
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ConnectorVersionsParams>(),
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
                let params: ConnectorVersionsParams = parse_params(args)?;
                run_blocking(move || Self::execute(&params, scrape_context(&config))).await
            }
            .boxed()
        })
    }
}

fn summarize(versions: &ConnectorVersions) -> String {
    match versions {
        ConnectorVersions::General {
            connector_compatibility,
            ..
        } => format!(
            "General Mule runtime compatibility for {} runtime versions. Pass an artifact_id for connector-specific versions.",
            connector_compatibility.len()
        ),
        ConnectorVersions::ConnectorSpecific {
            connector_specific,
            applied_fallbacks,
            ..
        } => {
            let name = connector_specific
                .first()
                .map(|e| e.connector_name.as_str())
                .unwrap_or_default();
            format!(
                "Found {} versions of {}.{}",
                connector_specific.len(),
                name,
                fallback_note(applied_fallbacks)
            )
        }
        ConnectorVersions::NoVersionData { message, .. } => message.clone(),
    }
}
