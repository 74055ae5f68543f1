//! MuleSoft documentation scraping.
//!
//! Each scraper fetches a fixed set of docs.mulesoft.com pages, pulls
//! version tables and headings out of them and returns a [`ScrapeResult`].
//! Nothing is cached; every call re-reads the live pages.

pub mod connector;
pub mod dataweave;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod matcher;
pub mod model;
pub mod runtime;
pub mod versions;

use std::sync::Arc;

use crate::core::config::MulesoftConfig;

pub use connector::ConnectorScraper;
pub use dataweave::DataWeaveScraper;
pub use error::{ErrorKind, FetchError, ScrapeError};
pub use fetcher::{Fetcher, HttpPageSource, PageSource};
pub use model::{ScrapeFailure, ScrapeResult};
pub use runtime::RuntimeScraper;

/// Everything a scraper needs: where to look and how to fetch.
#[derive(Debug, Clone)]
pub struct ScrapeContext {
    pub config: Arc<MulesoftConfig>,
    pub fetcher: Fetcher,
}

impl ScrapeContext {
    pub fn new(config: Arc<MulesoftConfig>, fetcher: Fetcher) -> Self {
        Self { config, fetcher }
    }

    /// Context that fetches live pages over HTTP.
    pub fn http(config: Arc<MulesoftConfig>) -> Self {
        let fetcher = Fetcher::http(&config);
        Self { config, fetcher }
    }

    /// Context serving pages from `source` instead of the network.
    pub fn with_source(config: Arc<MulesoftConfig>, source: Arc<dyn PageSource>) -> Self {
        let fetcher = Fetcher::new(source, &config);
        Self { config, fetcher }
    }
}

/// Pages shared by the scraper tests.
#[cfg(test)]
pub(crate) mod test_pages {
    use super::*;
    use crate::domains::mulesoft::fetcher::fixtures::FixtureSource;

    pub const CADENCE: &str = r#"
        <html><body>
          <h2>Release cadence</h2>
          <table>
            <tr><th>Version</th><th>Release date</th><th>Java</th></tr>
            <tr><td>4.9.0 Edge</td><td>2024-05-01</td><td>17, 21</td></tr>
            <tr><td>4.6.0 LTS</td><td>2023-04-01</td><td>8, 11, 17</td></tr>
          </table>
        </body></html>
    "#;

    pub const JAVA_SUPPORT: &str = r#"
        <html><body>
          <table>
            <tr><th>Mule Version</th><th>Java</th></tr>
            <tr><td>4.9.0 Edge</td><td>17, 21</td></tr>
          </table>
        </body></html>
    "#;

    pub fn config() -> Arc<MulesoftConfig> {
        Arc::new(MulesoftConfig::default())
    }

    pub fn context(source: FixtureSource) -> (ScrapeContext, Arc<FixtureSource>) {
        let source = Arc::new(source);
        (
            ScrapeContext::with_source(config(), source.clone()),
            source,
        )
    }

    /// Fixture source answering the cadence and Java support pages.
    pub fn runtime_source() -> FixtureSource {
        let config = config();
        let urls = &config.urls;
        FixtureSource::new()
            .page(&urls.lts_edge_release_cadence, CADENCE)
            .page(&urls.java_support, JAVA_SUPPORT)
    }
}
