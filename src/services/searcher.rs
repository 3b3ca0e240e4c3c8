use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Config, SearcherConfig};
use crate::error::SearchError;
use crate::models::SearchResult;
use crate::services::fetch::{HttpClient, QueryFetcher, ReqwestClient};
use crate::services::normalize::ResultNormalizer;

pub const BIII_TITLE: &str = "BioImage Informatics Index";

/// A pluggable search source, as seen by an aggregating front end.
///
/// `search` never fails: a provider that cannot answer returns no results
/// so that its siblings still get to.
#[async_trait]
pub trait Searcher: Send + Sync {
    fn title(&self) -> &str;

    fn enabled(&self) -> bool {
        true
    }

    async fn search(&self, text: &str, fuzzy: bool) -> Vec<SearchResult>;
}

/// Searches the BioImage Informatics Index.
#[derive(Debug, Clone)]
pub struct BiiiSearcher {
    fetcher: QueryFetcher,
    normalizer: ResultNormalizer,
    enabled: bool,
}

impl BiiiSearcher {
    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        let client = ReqwestClient::new(&config.http)?;
        Ok(Self::with_client(&config.searcher, Arc::new(client)))
    }

    pub fn with_client(config: &SearcherConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            fetcher: QueryFetcher::new(config.endpoint.clone(), client),
            normalizer: ResultNormalizer::new(
                BIII_TITLE,
                config.link_base.clone(),
                config.icon_path.clone(),
            ),
            enabled: config.enabled,
        }
    }
}

#[async_trait]
impl Searcher for BiiiSearcher {
    fn title(&self) -> &str {
        BIII_TITLE
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    // The index has no fuzzy mode; the flag is accepted and ignored.
    async fn search(&self, text: &str, _fuzzy: bool) -> Vec<SearchResult> {
        let records = self.fetcher.search(text).await;
        self.normalizer.normalize(&records)
    }
}
