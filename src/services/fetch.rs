//! Query construction and transport for the BIII JSON export.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::{form_urlencoded, Url};

use crate::config::HttpConfig;
use crate::error::SearchError;
use crate::models::RawRecord;

const EXPORT_PATH: &str = "searchjsonexport";

/// Every query is narrowed to entries matching this keyword.
pub const FILTER_KEYWORD: &str = "ImageJ";

const SOURCE: &str = "imagej";

/// Transport used by [`QueryFetcher`], swappable in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url` and return the whole body. Non-success statuses are errors.
    async fn get_text(&self, url: &Url) -> Result<String, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(config: &HttpConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(ref user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self {
            inner: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_text(&self, url: &Url) -> Result<String, SearchError> {
        let response = self.inner.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Form-encodes user text the way the export endpoint expects it:
/// UTF-8 bytes, `+` for spaces.
pub fn encode_query_text(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

/// Builds the export URL for `text`.
///
/// The `(?=...)(?=ImageJ)` pair is the service's own filter syntax and is
/// passed through verbatim.
pub fn build_search_url(endpoint: &str, text: &str) -> Result<Url, SearchError> {
    let raw = format!(
        "{}/{}?search_api_fulltext=(?={})(?={})&_format=json&source={}",
        endpoint.trim_end_matches('/'),
        EXPORT_PATH,
        encode_query_text(text),
        FILTER_KEYWORD,
        SOURCE
    );
    Ok(Url::parse(&raw)?)
}

/// Parses a response body that must be a JSON array.
pub fn parse_records(body: &str) -> Result<Vec<RawRecord>, SearchError> {
    let values: Vec<Value> = serde_json::from_str(body)?;
    Ok(values.into_iter().map(RawRecord::new).collect())
}

#[derive(Clone)]
pub struct QueryFetcher {
    endpoint: String,
    client: Arc<dyn HttpClient>,
}

impl QueryFetcher {
    pub fn new(endpoint: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one query and surfaces any failure.
    pub async fn fetch(&self, text: &str) -> Result<Vec<RawRecord>, SearchError> {
        let url = build_search_url(&self.endpoint, text)?;
        tracing::debug!("Querying BIII: {}", url);
        let body = self.client.get_text(&url).await?;
        let records = parse_records(&body)?;
        tracing::debug!("BIII returned {} record(s)", records.len());
        Ok(records)
    }

    /// Runs one query, logging any failure and returning no records instead.
    pub async fn search(&self, text: &str) -> Vec<RawRecord> {
        match self.fetch(text).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("BIII search for '{}' failed: {}", text, e);
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for QueryFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryFetcher")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_text_form_semantics() {
        assert_eq!(encode_query_text("cell tracking"), "cell+tracking");
        assert_eq!(encode_query_text("a*b-c.d_e"), "a*b-c.d_e");
        assert_eq!(encode_query_text("Café"), "Caf%C3%A9");
        assert_eq!(encode_query_text("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_build_search_url_keeps_filter_syntax() {
        let url = build_search_url("http://biii.eu", "neuro").unwrap();
        assert_eq!(
            url.as_str(),
            "http://biii.eu/searchjsonexport?search_api_fulltext=(?=neuro)(?=ImageJ)&_format=json&source=imagej"
        );
    }

    #[test]
    fn test_build_search_url_trims_trailing_slash() {
        let url = build_search_url("http://biii.eu/", "cell tracking").unwrap();
        assert_eq!(
            url.query(),
            Some("search_api_fulltext=(?=cell+tracking)(?=ImageJ)&_format=json&source=imagej")
        );
        assert_eq!(url.path(), "/searchjsonexport");
    }

    #[test]
    fn test_build_search_url_rejects_bad_endpoint() {
        let result = build_search_url("not a url", "neuro");
        assert!(matches!(result, Err(SearchError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_records_requires_array() {
        assert!(matches!(
            parse_records(r#"{"title":"x"}"#),
            Err(SearchError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_records(r#"[{"title":"#),
            Err(SearchError::InvalidJson(_))
        ));
        assert_eq!(parse_records("[]").unwrap().len(), 0);
    }
}
