use thiserror::Error;

/// Failures the fetcher can hit while talking to the remote index.
///
/// None of these reach a `Searcher` caller: the provider logs them and
/// degrades to an empty result list.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
