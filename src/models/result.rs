use serde::{Deserialize, Serialize};

/// A normalized hit, ready for display by a search front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the provider that produced this result.
    pub provider: String,
    pub title: String,
    pub link: String,
    pub summary: String,
    pub icon_path: String,
    pub thumbnail: Option<String>,
}

impl SearchResult {
    /// Display properties in presentation order.
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Title", self.title.as_str()),
            ("Link", self.link.as_str()),
            ("Summary", self.summary.as_str()),
        ]
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.title, self.link)
    }
}

/// Results from a single provider within an aggregated search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResults {
    pub provider: String,
    pub results: Vec<SearchResult>,
}

impl ProviderResults {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
