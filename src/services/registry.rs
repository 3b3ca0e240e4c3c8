use crate::models::ProviderResults;
use crate::services::searcher::Searcher;

/// Aggregates registered search providers behind one query.
#[derive(Default)]
pub struct SearchService {
    searchers: Vec<Box<dyn Searcher>>,
}

impl SearchService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, searcher: Box<dyn Searcher>) {
        tracing::debug!(
            "Registered searcher '{}' (enabled: {})",
            searcher.title(),
            searcher.enabled()
        );
        self.searchers.push(searcher);
    }

    pub fn with_searcher(mut self, searcher: Box<dyn Searcher>) -> Self {
        self.register(searcher);
        self
    }

    /// Titles of all registered providers, enabled or not.
    pub fn providers(&self) -> Vec<&str> {
        self.searchers.iter().map(|s| s.title()).collect()
    }

    /// Queries each enabled provider in registration order.
    pub async fn search(&self, text: &str, fuzzy: bool) -> Vec<ProviderResults> {
        let mut all = Vec::new();
        for searcher in self.searchers.iter().filter(|s| s.enabled()) {
            let results = searcher.search(text, fuzzy).await;
            tracing::info!("{}: {} result(s) for '{}'", searcher.title(), results.len(), text);
            all.push(ProviderResults {
                provider: searcher.title().to_string(),
                results,
            });
        }
        all
    }
}
