use crate::models::{RawRecord, SearchResult};
use crate::services::slug::slugify;

/// Turns raw export records into display results.
#[derive(Debug, Clone)]
pub struct ResultNormalizer {
    provider: String,
    link_base: String,
    icon_path: String,
}

impl ResultNormalizer {
    pub fn new(
        provider: impl Into<String>,
        link_base: impl Into<String>,
        icon_path: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            link_base: link_base.into(),
            icon_path: icon_path.into(),
        }
    }

    /// One result per record, in input order. Malformed fields become empty
    /// strings rather than dropping the record.
    pub fn normalize(&self, records: &[RawRecord]) -> Vec<SearchResult> {
        records.iter().map(|r| self.normalize_record(r)).collect()
    }

    pub fn normalize_record(&self, record: &RawRecord) -> SearchResult {
        let title = record.get_str("title");
        SearchResult {
            provider: self.provider.clone(),
            title: title.to_string(),
            link: self.link_for(title),
            summary: record.get_str("body").to_string(),
            icon_path: self.icon_path.clone(),
            thumbnail: None,
        }
    }

    pub fn link_for(&self, title: &str) -> String {
        format!("{}/{}", self.link_base.trim_end_matches('/'), slugify(title))
    }
}
