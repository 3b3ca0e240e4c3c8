use std::sync::Arc;

use crate::config::{Config, OpenTarget};
use crate::models::SearchResult;
use crate::services::searcher::BIII_TITLE;

pub const OPEN_ACTION_LABEL: &str = "Visit BioImage Informatics Index (BIII) website";

/// Opens URLs for the user.
pub trait Browser: Send + Sync {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// The desktop's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

/// A labelled, runnable action offered next to a search result.
pub struct SearchAction {
    label: String,
    run: Box<dyn Fn() + Send + Sync>,
}

impl SearchAction {
    pub fn new(label: impl Into<String>, run: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            run: Box::new(run),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn run(&self) {
        (self.run)()
    }
}

impl std::fmt::Debug for SearchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub trait SearchActionFactory: Send + Sync {
    fn supports(&self, result: &SearchResult) -> bool;

    fn create(&self, result: &SearchResult) -> SearchAction;
}

/// Offers "visit the BIII website" on BIII results.
#[derive(Clone)]
pub struct OpenBiiiInBrowser {
    site_url: String,
    open_target: OpenTarget,
    browser: Arc<dyn Browser>,
}

impl OpenBiiiInBrowser {
    pub fn new(site_url: impl Into<String>, open_target: OpenTarget, browser: Arc<dyn Browser>) -> Self {
        Self {
            site_url: site_url.into(),
            open_target,
            browser,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.searcher.site_url.clone(),
            config.browser.open_target,
            Arc::new(SystemBrowser),
        )
    }

    /// The action pointed at the site root, independent of any result.
    pub fn site_action(&self) -> SearchAction {
        self.action_for(self.site_url.clone())
    }

    fn action_for(&self, target: String) -> SearchAction {
        let browser = Arc::clone(&self.browser);
        SearchAction::new(OPEN_ACTION_LABEL, move || {
            tracing::debug!("Opening {} in browser", target);
            if let Err(e) = browser.open(&target) {
                tracing::error!("Failed to open {} in browser: {}", target, e);
            }
        })
    }
}

impl SearchActionFactory for OpenBiiiInBrowser {
    fn supports(&self, result: &SearchResult) -> bool {
        result.provider == BIII_TITLE
    }

    fn create(&self, result: &SearchResult) -> SearchAction {
        match self.open_target {
            OpenTarget::SiteRoot => self.site_action(),
            OpenTarget::ResultLink => self.action_for(result.link.clone()),
        }
    }
}
