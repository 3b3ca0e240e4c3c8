use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ICON: &str = "/icons/search/NEUBIASlogo.png";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub searcher: SearcherConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearcherConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Host serving the `searchjsonexport` endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Prefix for the slug-based links attached to each result.
    #[serde(default = "default_link_base")]
    pub link_base: String,
    /// Page opened by the "visit website" action.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_icon_path")]
    pub icon_path: String,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_endpoint(),
            link_base: default_link_base(),
            site_url: default_site_url(),
            icon_path: default_icon_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout. Unset means the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub open_target: OpenTarget,
}

/// What the "visit website" action opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum OpenTarget {
    /// The site root, whichever result was picked.
    #[default]
    #[serde(rename = "site")]
    SiteRoot,
    /// The picked result's own link.
    #[serde(rename = "result")]
    ResultLink,
}

impl std::fmt::Display for OpenTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenTarget::SiteRoot => write!(f, "site"),
            OpenTarget::ResultLink => write!(f, "result"),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "http://biii.eu".to_string()
}

fn default_link_base() -> String {
    "http://biii.eu".to_string()
}

fn default_site_url() -> String {
    "https://biii.eu".to_string()
}

fn default_icon_path() -> String {
    DEFAULT_ICON.to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, then the per-user config file, and falls
    /// back to the built-in defaults when neither is present.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }
        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                tracing::debug!("Using user config at {}", user_path.display());
                return Self::load(&user_path);
            }
        }
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("biii-search").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        validate_http_url("searcher.endpoint", &self.searcher.endpoint)?;
        validate_http_url("searcher.link_base", &self.searcher.link_base)?;
        validate_http_url("searcher.site_url", &self.searcher.site_url)?;
        if self.http.timeout_secs == Some(0) {
            anyhow::bail!("http.timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let url = url::Url::parse(value)
        .with_context(|| format!("{} is not a valid URL: '{}'", field, value))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("{} must use http or https, got '{}'", field, url.scheme());
    }
    Ok(())
}
