use crate::services::OpenBiiiInBrowser;
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let action = OpenBiiiInBrowser::from_config(&config).site_action();
    tracing::info!("{}: {}", action.label(), config.searcher.site_url);
    action.run();
    Ok(())
}
