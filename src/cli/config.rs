use crate::Config;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn run(config_path: &Path, command: super::ConfigCommand) -> Result<()> {
    match command {
        super::ConfigCommand::Show => {
            let config = Config::load_or_default(config_path)?;
            let rendered =
                toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{}", rendered);
        }
        super::ConfigCommand::Path => match Config::user_config_path() {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!("Could not determine the user config directory"),
        },
    }

    Ok(())
}
