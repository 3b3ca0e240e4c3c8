use crate::models::ProviderResults;
use crate::services::{BiiiSearcher, SearchService};
use crate::Config;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn run(config_path: &Path, text: &str, fuzzy: bool, json: bool) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let searcher =
        BiiiSearcher::from_config(&config).context("Failed to set up the BIII searcher")?;

    if !config.searcher.enabled {
        tracing::warn!("The BIII searcher is disabled in {}", config_path.display());
    }

    let service = SearchService::new().with_searcher(Box::new(searcher));
    let all = service.search(text, fuzzy).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else {
        print_results(&all);
    }

    Ok(())
}

fn print_results(all: &[ProviderResults]) {
    for provider in all {
        println!("\n  {} ({} results)\n", provider.provider, provider.results.len());
        for result in &provider.results {
            println!("  {}", result.title);
            println!("    {}", result.link);
        }
    }
    println!();
}
