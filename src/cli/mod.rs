pub mod config;
pub mod open;
pub mod search;
pub mod slug;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "biii")]
#[command(version)]
#[command(about = "Search the BioImage Informatics Index", long_about = None)]
pub struct Cli {
    #[arg(short, long, env = "BIII_CONFIG", default_value = "biii.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search BIII for ImageJ-related entries
    Search {
        text: String,
        #[arg(long)]
        fuzzy: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the short-link slug for a title
    Slug { title: String },
    /// Open the BIII website in the default browser
    Open,
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the per-user config file location
    Path,
}
