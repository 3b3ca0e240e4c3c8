use biii_search::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biii_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search { text, fuzzy, json }) => {
            biii_search::cli::search::run(&cli.config, &text, fuzzy, json).await?;
        }
        Some(Commands::Slug { title }) => {
            biii_search::cli::slug::run(&title).await?;
        }
        Some(Commands::Open) => {
            biii_search::cli::open::run(&cli.config).await?;
        }
        Some(Commands::Config { command }) => {
            biii_search::cli::config::run(&cli.config, command).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
