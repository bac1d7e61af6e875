mod db;
mod insights;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storelens")]
#[command(about = "Storefront brand insights command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape a storefront and its competitors, persist them, and print a summarized report
    Insights {
        /// Storefront URL, e.g. `https://shop.example.com`
        url: String,
        /// Skip competitor discovery
        #[arg(long)]
        no_competitors: bool,
    },
    /// Scrape a single storefront and print the extracted record (nothing is persisted)
    Scrape {
        url: String,
    },
    /// Print the competitor candidates discovered for a storefront
    Competitors {
        url: String,
    },
    /// Database maintenance commands
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check that the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = storelens_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Insights {
            url,
            no_competitors,
        } => insights::run_insights(&config, &url, !no_competitors).await,
        Commands::Scrape { url } => insights::run_scrape(&config, &url).await,
        Commands::Competitors { url } => insights::run_competitors(&config, &url).await,
        Commands::Db { command } => match command {
            DbCommands::Ping => db::run_ping(&config).await,
            DbCommands::Migrate => db::run_migrate(&config).await,
        },
    }
}
