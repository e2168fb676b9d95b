use std::path::PathBuf;

use anyhow::{Context, Result};
use blogqa_core::config::ClientConfig;
use clap::{Parser, Subcommand};

mod app;
mod commands;
mod logging;
mod repl;
mod view;

use app::AppContext;

#[derive(Parser)]
#[command(name = "blogqa")]
#[command(about = "Blog Q&A - ask questions about blog posts from the terminal", long_about = None)]
struct Cli {
    /// Base URL of the Q&A service (overrides config.toml and BLOGQA_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to daily files in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat (default)
    Chat {
        /// Collection to ask against
        #[arg(long)]
        collection: Option<String>,
    },
    /// Ask a single question and print the answer
    Ask {
        question: String,
        /// Collection to ask against
        #[arg(long)]
        collection: Option<String>,
    },
    /// Show the admin dashboard
    Stats,
    /// Check that the service is up
    Health,
    /// List known collections
    Collections,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.log_dir.as_deref())?;

    let config =
        ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = match cli.api_url {
        Some(url) => config.with_api_url(url),
        None => config,
    };
    tracing::debug!(api_url = config.api_base(), "Configuration resolved");

    let ctx = AppContext::new(config)?;

    match cli.command.unwrap_or(Commands::Chat { collection: None }) {
        Commands::Chat { collection } => commands::chat::run(&ctx, collection.as_deref()).await?,
        Commands::Ask {
            question,
            collection,
        } => commands::ask::run(&ctx, &question, collection.as_deref()).await?,
        Commands::Stats => commands::stats::run(&ctx).await?,
        Commands::Health => commands::health::run(&ctx).await?,
        Commands::Collections => commands::collections::run(&ctx).await?,
    }

    Ok(())
}
