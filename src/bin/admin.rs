//! CLI administration tool for shorturl.
//!
//! Operates directly on the configured store, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check store connectivity
//! cargo run --bin admin -- store check
//!
//! # Show the URL behind an id
//! cargo run --bin admin -- lookup aB3dE5gH
//!
//! # Shorten a URL
//! cargo run --bin admin -- encode https://example.com/ --base https://s.example.com
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`REDIS_URL`, `STORE_BACKEND`, `SHORT_ID_*`, ...).

use shorturl::config::{self, Config};
use shorturl::domain::repositories::LinkStore;
use shorturl::prelude::{AppError, LinkService};
use shorturl::server::connect_store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Show the URL stored under an id
    Lookup {
        /// Short identifier
        id: String,
    },

    /// Create a short link
    Encode {
        /// URL to shorten (http or https)
        url: String,

        /// Base URL used to print the full short URL
        #[arg(short, long, default_value = "http://localhost:8000")]
        base: String,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = connect_store(&config).await?;

    match cli.command {
        Commands::Store { action } => handle_store_action(action, &config, store).await?,
        Commands::Lookup { id } => lookup(&config, store, &id).await?,
        Commands::Encode { url, base } => encode(&config, store, &url, &base).await?,
    }

    Ok(())
}

/// Dispatches store commands.
async fn handle_store_action(
    action: StoreAction,
    config: &Config,
    store: Arc<dyn LinkStore>,
) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("{}", "🔌 Store Check".bright_blue().bold());
            println!();
            println!("  Backend: {}", config.store_backend.to_string().cyan());

            match store.ping().await {
                Ok(()) => println!("  Status:  {}", "OK".green().bold()),
                Err(e) => {
                    println!("  Status:  {}", "FAILED".red().bold());
                    anyhow::bail!("Store check failed: {e}");
                }
            }
            println!();
        }
    }

    Ok(())
}

/// Prints the target for `id`.
async fn lookup(config: &Config, store: Arc<dyn LinkStore>, id: &str) -> Result<()> {
    let service = LinkService::new(store, config.id_generator()?);

    match service.resolve(id).await {
        Ok(link) => {
            println!("  {} → {}", link.id.cyan(), link.target.bright_white());
        }
        Err(AppError::NotFound { .. }) => {
            println!("  {} {}", id.cyan(), "not found".yellow());
        }
        Err(e) => anyhow::bail!("Lookup failed: {e}"),
    }

    Ok(())
}

/// Runs the full encode path and prints the result.
async fn encode(config: &Config, store: Arc<dyn LinkStore>, url: &str, base: &str) -> Result<()> {
    let service = LinkService::new(store, config.id_generator()?);

    let link = service
        .encode(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to encode URL: {e}"))?;

    println!("{}", "✅ Short link created".green().bold());
    println!();
    println!("  Id:    {}", link.id.bright_yellow().bold());
    println!("  URL:   {}", link.target.cyan());
    println!("  Short: {}", link.short_url(base).bright_white());
    println!();

    Ok(())
}
