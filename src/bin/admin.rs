//! CLI administration tool for redis-shortener.
//!
//! Operates directly on the configured store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Look up a short code
//! cargo run --bin admin -- resolve q3Xz_9aB
//!
//! # Check store connectivity
//! cargo run --bin admin -- store check
//! ```
//!
//! Reads the same `REDIS_URL` / `REDIS_*` variables as the server.

use redis_shortener::AppError;
use redis_shortener::application::services::UrlService;
use redis_shortener::config;
use redis_shortener::infrastructure::persistence::RedisUrlRepository;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing redis-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short code for a URL
    Shorten {
        /// Absolute URL to shorten
        url: String,
    },

    /// Print the original URL for a short code
    Resolve {
        /// Short code to look up
        code: String,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let repository = RedisUrlRepository::connect(&config.redis_url).await?;
    let service = UrlService::new(Arc::new(repository));

    match cli.command {
        Commands::Shorten { url } => shorten(&service, url).await?,
        Commands::Resolve { code } => resolve(&service, &code).await?,
        Commands::Store { action } => match action {
            StoreAction::Check => check_store(&service).await?,
        },
    }

    Ok(())
}

async fn shorten(service: &UrlService, url: String) -> Result<()> {
    let code = service.shorten(url.clone()).await?;

    println!("{}", "Short code created".green().bold());
    println!("  URL:  {}", url.cyan());
    println!("  Code: {}", code.bright_yellow().bold());

    Ok(())
}

async fn resolve(service: &UrlService, code: &str) -> Result<()> {
    match service.resolve(code).await {
        Ok(url) => {
            println!("{} -> {}", code.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(AppError::NotFound) => anyhow::bail!("No URL stored for '{}'", code),
        Err(e) => Err(e.into()),
    }
}

async fn check_store(service: &UrlService) -> Result<()> {
    if service.health_check().await {
        println!("{}", "Store connection OK".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING")
    }
}
