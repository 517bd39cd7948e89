//! CLI administration tool for snaplink.
//!
//! Shortens and resolves links and inspects the database without going
//! through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Resolve a code
//! cargo run --bin admin -- resolve abcXYZ
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / create the schema
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `snaplink::config`.

use snaplink::application::services::ShorteningService;
use snaplink::config::{self, Config};
use snaplink::domain::errors::ShortenerError;
use snaplink::infrastructure::persistence::SqliteMappingRepository;
use snaplink::utils::short_link::short_link;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing snaplink.
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
    /// Shorten a URL, reusing its code if it was shortened before
    Shorten {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,
    },

    /// Print the original URL behind a short code
    Resolve {
        /// Short code (case-sensitive)
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the schema if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let repository = Arc::new(
        SqliteMappingRepository::connect(&config.store_settings())
            .await
            .context("Failed to open database")?,
    );

    let result = match cli.command {
        Commands::Shorten { url } => shorten(&config, repository.clone(), url).await,
        Commands::Resolve { code } => resolve(&config, repository.clone(), &code).await,
        Commands::Stats => handle_stats(&config, repository.clone()).await,
        Commands::Db { action } => handle_db_action(action, &config, &repository).await,
    };

    repository.close().await;
    result
}

fn build_shortener(
    config: &Config,
    repository: Arc<SqliteMappingRepository>,
) -> Result<ShorteningService<SqliteMappingRepository>> {
    Ok(ShorteningService::with_max_attempts(
        repository,
        config.code_generator()?,
        config.code_max_attempts,
    ))
}

/// Shortens a URL and prints the code and public link.
async fn shorten(
    config: &Config,
    repository: Arc<SqliteMappingRepository>,
    url: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Original URL").interact_text()?,
    };

    let shortener = build_shortener(config, repository)?;
    let before = shortener.mapping_count().await?;

    let code = match shortener.shorten(&url).await {
        Ok(code) => code,
        Err(ShortenerError::InvalidInput) => {
            println!("{}", "❌ URL must not be empty".red());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to shorten URL"),
    };

    let created = shortener.mapping_count().await? > before;

    println!("  URL:   {}", url.cyan());
    println!("  Code:  {}", code.bright_yellow().bold());
    println!(
        "  Link:  {}",
        short_link(&config.public_base_url, &code).bright_white()
    );
    println!();

    if created {
        println!("{}", "✅ New short link created".green().bold());
    } else {
        println!("{}", "♻️  URL was already shortened, existing code reused".yellow());
    }
    println!();

    Ok(())
}

/// Resolves a code and prints the original URL.
async fn resolve(
    config: &Config,
    repository: Arc<SqliteMappingRepository>,
    code: &str,
) -> Result<()> {
    let shortener = build_shortener(config, repository)?;

    match shortener
        .resolve(code)
        .await
        .context("Failed to resolve code")?
    {
        Some(url) => {
            println!("  {} → {}", code.bright_yellow(), url.cyan());
        }
        None => {
            println!("{}", format!("⚠️  No link for code '{}'", code).yellow());
            println!(
                "  {}",
                "Codes are case-sensitive; check the capitalization.".bright_black()
            );
        }
    }

    Ok(())
}

/// Displays system statistics.
async fn handle_stats(config: &Config, repository: Arc<SqliteMappingRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let shortener = build_shortener(config, repository)?;
    let count = shortener.mapping_count().await?;
    let generator = shortener.generator();

    println!(
        "  Mappings:   {}",
        count.to_string().bright_white().bold()
    );
    println!(
        "  Code space: {} ({} chars × {} symbols)",
        generator.code_space().to_string().bright_white(),
        generator.length(),
        generator.alphabet().len()
    );
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    config: &Config,
    repository: &SqliteMappingRepository,
) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("  Checking database connection... ");

            match sqlx::query("SELECT 1").execute(repository.pool()).await {
                Ok(_) => {
                    println!("{}", "✅ OK".green().bold());
                    println!("  Database: {}", config.database_url.cyan());
                }
                Err(e) => {
                    println!("{}", "❌ FAILED".red().bold());
                    println!("  Error: {}", e.to_string().red());
                }
            }
        }
        DbAction::Init => {
            repository
                .init_schema()
                .await
                .context("Failed to initialize schema")?;
            println!("{}", "✅ Schema is up to date".green().bold());
        }
    }

    Ok(())
}
