//! CLI administration tool for comic-board.
//!
//! Sites cannot be created from the web pages; this tool manages them
//! directly, along with a few database diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Add a site (prompts for missing values)
//! cargo run --bin admin -- site add --name "XKCD" --url https://xkcd.com
//!
//! # List sites
//! cargo run --bin admin -- site list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL`, or `DB_HOST`,
//! `DB_USER`, `DB_PASSWORD`, `DB_NAME`).

use comic_board::application::services::SiteService;
use comic_board::config;
use comic_board::infrastructure::persistence::PgSiteRepository;
use comic_board::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing comic-board.
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
    /// Manage comic sites
    Site {
        #[command(subcommand)]
        action: SiteAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Site management subcommands.
#[derive(Subcommand)]
enum SiteAction {
    /// Add a new site
    Add {
        /// Display name (e.g., "XKCD")
        #[arg(short, long)]
        name: Option<String>,

        /// Base URL of the site (e.g., "https://xkcd.com")
        #[arg(short, long)]
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all sites
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Site { action } => handle_site_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches site management commands.
async fn handle_site_action(action: SiteAction, pool: &PgPool) -> Result<()> {
    let service = SiteService::new(Arc::new(PgSiteRepository::new(Arc::new(pool.clone()))));

    match action {
        SiteAction::Add { name, url, yes } => add_site(&service, name, url, yes).await?,
        SiteAction::List => list_sites(&service).await?,
    }

    Ok(())
}

/// Adds a site with interactive prompts for missing values.
async fn add_site(
    service: &SiteService,
    name: Option<String>,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Add Comic Site".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Site name").interact_text()?,
    };

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Site URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    println!();
    println!("{}", "Site details:".bright_white().bold());
    println!("  Name: {}", name.cyan());
    println!("  URL:  {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this site?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let site = service
        .create_site(&name, &url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create site: {}", e))?;

    println!();
    println!(
        "{} {}",
        "Site created with ID".green().bold(),
        site.id.to_string().bright_white().bold()
    );
    println!(
        "  Comics page: {}",
        format!("/comicPage/{}", site.id).bright_cyan()
    );
    println!();

    Ok(())
}

/// Lists all sites in navigation order.
///
/// # Output Format
///
/// ```text
/// Comic Sites
///
///   ID  Name                           URL
///   ──────────────────────────────────────────────────────────────
///   2   Abstruse Goose                 https://abstrusegoose.com
///   1   XKCD                           https://xkcd.com
/// ```
async fn list_sites(service: &SiteService) -> Result<()> {
    println!("{}", "Comic Sites".bright_blue().bold());
    println!();

    let sites = service
        .list_sites()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list sites: {}", e))?;

    if sites.is_empty() {
        println!("{}", "  No sites found".yellow());
        println!();
        println!(
            "  Create one with: {} admin site add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(64).bright_black());

    for site in &sites {
        println!(
            "  {:<4} {:<30} {}",
            site.id.to_string().bright_black(),
            site.name.cyan(),
            site.url
        );
    }

    println!();
    println!("  Total: {}", sites.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays row counts for every table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let sites_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sites")
        .fetch_one(pool)
        .await?;

    let comics_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comics")
        .fetch_one(pool)
        .await?;

    let comments_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await?;

    println!(
        "  Sites:    {}",
        sites_count.to_string().bright_green().bold()
    );
    println!(
        "  Comics:   {}",
        comics_count.to_string().bright_green().bold()
    );
    println!(
        "  Comments: {}",
        comments_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations").run(pool).await?;

            println!("{}", "Migrations up to date".green().bold());
        }
    }

    Ok(())
}
