//! Command-line interface for sitesync.
//!
//! Provides the batch sync command, the render-time fetch command, and a
//! configuration debug command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::core::{fetch_site_data, run_sync};
use crate::notion::NotionClient;

/// sitesync - Notion → static-site content pipeline
#[derive(Parser, Debug)]
#[command(name = "sitesync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync published records to the content tree on disk
    Sync {
        /// Output directory (overrides SITESYNC_OUTPUT)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Fetch the render-time aggregate and emit it as JSON
    Fetch {
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show resolved configuration (token redacted)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Sync { out } => sync(out).await,
            Commands::Fetch { pretty, output } => fetch(pretty, output).await,
            Commands::Config => show_config(),
        }
    }
}

/// Run the batch sync
async fn sync(out: Option<PathBuf>) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(out) = out {
        config.output_dir = out;
    }

    let client = NotionClient::new(&config)?;
    let report = run_sync(&config, &client)
        .await
        .context("Content sync failed")?;

    println!(
        "Synced {} documents to {} ({} skipped without slug)",
        report.written,
        config.output_dir.display(),
        report.skipped
    );
    Ok(())
}

/// Fetch the render-time aggregate
async fn fetch(pretty: bool, output: Option<PathBuf>) -> Result<()> {
    let config = Config::from_env()?;
    let client = NotionClient::new(&config)?;

    let data = fetch_site_data(&config, &client)
        .await
        .context("Content fetch failed")?;

    let json = if pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        serde_json::to_string(&data)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote site data to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Print the resolved configuration
fn show_config() -> Result<()> {
    let config = Config::from_env()?;

    println!("Resolved configuration:");
    println!("  token:           ***redacted***");
    println!("  database_id:     {}", config.database_id);
    println!("  api_version:     {}", config.api_version);
    println!("  base_url:        {}", config.base_url);
    println!("  published_value: {}", config.published_value);
    println!("  output_dir:      {}", config.output_dir.display());
    Ok(())
}
