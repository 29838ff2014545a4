#![deny(clippy::unwrap_used)]

mod cmd;
mod common;
mod config;
mod pipelines;
mod processing;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use common::STARTING;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = AssetPost::parse();

    tracing_subscriber::registry()
        // Filter spans based on the RUST_LOG env var.
        .with(eval_logging(&cli))
        // Send a copy of all spans to stdout.
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        // Install this registry as the global tracing registry.
        .try_init()
        .context("error initializing logging")?;

    tracing::info!(
        "{} Starting {} {}",
        STARTING,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    cli.run().await
}

fn eval_logging(cli: &AssetPost) -> tracing_subscriber::EnvFilter {
    let directives = match (cli.verbose, cli.quiet) {
        // quiet overrides verbose
        (_, true) => "error,asset_post=warn",
        // increase verbosity
        (0, false) => "error,asset_post=info",
        (1, false) => "error,asset_post=debug",
        (_, false) => "error,asset_post=trace",
    };
    tracing_subscriber::EnvFilter::new(directives)
}

/// Post-process web build output: relocate HTML asset paths & compile MJML email templates.
#[derive(Parser)]
#[command(about, author, version)]
struct AssetPost {
    #[command(subcommand)]
    action: AssetPostSubcommands,
    /// Path to the config file [default: AssetPost.toml]
    #[arg(long, env = "ASSET_POST_CONFIG", global(true))]
    pub config: Option<PathBuf>,
    /// Enable verbose logging.
    #[arg(short, long, global(true), action=ArgAction::Count)]
    pub verbose: u8,
    /// Be more quiet, conflicts with --verbose
    #[arg(short, long, global(true), conflicts_with("verbose"))]
    pub quiet: bool,
}

impl AssetPost {
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn run(self) -> Result<()> {
        match self.action {
            AssetPostSubcommands::Html(inner) => inner.run(self.config).await,
            AssetPostSubcommands::Templates(inner) => inner.run(self.config).await,
        }
    }
}

#[derive(Subcommand)]
enum AssetPostSubcommands {
    /// Rewrite script & stylesheet paths in an HTML document.
    Html(cmd::html::Html),
    /// Compile a directory tree of MJML templates.
    Templates(cmd::templates::Templates),
}
