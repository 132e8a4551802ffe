//! Tic-tac-toe terminal binary.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use std::sync::Arc;
use tictactoe::{AnimationConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let animation = match (&cli.config, cli.no_animation) {
        (_, true) => AnimationConfig::disabled(),
        (Some(path), false) => AnimationConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        (None, false) => AnimationConfig::default(),
    };
    info!(?animation, "Animation settings resolved");

    run_tui(animation)
}

/// Logs to a file so output does not interfere with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
