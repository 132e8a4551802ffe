//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an animation config (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Show the board immediately, without entrance animations
    #[arg(long)]
    pub no_animation: bool,
}
