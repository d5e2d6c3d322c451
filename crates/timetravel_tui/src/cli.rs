//! Command-line interface for the terminal front-end.

use clap::Parser;
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel_tui")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with the move list newest first
    #[arg(long)]
    pub reversed: bool,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
