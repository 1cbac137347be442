//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe on one keyboard
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./hotseat.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Name for player one (X), prefilled on the setup screen
        #[arg(long)]
        player1: Option<String>,

        /// Name for player two (O), prefilled on the setup screen
        #[arg(long)]
        player2: Option<String>,
    },

    /// Play a sequence of cells without a UI and print the result
    Replay {
        /// Name for player one (X)
        #[arg(long)]
        player1: Option<String>,

        /// Name for player two (O)
        #[arg(long)]
        player2: Option<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Cells in play order, X first: indices 0-8 or labels like `center`
        moves: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            player1: None,
            player2: None,
        }
    }
}
