//! Hotseat - two-player tic-tac-toe in the terminal.
//!
//! `hotseat play` opens the interactive board; `hotseat replay` applies a
//! list of cells headlessly and prints the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::HotseatConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HotseatConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play { player1, player2 } => tui::run(&config.with_names(player1, player2)),
        Command::Replay {
            player1,
            player2,
            json,
            moves,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::io::stderr)
                .init();
            info!(moves = moves.len(), "Running headless replay");
            replay::run(&config.with_names(player1, player2), &moves, json)
        }
    }
}
