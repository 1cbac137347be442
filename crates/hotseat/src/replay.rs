//! Headless play: apply a list of cells and print the result.

use crate::config::HotseatConfig;
use anyhow::{Context, Result, anyhow};
use hotseat_tictactoe::{GameEngine, Phase, PlayerNames, Position};
use tracing::{info, instrument};

/// Name used for a seat with nothing configured.
const FALLBACK_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Turns a command-line cell into an index.
///
/// Numbers pass through untouched so the engine reports out-of-range
/// indices itself; anything else must be a cell label such as `center`.
pub fn parse_cell(token: &str) -> Result<usize> {
    if let Ok(index) = token.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(token)
        .map(Position::to_index)
        .ok_or_else(|| anyhow!("Unknown cell {:?} (use 0-8 or a label like top-left)", token))
}

/// Runs `moves` from a fresh game and returns the engine.
#[instrument(skip(config))]
pub fn play_moves(config: &HotseatConfig, moves: &[usize]) -> Result<GameEngine> {
    let names = PlayerNames::new(
        config.player1().clone().unwrap_or_else(|| FALLBACK_NAMES[0].to_string()),
        config.player2().clone().unwrap_or_else(|| FALLBACK_NAMES[1].to_string()),
    );
    let engine = GameEngine::replay(names, moves).context("Replay rejected")?;
    info!(moves = engine.move_count(), phase = %engine.phase(), "Replay complete");
    Ok(engine)
}

/// Renders the board and status the way the terminal UI words them.
pub fn render_text(engine: &GameEngine) -> String {
    let mut text = format!("{}\n\n{}", engine.board().display(), engine.status_line());
    if engine.phase() == Phase::Finished {
        text.push_str("\nGame Over! Thanks For Playing");
    }
    text
}

/// Renders the snapshot as pretty JSON.
pub fn render_json(engine: &GameEngine) -> Result<String> {
    serde_json::to_string_pretty(&engine.snapshot()).context("Failed to serialize snapshot")
}

/// Entry point for `hotseat replay`.
///
/// Any rejected cell becomes an error, which `main` turns into a non-zero
/// exit status.
pub fn run(config: &HotseatConfig, cells: &[String], json: bool) -> Result<()> {
    let moves = cells
        .iter()
        .map(|cell| parse_cell(cell))
        .collect::<Result<Vec<_>>>()?;
    let engine = play_moves(config, &moves)?;
    let output = if json {
        render_json(&engine)?
    } else {
        render_text(&engine)
    };
    println!("{}", output);
    Ok(())
}
