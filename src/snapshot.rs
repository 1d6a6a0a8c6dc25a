//! Serializable game snapshots for save and load.
//!
//! A snapshot carries everything needed to resume play: the variant tag,
//! board size, side to move, current grid and every grid on the undo stack.
//! Grids are stored one string per row (`.` empty, `X` black, `O` white).

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Board, Color};
use crate::engine::{GameState, Variant};
use crate::error::GameError;
use crate::game::Game;
use crate::history::History;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub variant: Variant,
    pub size: usize,
    pub current_player: Color,
    pub grid: Vec<String>,
    /// Oldest first.
    pub history: Vec<Vec<String>>,
}

impl Game {
    /// Deep copy of the full game state.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state();
        Snapshot {
            variant: self.variant(),
            size: self.size(),
            current_player: state.current(),
            grid: state.board().to_rows(),
            history: state.history().iter().map(Board::to_rows).collect(),
        }
    }

    /// Rebuild a game, rejecting snapshots whose grids do not match their size.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Game, GameError> {
        let board = Board::from_rows(snapshot.size, &snapshot.grid)?;
        let history = snapshot
            .history
            .iter()
            .enumerate()
            .map(|(i, rows)| {
                Board::from_rows(snapshot.size, rows).map_err(|err| match err {
                    GameError::Corrupt(msg) => GameError::Corrupt(format!("history[{i}]: {msg}")),
                    other => other,
                })
            })
            .collect::<Result<History, _>>()?;
        let state = GameState::from_parts(board, snapshot.current_player, history);
        Ok(Game::from_state(snapshot.variant, state))
    }
}

pub fn to_json(game: &Game) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&game.snapshot())
}

/// Parse and validate. Malformed JSON and unknown variant tags are corruption too.
pub fn from_json(json: &str) -> Result<Game, GameError> {
    let snapshot: Snapshot =
        serde_json::from_str(json).map_err(|e| GameError::Corrupt(e.to_string()))?;
    Game::from_snapshot(&snapshot)
}

pub fn save(game: &Game, path: &Path) -> anyhow::Result<()> {
    let json = to_json(game)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write save file {}", path.display()))?;
    info!(path = %path.display(), variant = %game.variant(), "game saved");
    Ok(())
}

pub fn load(path: &Path) -> anyhow::Result<Game> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read save file {}", path.display()))?;
    let game =
        from_json(&json).with_context(|| format!("failed to load game from {}", path.display()))?;
    info!(path = %path.display(), variant = %game.variant(), "game loaded");
    Ok(game)
}
