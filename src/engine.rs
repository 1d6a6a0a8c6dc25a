//! The rule contract shared by every variant.
//!
//! Each engine owns a [`GameState`] and implements [`Rules`]. The trait
//! supplies the generic parts (legal-move enumeration, plain placement,
//! undo) so an engine only has to describe its own legality law and its
//! win condition. Engines whose legality depends on a tentative placement
//! compute that placement on a private copy of the board and hand the
//! finished board to [`GameState::commit`], so a rejected move never leaves
//! a trace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Color, Point};
use crate::error::{GameError, MoveError};
use crate::history::History;

/// The closed set of supported games.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    FiveInRow,
    CaptureLiberty,
    LineFlip,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::FiveInRow, Variant::CaptureLiberty, Variant::LineFlip];

    pub fn name(self) -> &'static str {
        match self {
            Variant::FiveInRow => "five-in-row",
            Variant::CaptureLiberty => "capture-liberty",
            Variant::LineFlip => "line-flip",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "five-in-row" | "five_in_row" | "gomoku" => Ok(Variant::FiveInRow),
            "capture-liberty" | "capture_liberty" | "go" => Ok(Variant::CaptureLiberty),
            "line-flip" | "line_flip" | "othello" => Ok(Variant::LineFlip),
            other => Err(format!("unknown game variant: {other}")),
        }
    }
}

/// Outcome of [`Rules::check_winner`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Color),
    Draw,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }

    /// Decide by stone count: more stones wins, equal is a draw.
    pub fn by_count(board: &Board) -> Status {
        let (black, white) = board.count_stones();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Status::Won(Color::Black),
            std::cmp::Ordering::Less => Status::Won(Color::White),
            std::cmp::Ordering::Equal => Status::Draw,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::Won(color) => write!(f, "{color} wins"),
            Status::Draw => write!(f, "draw"),
        }
    }
}

/// Board, side to move, and the undo stack of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Color,
    history: History,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            current: Color::Black,
            history: History::new(),
        }
    }

    /// Reassemble a state from its parts (used when restoring snapshots).
    pub fn from_parts(board: Board, current: Color, history: History) -> Self {
        Self {
            board,
            current,
            history,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Color {
        self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Replace the board with `next`, remembering the old one, and hand the turn over.
    pub fn commit(&mut self, next: Board) {
        let prev = std::mem::replace(&mut self.board, next);
        self.history.push(prev);
        self.current = self.current.opponent();
    }

    /// Record an unchanged board and hand the turn over.
    pub fn pass(&mut self) {
        self.history.push(self.board.clone());
        self.current = self.current.opponent();
    }

    pub fn undo(&mut self) -> Result<(), GameError> {
        let prev = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board = prev;
        self.current = self.current.opponent();
        Ok(())
    }
}

/// Move validation, mutation, undo and win detection for one variant.
pub trait Rules {
    fn variant(&self) -> Variant;

    fn state(&self) -> &GameState;

    fn state_mut(&mut self) -> &mut GameState;

    /// Whether `player` may place at `pt`. Never mutates.
    fn check_rules(&self, pt: Point, player: Color) -> Result<(), MoveError>;

    fn check_winner(&self) -> Status;

    /// Every empty point that passes [`Rules::check_rules`] for `player`.
    fn valid_moves_for(&self, player: Color) -> Vec<Point> {
        let board = self.state().board();
        board
            .points()
            .filter(|&pt| board.get(pt).is_none())
            .filter(|&pt| self.check_rules(pt, player).is_ok())
            .collect()
    }

    fn valid_moves(&self) -> Vec<Point> {
        self.valid_moves_for(self.state().current())
    }

    /// Place a stone for the side to move. Engines that capture or flip override this.
    fn make_move(&mut self, pt: Point) -> Result<(), GameError> {
        let player = self.state().current();
        if let Err(err) = self.check_rules(pt, player) {
            debug!(variant = %self.variant(), ?pt, %player, %err, "move rejected");
            return Err(err.into());
        }
        let mut next = self.state().board().clone();
        next.set(pt, Some(player));
        self.state_mut().commit(next);
        debug!(variant = %self.variant(), ?pt, %player, "move played");
        Ok(())
    }

    /// Only variants with a pass rule accept this.
    fn pass_turn(&mut self) -> Result<(), GameError> {
        Err(GameError::PassNotAllowed(self.variant()))
    }

    fn undo(&mut self) -> Result<(), GameError> {
        self.state_mut().undo()?;
        debug!(variant = %self.variant(), "undo");
        Ok(())
    }
}
