//! A game of any supported variant behind one type.

use tracing::info;

use crate::board::{Board, Color, Point};
use crate::capture_liberty::CaptureLibertyEngine;
use crate::engine::{GameState, Rules, Status, Variant};
use crate::error::{GameError, MoveError};
use crate::five_in_row::FiveInRowEngine;
use crate::line_flip::LineFlipEngine;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Game {
    FiveInRow(FiveInRowEngine),
    CaptureLiberty(CaptureLibertyEngine),
    LineFlip(LineFlipEngine),
}

impl Game {
    /// Start a fresh game. Fails if `size` is outside 8..=19.
    pub fn new(variant: Variant, size: usize) -> Result<Self, GameError> {
        let game = match variant {
            Variant::FiveInRow => Game::FiveInRow(FiveInRowEngine::new(size)?),
            Variant::CaptureLiberty => Game::CaptureLiberty(CaptureLibertyEngine::new(size)?),
            Variant::LineFlip => Game::LineFlip(LineFlipEngine::new(size)?),
        };
        info!(%variant, size, "new game");
        Ok(game)
    }

    /// Rebuild an engine of `variant` around an existing state.
    pub fn from_state(variant: Variant, state: GameState) -> Self {
        match variant {
            Variant::FiveInRow => Game::FiveInRow(FiveInRowEngine::from_state(state)),
            Variant::CaptureLiberty => {
                Game::CaptureLiberty(CaptureLibertyEngine::from_state(state))
            }
            Variant::LineFlip => Game::LineFlip(LineFlipEngine::from_state(state)),
        }
    }

    /// A fresh game with the same variant and size.
    pub fn restart(&self) -> Result<Self, GameError> {
        Game::new(self.variant(), self.size())
    }

    fn rules(&self) -> &dyn Rules {
        match self {
            Game::FiveInRow(g) => g,
            Game::CaptureLiberty(g) => g,
            Game::LineFlip(g) => g,
        }
    }

    fn rules_mut(&mut self) -> &mut dyn Rules {
        match self {
            Game::FiveInRow(g) => g,
            Game::CaptureLiberty(g) => g,
            Game::LineFlip(g) => g,
        }
    }

    pub fn variant(&self) -> Variant {
        self.rules().variant()
    }

    pub fn state(&self) -> &GameState {
        self.rules().state()
    }

    pub fn board(&self) -> &Board {
        self.state().board()
    }

    pub fn size(&self) -> usize {
        self.board().size()
    }

    pub fn current_player(&self) -> Color {
        self.state().current()
    }

    /// Number of moves and passes that can still be undone.
    pub fn history_len(&self) -> usize {
        self.state().history().len()
    }

    pub fn check_rules(&self, pt: Point, player: Color) -> Result<(), MoveError> {
        self.rules().check_rules(pt, player)
    }

    pub fn valid_moves(&self) -> Vec<Point> {
        self.rules().valid_moves()
    }

    pub fn valid_moves_for(&self, player: Color) -> Vec<Point> {
        self.rules().valid_moves_for(player)
    }

    pub fn make_move(&mut self, pt: Point) -> Result<(), GameError> {
        self.rules_mut().make_move(pt)
    }

    pub fn pass_turn(&mut self) -> Result<(), GameError> {
        self.rules_mut().pass_turn()
    }

    pub fn undo(&mut self) -> Result<(), GameError> {
        self.rules_mut().undo()
    }

    pub fn check_winner(&self) -> Status {
        self.rules().check_winner()
    }
}
