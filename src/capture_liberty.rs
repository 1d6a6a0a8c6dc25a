//! Capture game with liberties, suicide prohibition and single-ply ko.
//!
//! Legality can only be decided after captures are resolved, so every
//! candidate move is first played out on a private copy of the board
//! ([`CaptureLibertyEngine::trial`]). The real state is touched only when
//! the finished trial board is committed.

use tracing::debug;

use crate::board::{Board, Color, Point};
use crate::engine::{GameState, Rules, Status, Variant};
use crate::error::{GameError, MoveError};
use crate::group::find_group;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureLibertyEngine {
    state: GameState,
}

/// A legal placement, resolved against a copy of the board.
struct Trial {
    board: Board,
    captured: usize,
}

impl CaptureLibertyEngine {
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(Board::new(size)?),
        })
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Play `player` at `pt` on a copy of the board and resolve captures.
    ///
    /// Rejects occupied and off-board points, suicide (no liberties and no
    /// capture), and any move that recreates the board from just before the
    /// previous action.
    fn trial(&self, pt: Point, player: Color) -> Result<Trial, MoveError> {
        let current = self.state.board();
        current.check_empty(pt)?;

        let mut board = current.clone();
        board.set(pt, Some(player));

        let opponent = player.opponent();
        let mut dead = Vec::new();
        for n in board.neighbors(pt) {
            if board.get(n) != Some(opponent) {
                continue;
            }
            if let Some(group) = find_group(&board, n) {
                if group.liberties == 0 {
                    dead.extend(group.stones);
                }
            }
        }
        // Two neighbors may belong to the same dead group.
        dead.sort_unstable();
        dead.dedup();
        for &stone in &dead {
            board.set(stone, None);
        }

        let own_liberties = find_group(&board, pt).map_or(0, |g| g.liberties);
        if own_liberties == 0 && dead.is_empty() {
            return Err(MoveError::Suicide);
        }

        if self.state.history().last() == Some(&board) {
            return Err(MoveError::Ko);
        }

        Ok(Trial {
            board,
            captured: dead.len(),
        })
    }
}

impl Rules for CaptureLibertyEngine {
    fn variant(&self) -> Variant {
        Variant::CaptureLiberty
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn check_rules(&self, pt: Point, player: Color) -> Result<(), MoveError> {
        self.trial(pt, player).map(|_| ())
    }

    fn make_move(&mut self, pt: Point) -> Result<(), GameError> {
        let player = self.state.current();
        let trial = match self.trial(pt, player) {
            Ok(trial) => trial,
            Err(err) => {
                debug!(?pt, %player, %err, "move rejected");
                return Err(err.into());
            }
        };
        self.state.commit(trial.board);
        debug!(?pt, %player, captured = trial.captured, "move played");
        Ok(())
    }

    fn pass_turn(&mut self) -> Result<(), GameError> {
        let player = self.state.current();
        self.state.pass();
        debug!(%player, "pass");
        Ok(())
    }

    /// Stone count only. The caller decides when the game has ended.
    fn check_winner(&self) -> Status {
        Status::by_count(self.state.board())
    }
}
