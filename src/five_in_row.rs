//! Five-in-a-row: any empty point is legal, five in a line wins.

use crate::board::{Board, Color, Point};
use crate::constants::{LINES, WIN_LENGTH};
use crate::engine::{GameState, Rules, Status, Variant};
use crate::error::{GameError, MoveError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiveInRowEngine {
    state: GameState,
}

impl FiveInRowEngine {
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(Board::new(size)?),
        })
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }
}

/// Length of the run of `color` starting at `pt` and extending in direction `dir`.
fn run_length(board: &Board, pt: Point, dir: (isize, isize), color: Color) -> usize {
    let mut count = 1;
    let mut cur = pt;
    while let Some(next) = board.step(cur, dir) {
        if board.get(next) != Some(color) {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

impl Rules for FiveInRowEngine {
    fn variant(&self) -> Variant {
        Variant::FiveInRow
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn check_rules(&self, pt: Point, _player: Color) -> Result<(), MoveError> {
        self.state.board().check_empty(pt)
    }

    // Scans the whole board rather than just the last move.
    fn check_winner(&self) -> Status {
        let board = self.state.board();
        for pt in board.points() {
            let Some(color) = board.get(pt) else {
                continue;
            };
            if LINES
                .iter()
                .any(|&dir| run_length(board, pt, dir, color) >= WIN_LENGTH)
            {
                return Status::Won(color);
            }
        }
        if board.is_full() {
            Status::Draw
        } else {
            Status::InProgress
        }
    }
}
