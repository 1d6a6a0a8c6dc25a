//! Line-flip game: a move must bracket opponent stones, which then flip.

use tracing::debug;

use crate::board::{Board, Color, Point};
use crate::constants::ALL_DIRECTIONS;
use crate::engine::{GameState, Rules, Status, Variant};
use crate::error::{GameError, MoveError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineFlipEngine {
    state: GameState,
}

impl LineFlipEngine {
    /// A board of `size` with the four center cells in the opening pattern:
    /// white on the main diagonal, black on the anti-diagonal.
    pub fn new(size: usize) -> Result<Self, GameError> {
        let mut board = Board::new(size)?;
        let m = size / 2;
        board.set((m - 1, m - 1), Some(Color::White));
        board.set((m, m), Some(Color::White));
        board.set((m - 1, m), Some(Color::Black));
        board.set((m, m - 1), Some(Color::Black));
        Ok(Self {
            state: GameState::new(board),
        })
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Opponent stones that `player` would flip by playing at `pt`.
    ///
    /// Empty when the move brackets nothing.
    pub fn flips(&self, pt: Point, player: Color) -> Vec<Point> {
        let board = self.state.board();
        let opponent = player.opponent();
        let mut flipped = Vec::new();
        for &dir in &ALL_DIRECTIONS {
            let mut run = Vec::new();
            let mut cur = pt;
            loop {
                let Some(next) = board.step(cur, dir) else {
                    run.clear();
                    break;
                };
                match board.get(next) {
                    Some(c) if c == opponent => run.push(next),
                    Some(_) => break,
                    None => {
                        run.clear();
                        break;
                    }
                }
                cur = next;
            }
            flipped.extend(run);
        }
        flipped
    }
}

impl Rules for LineFlipEngine {
    fn variant(&self) -> Variant {
        Variant::LineFlip
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn check_rules(&self, pt: Point, player: Color) -> Result<(), MoveError> {
        self.state.board().check_empty(pt)?;
        if self.flips(pt, player).is_empty() {
            return Err(MoveError::NoBracket);
        }
        Ok(())
    }

    fn make_move(&mut self, pt: Point) -> Result<(), GameError> {
        let player = self.state.current();
        if let Err(err) = self.check_rules(pt, player) {
            debug!(?pt, %player, %err, "move rejected");
            return Err(err.into());
        }
        let flipped = self.flips(pt, player);
        let mut next = self.state.board().clone();
        next.set(pt, Some(player));
        for &stone in &flipped {
            next.set(stone, Some(player));
        }
        self.state.commit(next);
        debug!(?pt, %player, flipped = flipped.len(), "move played");
        Ok(())
    }

    /// Allowed only when the side to move has no legal placement.
    fn pass_turn(&mut self) -> Result<(), GameError> {
        if !self.valid_moves().is_empty() {
            return Err(GameError::PassNotAllowed(Variant::LineFlip));
        }
        let player = self.state.current();
        self.state.pass();
        debug!(%player, "forced pass");
        Ok(())
    }

    /// Over when neither side can move; then the stone count decides.
    fn check_winner(&self) -> Status {
        let current = self.state.current();
        let stuck = |player| self.valid_moves_for(player).is_empty();
        if stuck(current) && stuck(current.opponent()) {
            Status::by_count(self.state.board())
        } else {
            Status::InProgress
        }
    }
}
