//! Turn-loop policy on top of a [`Game`].
//!
//! The engines know nothing about consecutive passes, resignation or
//! forced passes; that bookkeeping lives here. Every operation returns an
//! explicit result instead of unwinding, and once the status is terminal
//! only [`Session::restart`] and [`Session::load`] move the session on.

use std::path::Path;

use tracing::{debug, info};

use crate::board::{Color, Point};
use crate::constants::PASSES_TO_END;
use crate::engine::{Status, Variant};
use crate::error::GameError;
use crate::game::Game;
use crate::selector::MoveSelector;
use crate::snapshot;

/// What happened after an accepted turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub status: Status,
    /// Set when the next player had no legal move and was passed automatically.
    pub auto_passed: Option<Color>,
}

pub struct Session {
    game: Game,
    passes: u32,
    resigned: Option<Color>,
    /// History depths right after each automatic pass, innermost last.
    auto_passes: Vec<usize>,
}

impl Session {
    /// Wrap `game`. A line-flip side to move with no legal placement is
    /// passed at once, as after any other turn.
    pub fn new(game: Game) -> Result<Self, GameError> {
        let mut session = Self {
            game,
            passes: 0,
            resigned: None,
            auto_passes: Vec::new(),
        };
        session.auto_pass()?;
        Ok(session)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consecutive passes since the last placement.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Resignation first; the capture-liberty game is only scored after
    /// enough consecutive passes; the other variants are checked every turn.
    pub fn status(&self) -> Status {
        if let Some(loser) = self.resigned {
            return Status::Won(loser.opponent());
        }
        if self.game.variant() == Variant::CaptureLiberty && self.passes < PASSES_TO_END {
            return Status::InProgress;
        }
        self.game.check_winner()
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    pub fn play(&mut self, pt: Point) -> Result<Turn, GameError> {
        self.ensure_playing()?;
        self.game.make_move(pt)?;
        self.passes = 0;
        self.after_turn()
    }

    pub fn pass(&mut self) -> Result<Turn, GameError> {
        self.ensure_playing()?;
        self.game.pass_turn()?;
        self.passes += 1;
        self.after_turn()
    }

    /// Take back the last move or pass. An automatic pass is taken back
    /// together with the turn that caused it.
    pub fn undo(&mut self) -> Result<(), GameError> {
        self.ensure_playing()?;
        let depth = self.game.history_len();
        if self.auto_passes.last() == Some(&depth) {
            if depth < 2 {
                return Err(GameError::NothingToUndo);
            }
            self.game.undo()?;
            self.auto_passes.pop();
        }
        self.game.undo()?;
        self.passes = 0;
        Ok(())
    }

    /// The side to move gives up.
    pub fn resign(&mut self) -> Result<Status, GameError> {
        self.ensure_playing()?;
        let loser = self.game.current_player();
        self.resigned = Some(loser);
        let status = self.status();
        info!(%loser, %status, "resigned");
        Ok(status)
    }

    /// Throw the game away and start again with the same variant and size.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let fresh = self.game.restart()?;
        self.replace(fresh)?;
        info!(variant = %self.game.variant(), size = self.game.size(), "restarted");
        Ok(())
    }

    /// Swap in a different game, clearing all turn-loop state.
    pub fn replace(&mut self, game: Game) -> Result<(), GameError> {
        self.game = game;
        self.passes = 0;
        self.resigned = None;
        self.auto_passes.clear();
        self.auto_pass()?;
        Ok(())
    }

    /// Let `selector` choose and play. With no choice the capture-liberty
    /// game passes; the other variants report [`GameError::NoMoveAvailable`].
    pub fn select_and_play(
        &mut self,
        selector: &mut dyn MoveSelector,
    ) -> Result<(Option<Point>, Turn), GameError> {
        self.ensure_playing()?;
        match selector.select(&self.game) {
            Some(pt) => Ok((Some(pt), self.play(pt)?)),
            None if self.game.variant() == Variant::CaptureLiberty => Ok((None, self.pass()?)),
            None => Err(GameError::NoMoveAvailable),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        snapshot::save(&self.game, path)
    }

    pub fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        let game = snapshot::load(path)?;
        self.replace(game)?;
        Ok(())
    }

    /// Pass a stuck line-flip player while the opponent can still move.
    fn auto_pass(&mut self) -> Result<Option<Color>, GameError> {
        if self.game.variant() != Variant::LineFlip
            || self.status().is_over()
            || !self.game.valid_moves().is_empty()
        {
            return Ok(None);
        }
        let stuck = self.game.current_player();
        self.game.pass_turn()?;
        self.auto_passes.push(self.game.history_len());
        debug!(player = %stuck, "auto-pass");
        Ok(Some(stuck))
    }

    fn after_turn(&mut self) -> Result<Turn, GameError> {
        let auto_passed = self.auto_pass()?;
        let status = self.status();
        if status.is_over() {
            info!(variant = %self.game.variant(), %status, "game over");
        }
        Ok(Turn {
            status,
            auto_passed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::engine::GameState;
    use crate::history::History;
    use crate::selector::RandomSelector;

    #[test]
    fn test_capture_liberty_scored_after_two_passes() {
        let game = Game::new(Variant::CaptureLiberty, 9).unwrap();
        let mut session = Session::new(game).unwrap();
        session.play((4, 4)).unwrap();
        assert_eq!(session.status(), Status::InProgress);
        let turn = session.pass().unwrap();
        assert_eq!(turn.status, Status::InProgress);
        let turn = session.pass().unwrap();
        assert_eq!(turn.status, Status::Won(Color::Black));
        assert_eq!(session.play((0, 0)), Err(GameError::GameOver));
        assert_eq!(session.undo(), Err(GameError::GameOver));
    }

    #[test]
    fn test_move_resets_pass_count() {
        let game = Game::new(Variant::CaptureLiberty, 9).unwrap();
        let mut session = Session::new(game).unwrap();
        session.pass().unwrap();
        assert_eq!(session.passes(), 1);
        session.play((3, 3)).unwrap();
        assert_eq!(session.passes(), 0);
        session.pass().unwrap();
        assert_eq!(session.status(), Status::InProgress);
    }

    #[test]
    fn test_pass_rejected_for_five_in_row() {
        let game = Game::new(Variant::FiveInRow, 15).unwrap();
        let mut session = Session::new(game).unwrap();
        assert_eq!(
            session.pass(),
            Err(GameError::PassNotAllowed(Variant::FiveInRow))
        );
        assert_eq!(session.passes(), 0);
    }

    #[test]
    fn test_resign_and_restart() {
        let game = Game::new(Variant::FiveInRow, 15).unwrap();
        let mut session = Session::new(game).unwrap();
        session.play((7, 7)).unwrap();
        // White to move resigns.
        assert_eq!(session.resign(), Ok(Status::Won(Color::Black)));
        assert_eq!(session.play((0, 0)), Err(GameError::GameOver));
        session.restart().unwrap();
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.game().history_len(), 0);
        assert_eq!(session.game().size(), 15);
    }

    #[test]
    fn test_line_flip_auto_pass() {
        // X O . O . . . .
        let mut board = Board::new(8).unwrap();
        board.set((0, 0), Some(Color::Black));
        board.set((0, 1), Some(Color::White));
        board.set((0, 3), Some(Color::White));
        let game = Game::from_state(Variant::LineFlip, GameState::new(board));
        let mut session = Session::new(game).unwrap();

        // Black flips (0,1); white then brackets nothing and is passed.
        let turn = session.play((0, 2)).unwrap();
        assert_eq!(turn.auto_passed, Some(Color::White));
        assert_eq!(turn.status, Status::InProgress);
        assert_eq!(session.game().current_player(), Color::Black);
        assert_eq!(session.game().history_len(), 2);

        // Black takes the last white stone; nobody can move.
        let turn = session.play((0, 4)).unwrap();
        assert_eq!(turn.auto_passed, None);
        assert_eq!(turn.status, Status::Won(Color::Black));
    }

    #[test]
    fn test_undo_takes_back_auto_pass_with_its_move() {
        // X O . O . . . .
        let mut board = Board::new(8).unwrap();
        board.set((0, 0), Some(Color::Black));
        board.set((0, 1), Some(Color::White));
        board.set((0, 3), Some(Color::White));
        let before = board.clone();
        let game = Game::from_state(Variant::LineFlip, GameState::new(board));
        let mut session = Session::new(game).unwrap();

        let turn = session.play((0, 2)).unwrap();
        assert_eq!(turn.auto_passed, Some(Color::White));

        session.undo().unwrap();
        assert_eq!(session.game().board(), &before);
        assert_eq!(session.game().current_player(), Color::Black);
        assert_eq!(session.game().history_len(), 0);
        assert!(session.game().valid_moves().contains(&(0, 2)));

        let mut random = RandomSelector::with_seed(5);
        let (pt, turn) = session.select_and_play(&mut random).unwrap();
        assert_eq!(pt, Some((0, 2)));
        assert_eq!(turn.auto_passed, Some(Color::White));
    }

    #[test]
    fn test_stuck_side_passed_when_game_is_swapped_in() {
        // X X X O . . . . with white to move: white brackets nothing.
        let mut board = Board::new(8).unwrap();
        for col in 0..3 {
            board.set((0, col), Some(Color::Black));
        }
        board.set((0, 3), Some(Color::White));
        let stuck = || {
            let state = GameState::from_parts(board.clone(), Color::White, History::new());
            Game::from_state(Variant::LineFlip, state)
        };

        let mut session = Session::new(stuck()).unwrap();
        assert_eq!(session.game().current_player(), Color::Black);
        assert_eq!(session.game().history_len(), 1);
        // Nothing before the forced pass to take back.
        assert_eq!(session.undo(), Err(GameError::NothingToUndo));
        assert_eq!(session.game().current_player(), Color::Black);
        assert_eq!(session.game().board(), &board);

        session.restart().unwrap();
        session.replace(stuck()).unwrap();
        assert_eq!(session.game().current_player(), Color::Black);
        assert_eq!(session.game().valid_moves(), vec![(0, 4)]);
        let turn = session.play((0, 4)).unwrap();
        assert_eq!(turn.status, Status::Won(Color::Black));
    }

    #[test]
    fn test_select_and_play_passes_in_capture_liberty_only() {
        struct Never;
        impl MoveSelector for Never {
            fn select(&mut self, _game: &Game) -> Option<Point> {
                None
            }
        }

        let game = Game::new(Variant::CaptureLiberty, 9).unwrap();
        let mut session = Session::new(game).unwrap();
        let (pt, _) = session.select_and_play(&mut Never).unwrap();
        assert_eq!(pt, None);
        assert_eq!(session.passes(), 1);

        let game = Game::new(Variant::FiveInRow, 9).unwrap();
        let mut session = Session::new(game).unwrap();
        assert_eq!(
            session.select_and_play(&mut Never),
            Err(GameError::NoMoveAvailable)
        );

        let mut random = RandomSelector::with_seed(3);
        let (pt, turn) = session.select_and_play(&mut random).unwrap();
        assert!(pt.is_some());
        assert_eq!(turn.status, Status::InProgress);
        assert_eq!(session.game().history_len(), 1);
    }
}
