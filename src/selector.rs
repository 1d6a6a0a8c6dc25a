//! Automated move selection.
//!
//! Selectors only get shared access to the [`Game`]; the caller decides
//! what to do with the returned point. Randomness comes from a
//! [`fastrand::Rng`] owned by the selector, so a fixed seed gives a
//! repeatable sequence of choices.

use std::str::FromStr;

use crate::board::Point;
use crate::constants::{DEFAULT_WEIGHT, LINE_FLIP_WEIGHTS};
use crate::engine::Variant;
use crate::game::Game;

pub trait MoveSelector {
    /// Pick one of `game.valid_moves()`, or `None` if there is nothing to play.
    fn select(&mut self, game: &Game) -> Option<Point>;
}

/// Uniform choice among legal moves.
pub struct RandomSelector {
    rng: fastrand::Rng,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, game: &Game) -> Option<Point> {
        let moves = game.valid_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.usize(..moves.len())])
    }
}

/// Positional weights for line-flip, random choice for everything else.
pub struct HeuristicSelector {
    rng: fastrand::Rng,
}

impl HeuristicSelector {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    fn weight((row, col): Point) -> i32 {
        LINE_FLIP_WEIGHTS
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }
}

impl Default for HeuristicSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for HeuristicSelector {
    fn select(&mut self, game: &Game) -> Option<Point> {
        let moves = game.valid_moves();
        if moves.is_empty() {
            return None;
        }
        if game.variant() != Variant::LineFlip {
            return Some(moves[self.rng.usize(..moves.len())]);
        }

        // Jitter in [0, 1) breaks ties without overriding a better weight.
        let mut best = moves[0];
        let mut best_score = f64::NEG_INFINITY;
        for &pt in &moves {
            let score = Self::weight(pt) as f64 + self.rng.f64();
            if score > best_score {
                best_score = score;
                best = pt;
            }
        }
        Some(best)
    }
}

/// Which selector the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Random,
    Heuristic,
}

impl SelectorKind {
    pub fn build(self, seed: Option<u64>) -> Box<dyn MoveSelector> {
        match (self, seed) {
            (SelectorKind::Random, Some(s)) => Box::new(RandomSelector::with_seed(s)),
            (SelectorKind::Random, None) => Box::new(RandomSelector::new()),
            (SelectorKind::Heuristic, Some(s)) => Box::new(HeuristicSelector::with_seed(s)),
            (SelectorKind::Heuristic, None) => Box::new(HeuristicSelector::new()),
        }
    }
}

impl FromStr for SelectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "1" => Ok(SelectorKind::Random),
            "heuristic" | "2" => Ok(SelectorKind::Heuristic),
            other => Err(format!("unknown selector: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color};
    use crate::engine::GameState;

    #[test]
    fn test_random_picks_legal_move() {
        let game = Game::new(Variant::LineFlip, 8).unwrap();
        let mut selector = RandomSelector::with_seed(7);
        let legal = game.valid_moves();
        for _ in 0..20 {
            let pt = selector.select(&game).unwrap();
            assert!(legal.contains(&pt));
        }
    }

    #[test]
    fn test_seeded_selectors_repeat() {
        let game = Game::new(Variant::FiveInRow, 15).unwrap();
        let mut a = RandomSelector::with_seed(42);
        let mut b = RandomSelector::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.select(&game), b.select(&game));
        }
    }

    #[test]
    fn test_no_moves_gives_none() {
        let board = Board::new(8).unwrap();
        let game = Game::from_state(Variant::LineFlip, GameState::new(board));
        assert_eq!(RandomSelector::with_seed(1).select(&game), None);
        assert_eq!(HeuristicSelector::with_seed(1).select(&game), None);
    }

    #[test]
    fn test_heuristic_prefers_corner() {
        // Black can take the corner (0,0) or play (2,0).
        let mut board = Board::new(8).unwrap();
        board.set((0, 1), Some(Color::White));
        board.set((0, 2), Some(Color::Black));
        board.set((1, 1), Some(Color::White));
        board.set((2, 2), Some(Color::Black));
        let game = Game::from_state(Variant::LineFlip, GameState::new(board));
        assert!(game.valid_moves().contains(&(0, 0)));
        for seed in 0..10 {
            assert_eq!(HeuristicSelector::with_seed(seed).select(&game), Some((0, 0)));
        }
    }

    #[test]
    fn test_weight_outside_table() {
        assert_eq!(HeuristicSelector::weight((0, 0)), 100);
        assert_eq!(HeuristicSelector::weight((1, 1)), -50);
        assert_eq!(HeuristicSelector::weight((12, 3)), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_selector_kind_parse() {
        assert_eq!("random".parse::<SelectorKind>(), Ok(SelectorKind::Random));
        assert_eq!("Heuristic".parse::<SelectorKind>(), Ok(SelectorKind::Heuristic));
        assert!("minimax".parse::<SelectorKind>().is_err());
    }
}
