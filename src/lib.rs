//! Gridplay: rule engines for turn-based board games on a square grid.
//!
//! Three games share one contract ([`engine::Rules`]) for move validation,
//! state mutation, undo and win detection:
//!
//! - five-in-a-row ([`five_in_row`])
//! - a capture game with liberties, suicide and ko ([`capture_liberty`])
//! - a line-flip game where moves must bracket opponent stones ([`line_flip`])
//!
//! ## Modules
//!
//! - [`constants`] - Size bounds, directions and selector weights
//! - [`board`] - Grid of cells and stone colors
//! - [`engine`] - Shared rule contract, game state and status
//! - [`group`] - Connected groups and liberty counting
//! - [`game`] - One type dispatching to the three engines
//! - [`history`] - Undo stack of earlier boards
//! - [`snapshot`] - Save and load
//! - [`selector`] - Automated move selection
//! - [`session`] - Turn-loop policy (passes, resignation, forced passes)
//! - [`protocol`] - Text command front-end
//!
//! ## Example
//!
//! ```
//! use gridplay::engine::{Status, Variant};
//! use gridplay::game::Game;
//!
//! let mut game = Game::new(Variant::LineFlip, 8).unwrap();
//! game.make_move((2, 3)).unwrap();
//! assert_eq!(game.board().count_stones(), (4, 1));
//! assert_eq!(game.check_winner(), Status::InProgress);
//! game.undo().unwrap();
//! ```

pub mod board;
pub mod capture_liberty;
pub mod constants;
pub mod engine;
pub mod error;
pub mod five_in_row;
pub mod game;
pub mod group;
pub mod history;
pub mod line_flip;
pub mod protocol;
pub mod selector;
pub mod session;
pub mod snapshot;
