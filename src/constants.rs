//! Constants for board dimensions, rule parameters, and selector weights.
//!
//! Board sizes are chosen at runtime, but always within
//! [`MIN_SIZE`]..=[`MAX_SIZE`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest accepted board side.
pub const MIN_SIZE: usize = 8;

/// Largest accepted board side.
pub const MAX_SIZE: usize = 19;

/// Default board side for five-in-a-row.
pub const FIVE_IN_ROW_DEFAULT_SIZE: usize = 15;

/// Default board side for the capture-liberty game.
pub const CAPTURE_LIBERTY_DEFAULT_SIZE: usize = 19;

/// Default board side for the line-flip game.
pub const LINE_FLIP_DEFAULT_SIZE: usize = 8;

// =============================================================================
// Rule Parameters
// =============================================================================

/// Stones in a line needed to win five-in-a-row.
pub const WIN_LENGTH: usize = 5;

/// Consecutive passes after which a capture-liberty game is scored.
pub const PASSES_TO_END: u32 = 2;

// =============================================================================
// Direction Vectors
// =============================================================================

/// Orthogonal neighbor offsets (row, col): North, South, West, East.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Forward line directions scanned for five-in-a-row:
/// horizontal, vertical, diagonal, anti-diagonal.
pub const LINES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// All eight directions used for line-flip bracketing.
pub const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Selector Weights
// =============================================================================

/// Positional weights for the line-flip heuristic on the classic 8x8 board.
/// Corners are best, the squares next to corners are worst.
pub const LINE_FLIP_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Weight for cells outside [`LINE_FLIP_WEIGHTS`] on larger boards.
pub const DEFAULT_WEIGHT: i32 = 1;
