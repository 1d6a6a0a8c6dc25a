use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SIZE, MIN_SIZE, ORTHOGONAL};
use crate::error::{GameError, MoveError};

/// Stone color. Black (player A) always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used in board dumps and snapshot rows.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Zero-indexed (row, col).
pub type Point = (usize, usize);

/// A square grid of cells: `None` is empty, `Some(color)` holds a stone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Point) -> Option<usize> {
        self.is_valid(row, col).then(|| row * self.size + col)
    }

    pub fn is_valid(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Returns `None` for empty and off-board points alike.
    pub fn get(&self, pt: Point) -> Option<Color> {
        self.idx(pt).and_then(|i| self.cells[i])
    }

    /// Off-board points are ignored.
    pub fn set(&mut self, pt: Point, cell: Option<Color>) {
        if let Some(i) = self.idx(pt) {
            self.cells[i] = cell;
        }
    }

    /// Basic placement check shared by every variant.
    pub fn check_empty(&self, pt: Point) -> Result<(), MoveError> {
        match self.idx(pt) {
            None => Err(MoveError::OutOfBounds(pt.0, pt.1)),
            Some(i) if self.cells[i].is_some() => Err(MoveError::Occupied),
            Some(_) => Ok(()),
        }
    }

    /// Returns (black, white) stone counts.
    pub fn count_stones(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(b, w), c| match c {
            Some(Color::Black) => (b + 1, w),
            Some(Color::White) => (b, w + 1),
            None => (b, w),
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| (r, c)))
    }

    /// The point one step from `pt` in direction `(dr, dc)`, if on the board.
    pub fn step(&self, (row, col): Point, (dr, dc): (isize, isize)) -> Option<Point> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.is_valid(r, c).then_some((r, c))
    }

    /// Orthogonal neighbors that lie on the board.
    pub fn neighbors(&self, pt: Point) -> impl Iterator<Item = Point> + '_ {
        ORTHOGONAL.iter().filter_map(move |&d| self.step(pt, d))
    }

    /// Index of a point into a per-cell scratch array of `size * size`.
    pub(crate) fn flat(&self, (row, col): Point) -> usize {
        row * self.size + col
    }

    /// Encode each row as a string of `.`, `X` and `O`.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|c| c.map_or('.', Color::symbol))
                    .collect()
            })
            .collect()
    }

    /// Decode rows produced by [`Board::to_rows`], checking every dimension and cell.
    pub fn from_rows(size: usize, rows: &[String]) -> Result<Self, GameError> {
        let mut board =
            Board::new(size).map_err(|_| GameError::Corrupt(format!("board size {size}")))?;
        if rows.len() != size {
            return Err(GameError::Corrupt(format!(
                "expected {size} rows, found {}",
                rows.len()
            )));
        }
        for (r, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != size {
                return Err(GameError::Corrupt(format!(
                    "row {r} has {} cells, expected {size}",
                    chars.len()
                )));
            }
            for (c, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    '.' => None,
                    'X' => Some(Color::Black),
                    'O' => Some(Color::White),
                    other => {
                        return Err(GameError::Corrupt(format!(
                            "invalid cell {other:?} at ({r}, {c})"
                        )));
                    }
                };
                board.set((r, c), cell);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:>2}", c)?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{r:>2} ")?;
            for c in 0..self.size {
                let ch = self.get((r, c)).map_or('.', Color::symbol);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
