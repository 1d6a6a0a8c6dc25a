//! Stack of earlier boards, most recent last.

use crate::board::Board;

/// One entry per move or pass that has not been undone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    pub fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop()
    }

    /// The board as it was before the most recent action.
    pub fn last(&self) -> Option<&Board> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.snapshots.iter()
    }
}

impl FromIterator<Board> for History {
    fn from_iter<I: IntoIterator<Item = Board>>(iter: I) -> Self {
        Self {
            snapshots: iter.into_iter().collect(),
        }
    }
}
