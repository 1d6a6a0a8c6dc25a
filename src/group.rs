//! Connected stone groups and their liberties.

use crate::board::{Board, Color, Point};

/// A maximal set of orthogonally connected same-color stones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: Vec<Point>,
    /// Number of distinct empty points adjacent to any member.
    pub liberties: usize,
}

/// Flood-fill the group containing `start`.
///
/// Returns `None` if `start` is empty or off the board. Read-only, so it is
/// safe to run on a trial board as often as needed.
pub fn find_group(board: &Board, start: Point) -> Option<Group> {
    let color = board.get(start)?;
    let cells = board.size() * board.size();
    let mut visited = vec![false; cells];
    let mut liberty_seen = vec![false; cells];
    let mut stack = vec![start];
    let mut stones = Vec::new();
    let mut liberties = 0;

    visited[board.flat(start)] = true;
    while let Some(pt) = stack.pop() {
        stones.push(pt);
        for n in board.neighbors(pt) {
            let i = board.flat(n);
            match board.get(n) {
                None => {
                    if !liberty_seen[i] {
                        liberty_seen[i] = true;
                        liberties += 1;
                    }
                }
                Some(c) if c == color && !visited[i] => {
                    visited[i] = true;
                    stack.push(n);
                }
                _ => {}
            }
        }
    }

    Some(Group {
        color,
        stones,
        liberties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[Point], white: &[Point]) -> Board {
        let mut board = Board::new(9).unwrap();
        for &pt in black {
            board.set(pt, Some(Color::Black));
        }
        for &pt in white {
            board.set(pt, Some(Color::White));
        }
        board
    }

    #[test]
    fn test_single_stone_liberties() {
        let board = board_with(&[(4, 4), (0, 0)], &[]);
        assert_eq!(find_group(&board, (4, 4)).unwrap().liberties, 4);
        assert_eq!(find_group(&board, (0, 0)).unwrap().liberties, 2);
    }

    #[test]
    fn test_empty_point_has_no_group() {
        let board = board_with(&[], &[]);
        assert_eq!(find_group(&board, (3, 3)), None);
        assert_eq!(find_group(&board, (30, 3)), None);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // Two stones in an L share the liberty at (1, 1).
        let board = board_with(&[(0, 1), (1, 0)], &[]);
        let g = find_group(&board, (0, 1)).unwrap();
        assert_eq!(g.stones.len(), 1);
        // (0,1) alone: (0,0), (0,2), (1,1)
        assert_eq!(g.liberties, 3);

        let board = board_with(&[(0, 0), (0, 1), (1, 0)], &[]);
        let g = find_group(&board, (0, 0)).unwrap();
        assert_eq!(g.stones.len(), 3);
        // (0,2), (1,1), (2,0); (1,1) is adjacent to two members
        assert_eq!(g.liberties, 3);
    }

    #[test]
    fn test_surrounded_group_has_zero_liberties() {
        let board = board_with(&[(0, 0), (0, 1)], &[(1, 0), (1, 1), (0, 2)]);
        let g = find_group(&board, (0, 1)).unwrap();
        assert_eq!(g.color, Color::Black);
        assert_eq!(g.stones.len(), 2);
        assert_eq!(g.liberties, 0);

        let white = find_group(&board, (1, 0)).unwrap();
        assert_eq!(white.stones.len(), 2);
    }
}
