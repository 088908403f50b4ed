//! Core board model for sliding-tile puzzles.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: The four ways the gap can slide.
//! - `Board`: An immutable N×N snapshot of tile values with the gap stored as `0`.
//!   Every move produces a new board; the input board is never mutated.
use std::fmt;

/// The value used for the empty cell ("gap") on the board.
pub const GAP: u8 = 0;

/// Smallest supported board side. A 1×1 board has no tiles to slide.
pub const MIN_SIDE: usize = 2;

/// Largest supported board side. Tile values must fit in a `u8`.
pub const MAX_SIDE: usize = 15;

/// A direction in which the gap moves.
///
/// The action recorded on a search node is the direction the *gap* travelled,
/// so `Up` swaps the gap with the tile directly above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The gap moves one row up.
    Up,
    /// The gap moves one row down.
    Down,
    /// The gap moves one column left.
    Left,
    /// The gap moves one column right.
    Right,
}

impl Direction {
    /// All directions in the fixed successor order used by the search.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Converts the direction to its single-character move code.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide_solver::engine::Direction;
    /// assert_eq!(Direction::Up.to_char(), 'U');
    /// assert_eq!(Direction::Right.to_char(), 'R');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Parses a single move code. Returns `None` for anything other than `U`, `D`, `L` or `R`.
    pub fn from_char(c: char) -> Option<Direction> {
        match c {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns the direction that undoes this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An N×N sliding-puzzle configuration.
///
/// Cells are stored row-major. Exactly one cell holds [`GAP`]; the remaining
/// cells hold each of `1..N²` exactly once. Boards built through
/// [`crate::utils::board_from_rows`] are validated; [`Board::from_cells_unchecked`]
/// trusts its caller.
///
/// Equality and hashing cover the cell contents only, in order, so two boards
/// reached by different move sequences compare equal when every tile matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Creates the canonical goal board for an `side`×`side` puzzle:
    /// values `1..side²` in row-major order followed by the gap in the last cell.
    ///
    /// # Panics
    /// Panics if `side` is outside `MIN_SIDE..=MAX_SIDE`.
    ///
    /// # Examples
    /// ```
    /// use slide_solver::engine::Board;
    /// let goal = Board::goal(3);
    /// assert_eq!(goal.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    /// assert!(goal.is_goal());
    /// ```
    pub fn goal(side: usize) -> Self {
        assert!(
            (MIN_SIDE..=MAX_SIDE).contains(&side),
            "board side {} outside supported range {}..={}",
            side,
            MIN_SIDE,
            MAX_SIDE
        );
        let count = side * side;
        let mut cells: Vec<u8> = (1..count).map(|v| v as u8).collect();
        cells.push(GAP);
        Board { side, cells }
    }

    /// Creates a board from row-major cells without validating the value set.
    ///
    /// Callers at the input boundary should use [`crate::utils::board_from_rows`],
    /// which rejects malformed boards before they reach the search.
    pub fn from_cells_unchecked(side: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Board { side, cells }
    }

    /// Returns the width (and height) of the board.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the row-major cell values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the value at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn get(&self, r: usize, c: usize) -> u8 {
        assert!(r < self.side && c < self.side, "cell ({}, {}) out of bounds", r, c);
        self.cells[r * self.side + c]
    }

    /// Returns the `(row, column)` of the gap.
    ///
    /// # Panics
    /// Panics if the board holds no gap, which validated boards never do.
    pub fn gap_position(&self) -> (usize, usize) {
        let idx = self
            .cells
            .iter()
            .position(|&v| v == GAP)
            .unwrap_or_else(|| panic!("board has no gap cell"));
        (idx / self.side, idx % self.side)
    }

    /// Returns a new board with the gap swapped with its neighbour in `direction`.
    ///
    /// Returns `None` when the gap already sits on the edge in that direction
    /// (for example `Up` while the gap is in the top row). `self` is left untouched.
    ///
    /// # Examples
    /// ```
    /// use slide_solver::engine::{Board, Direction};
    /// let goal = Board::goal(3);
    /// assert!(goal.apply_move(Direction::Down).is_none());
    /// let moved = goal.apply_move(Direction::Up).unwrap();
    /// assert_eq!(moved.gap_position(), (1, 2));
    /// ```
    pub fn apply_move(&self, direction: Direction) -> Option<Board> {
        let (r, c) = self.gap_position();
        let last = self.side - 1;
        let (nr, nc) = match direction {
            Direction::Up if r > 0 => (r - 1, c),
            Direction::Down if r < last => (r + 1, c),
            Direction::Left if c > 0 => (r, c - 1),
            Direction::Right if c < last => (r, c + 1),
            _ => return None,
        };

        let mut cells = self.cells.clone();
        cells.swap(r * self.side + c, nr * self.side + nc);
        Some(Board {
            side: self.side,
            cells,
        })
    }

    /// Applies a sequence of moves, returning every intermediate board
    /// (not including `self`). Stops with `None` at the first illegal move.
    pub fn apply_moves<I>(&self, moves: I) -> Option<Vec<Board>>
    where
        I: IntoIterator<Item = Direction>,
    {
        let mut boards = Vec::new();
        let mut current = self.clone();
        for direction in moves {
            current = current.apply_move(direction)?;
            boards.push(current.clone());
        }
        Some(boards)
    }

    /// Returns `true` if the board is the canonical goal layout for its size.
    pub fn is_goal(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells[last] == GAP
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(i, &v)| v as usize == i + 1)
    }

    /// Returns `true` if the goal is reachable from this board.
    ///
    /// Uses the inversion-parity argument: on an odd-width board the number of
    /// inversions among the tiles must be even; on an even-width board the
    /// inversions plus the gap's row counted from the bottom (1-based) must be odd.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&v| v != GAP).collect();
        let mut inversions = 0usize;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }

        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (gap_row, _) = self.gap_position();
            let row_from_bottom = self.side - gap_row;
            (inversions + row_from_bottom) % 2 == 1
        }
    }
}

impl fmt::Display for Board {
    /// Formats the board as tab-separated rows with the gap shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.side).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "\t")?;
                }
                if v == GAP {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", v)?;
                }
            }
        }
        Ok(())
    }
}
