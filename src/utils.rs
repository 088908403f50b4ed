use crate::engine::{Board, GAP, MAX_SIDE, MIN_SIDE};
use crate::error::BoardError;

/// Validates a two-dimensional grid and converts it into a `Board`.
///
/// The grid must be square with side in `MIN_SIDE..=MAX_SIDE`, and must contain
/// every value in `0..side²` exactly once, where `0` marks the gap. Because the
/// value set is complete, a missing gap shows up as an out-of-range or
/// duplicate value.
///
/// # Arguments
/// * `rows`: The grid, one inner slice per row starting from the top.
///
/// # Returns
/// * `Ok(Board)` for a well-formed grid.
/// * `Err(BoardError)` describing the first problem found.
///
/// # Examples
/// ```
/// use slide_solver::utils::board_from_rows;
///
/// let board = board_from_rows(&[vec![1, 2], vec![3, 0]]).unwrap();
/// assert!(board.is_goal());
///
/// assert!(board_from_rows(&[vec![1, 2], vec![2, 0]]).is_err());
/// ```
pub fn board_from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Board, BoardError> {
    let side = rows.len();
    if side == 0 {
        return Err(BoardError::Empty);
    }

    for (r, row) in rows.iter().enumerate() {
        let found = row.as_ref().len();
        if found != side {
            return Err(BoardError::NotSquare {
                row: r,
                expected: side,
                found,
            });
        }
    }

    if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
        return Err(BoardError::UnsupportedSide {
            side,
            min: MIN_SIDE,
            max: MAX_SIDE,
        });
    }

    let max = (side * side - 1) as u32;
    let mut seen = vec![false; side * side];
    let mut cells = Vec::with_capacity(side * side);

    for row in rows {
        for &value in row.as_ref() {
            if value > max {
                return Err(BoardError::ValueOutOfRange { value, max });
            }
            if seen[value as usize] {
                return Err(BoardError::DuplicateValue { value });
            }
            seen[value as usize] = true;
            cells.push(value as u8);
        }
    }
    debug_assert!(cells.contains(&GAP));

    Ok(Board::from_cells_unchecked(side, cells))
}

/// Parses puzzle rows written as whitespace-separated numbers.
///
/// The gap may be written as `.` or `0`. This is the format of the puzzle files
/// read by the `slide_solver` binary, one row per line.
///
/// # Arguments
/// * `lines`: The rows of the board, starting from the top. Blank lines are not allowed here;
///   strip them before calling.
///
/// # Returns
/// * `Ok(Board)` if every token parses and the grid passes [`board_from_rows`].
/// * `Err(BoardError)` otherwise.
///
/// # Examples
/// ```
/// use slide_solver::utils::board_from_str_lines;
///
/// let board = board_from_str_lines(&["1 2 3", "4 5 6", "7 8 ."]).unwrap();
/// assert!(board.is_goal());
///
/// assert!(board_from_str_lines(&["1 2 x", "4 5 6", "7 8 ."]).is_err());
/// ```
pub fn board_from_str_lines<S: AsRef<str>>(lines: &[S]) -> Result<Board, BoardError> {
    let mut rows: Vec<Vec<u32>> = Vec::with_capacity(lines.len());

    for (r, line) in lines.iter().enumerate() {
        let mut row = Vec::new();
        for token in line.as_ref().split_whitespace() {
            let value = if token == "." {
                GAP as u32
            } else {
                token.parse::<u32>().map_err(|_| BoardError::InvalidToken {
                    row: r,
                    token: token.to_string(),
                })?
            };
            row.push(value);
        }
        rows.push(row);
    }

    board_from_rows(&rows)
}
