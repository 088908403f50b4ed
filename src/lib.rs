//! # Sliding Puzzle Solver Library
//!
//! This library solves sliding-tile puzzles (the 8-puzzle, the 15-puzzle and
//! their N×N relatives) with a generic graph search. Given a start board it
//! returns a shortest sequence of gap moves to the goal layout, or reports that
//! the goal cannot be reached.
//!
//! It is used by the `slide_solver` binary, which reads a puzzle file, picks a
//! search strategy and prints the resulting move string.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), move directions (`Direction`),
//!   legal-move application, the goal test and the parity solvability check.
//! - `node`: Search-tree nodes (`Node`) with parent links, successor generation
//!   and path reconstruction.
//! - `heuristics`: The `Heuristic` trait with the misplaced-tiles and Manhattan
//!   distance estimates.
//! - `collections`: The `OrderedCollection` frontier trait with FIFO, LIFO and
//!   binary-heap priority-queue implementations.
//! - `solver`: The `GraphSearch` control loop and the `solve` entry points.
//! - `utils`: Validation and parsing of boards supplied from outside.
//! - `logging`: Tracing subscriber setup for binaries.
//!
//! ## Example
//! ```
//! use slide_solver::solver::{solve_with_strategy, Strategy};
//! use slide_solver::heuristics::HeuristicKind;
//! use slide_solver::utils::board_from_rows;
//!
//! let board = board_from_rows(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]).unwrap();
//! let report = solve_with_strategy(&board, Strategy::AStar(HeuristicKind::Manhattan));
//! assert_eq!(report.outcome.move_string().as_deref(), Some("DR"));
//! ```

pub mod collections;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod logging;
pub mod node;
pub mod solver;
pub mod utils;

pub use crate::engine::{Board, Direction};
pub use crate::error::BoardError;
pub use crate::solver::{solve, solve_with_strategy, Outcome, SearchReport, Strategy};
