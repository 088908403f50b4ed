//! Node evaluation functions for best-first search.
//!
//! A heuristic scores a node as `g + h`: the node's depth (moves made so far)
//! plus an estimate of the moves still needed. Lower scores are expanded first
//! by [`crate::collections::PriorityQueue`].
use crate::engine::GAP;
use crate::node::Node;
use std::fmt;

/// A pure evaluation function over search nodes.
///
/// Implementations must not keep state between calls, and must return
/// `node.depth() + h` for some remaining-cost estimate `h`. For A* to return
/// shortest solutions `h` must never overestimate the true remaining cost.
pub trait Heuristic {
    fn evaluate(&self, node: &Node) -> u32;
}

impl<F> Heuristic for F
where
    F: Fn(&Node) -> u32,
{
    fn evaluate(&self, node: &Node) -> u32 {
        self(node)
    }
}

/// Counts the tiles that are not in their goal cell.
///
/// The gap is not a tile and is not counted, which keeps the estimate admissible:
/// every misplaced tile needs at least one move.
#[derive(Clone, Copy, Debug, Default)]
pub struct Misplaced;

impl Heuristic for Misplaced {
    fn evaluate(&self, node: &Node) -> u32 {
        let cells = node.board().cells();
        let misplaced = cells
            .iter()
            .enumerate()
            .filter(|&(i, &v)| v != GAP && v as usize != i + 1)
            .count() as u32;
        misplaced + node.depth()
    }
}

/// Sums each tile's row and column distance from its goal cell.
///
/// Tile `v` belongs at row `(v - 1) / N`, column `(v - 1) % N`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn evaluate(&self, node: &Node) -> u32 {
        let board = node.board();
        let side = board.side();
        let mut distance = 0;
        for (i, &v) in board.cells().iter().enumerate() {
            if v == GAP {
                continue;
            }
            let (row, col) = (i / side, i % side);
            let target = v as usize - 1;
            let (goal_row, goal_col) = (target / side, target % side);
            distance += row.abs_diff(goal_row) + col.abs_diff(goal_col);
        }
        distance as u32 + node.depth()
    }
}

/// Selects one of the built-in heuristics by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Misplaced,
}

impl Heuristic for HeuristicKind {
    fn evaluate(&self, node: &Node) -> u32 {
        match self {
            HeuristicKind::Manhattan => Manhattan.evaluate(node),
            HeuristicKind::Misplaced => Misplaced.evaluate(node),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Manhattan => write!(f, "manhattan"),
            HeuristicKind::Misplaced => write!(f, "misplaced"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, Direction};
    use crate::utils::board_from_str_lines;

    fn node_at_depth(lines: &[&str], depth: u32) -> Node {
        // Walk Up/Down pairs from the board so the depth grows but the board is unchanged.
        let root = Node::root(board_from_str_lines(lines).unwrap());
        let mut node = root;
        let (first, second) = if node.board().gap_position().0 > 0 {
            (Direction::Up, Direction::Down)
        } else {
            (Direction::Down, Direction::Up)
        };
        for step in 0..depth {
            let direction = if step % 2 == 0 { first } else { second };
            node = Node::child(&node, direction).unwrap();
        }
        node
    }

    #[test]
    fn test_goal_node_scores_depth_only() {
        let goal = Node::root(Board::goal(3));
        assert_eq!(Misplaced.evaluate(&goal), 0);
        assert_eq!(Manhattan.evaluate(&goal), 0);

        let deep_goal = node_at_depth(&["1 2 3", "4 5 6", "7 8 ."], 4);
        assert!(deep_goal.is_goal());
        assert_eq!(Misplaced.evaluate(&deep_goal), 4);
        assert_eq!(Manhattan.evaluate(&deep_goal), 4);
    }

    #[test]
    fn test_misplaced_counts_tiles_not_gap() {
        let one_away = Node::root(board_from_str_lines(&["1 2 3", "4 5 .", "7 8 6"]).unwrap());
        assert_eq!(Misplaced.evaluate(&one_away), 1);

        let scrambled = Node::root(board_from_str_lines(&["8 1 3", "4 . 2", "7 6 5"]).unwrap());
        // 8, 1, 2, 6, 5 are out of place.
        assert_eq!(Misplaced.evaluate(&scrambled), 5);
    }

    #[test]
    fn test_manhattan_distance_sum() {
        let one_away = Node::root(board_from_str_lines(&["1 2 3", "4 5 .", "7 8 6"]).unwrap());
        assert_eq!(Manhattan.evaluate(&one_away), 1);

        let scrambled = Node::root(board_from_str_lines(&["8 1 3", "4 . 2", "7 6 5"]).unwrap());
        // 8: (0,0)->(2,1) = 3, 1: (0,1)->(0,0) = 1, 2: (1,2)->(0,1) = 2,
        // 6: (2,1)->(1,2) = 2, 5: (2,2)->(1,1) = 2.
        assert_eq!(Manhattan.evaluate(&scrambled), 10);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        for lines in [
            ["8 1 3", "4 . 2", "7 6 5"],
            [". 1 2", "3 4 5", "6 7 8"],
            ["1 2 3", ". 4 6", "7 5 8"],
        ] {
            let node = Node::root(board_from_str_lines(&lines).unwrap());
            assert!(Manhattan.evaluate(&node) >= Misplaced.evaluate(&node));
        }
    }

    #[test]
    fn test_manhattan_on_larger_board() {
        let board = board_from_str_lines(&[
            "1 2 3 4",
            "5 6 7 8",
            "9 10 11 12",
            ". 13 14 15",
        ])
        .unwrap();
        let node = Node::root(board);
        assert_eq!(Manhattan.evaluate(&node), 3);
        assert_eq!(Misplaced.evaluate(&node), 3);
    }

    #[test]
    fn test_closure_and_kind_dispatch() {
        let node = Node::root(board_from_str_lines(&["1 2 3", "4 5 .", "7 8 6"]).unwrap());
        let zero = |n: &Node| n.depth();
        assert_eq!(zero.evaluate(&node), 0);
        assert_eq!(HeuristicKind::Manhattan.evaluate(&node), Manhattan.evaluate(&node));
        assert_eq!(HeuristicKind::Misplaced.evaluate(&node), Misplaced.evaluate(&node));
        assert_eq!(HeuristicKind::default(), HeuristicKind::Manhattan);
        assert_eq!(HeuristicKind::Misplaced.to_string(), "misplaced");
    }
}
