use crate::collections::{FifoQueue, LifoStack, OrderedCollection, PriorityQueue};
use crate::engine::{Board, Direction};
use crate::heuristics::HeuristicKind;
use crate::node::Node;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};

/// Where a graph search currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// The frontier still holds nodes and no goal has been popped.
    Running,
    /// A goal node was popped; carries the moves from the start board to it.
    Solved(Vec<Direction>),
    /// The frontier emptied without reaching a goal.
    Unsolvable,
}

/// The terminal result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The gap moves from the start board to the goal, in order.
    Solved(Vec<Direction>),
    Unsolvable,
}

impl Outcome {
    /// Returns the solution as a string over `U`, `D`, `L`, `R`, or `None` if unsolvable.
    pub fn move_string(&self) -> Option<String> {
        match self {
            Outcome::Solved(moves) => Some(moves.iter().map(|d| d.to_char()).collect()),
            Outcome::Unsolvable => None,
        }
    }
}

/// Represents the result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// The number of distinct states expanded before termination
    /// (the size of the explored set when the search stopped).
    pub states_expanded: usize,
    /// The largest number of nodes the frontier held at once.
    pub max_frontier_len: usize,
}

/// Generic graph search over sliding-puzzle boards.
///
/// The order in which nodes are expanded is entirely decided by the supplied
/// frontier: a [`FifoQueue`] gives breadth-first search, a [`LifoStack`] gives
/// depth-first search and a [`PriorityQueue`] gives A*.
///
/// Only the explored set is consulted when deciding whether to push a successor,
/// so the same board may sit in the frontier more than once. A node that has been
/// explored is never pushed again, even if a later path to it is shorter.
pub struct GraphSearch<C> {
    root: Node,
    frontier: C,
    explored: HashSet<Node>,
    state: SearchState,
    max_frontier_len: usize,
}

impl<C: OrderedCollection> GraphSearch<C> {
    /// Wraps `initial` as the root node and pushes it onto `frontier`.
    pub fn new(initial: Board, mut frontier: C) -> Self {
        let root = Node::root(initial);
        frontier.push(root.clone());
        let max_frontier_len = frontier.len();
        GraphSearch {
            root,
            frontier,
            explored: HashSet::new(),
            state: SearchState::Running,
            max_frontier_len,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn states_expanded(&self) -> usize {
        self.explored.len()
    }

    /// Pops and processes one node. Does nothing once the search has terminated.
    ///
    /// # Returns
    /// The state after this step.
    pub fn step(&mut self) -> &SearchState {
        if self.state != SearchState::Running {
            return &self.state;
        }
        if self.frontier.is_empty() {
            self.state = SearchState::Unsolvable;
            return &self.state;
        }

        let u = self.frontier.pop();
        if u.is_goal() {
            self.state = SearchState::Solved(u.path_from(&self.root));
            return &self.state;
        }

        trace!(depth = u.depth(), frontier = self.frontier.len(), "expanding node");
        let successors = u.successors();
        self.explored.insert(u);
        for successor in successors.into_iter().flatten() {
            if !self.explored.contains(&successor) {
                self.frontier.push(successor);
            }
        }
        self.max_frontier_len = self.max_frontier_len.max(self.frontier.len());

        if self.frontier.is_empty() {
            self.state = SearchState::Unsolvable;
        }
        &self.state
    }

    /// Runs the search to completion.
    pub fn run(mut self) -> SearchReport {
        while self.step() == &SearchState::Running {}

        let outcome = match self.state {
            SearchState::Solved(moves) => Outcome::Solved(moves),
            _ => Outcome::Unsolvable,
        };
        SearchReport {
            outcome,
            states_expanded: self.explored.len(),
            max_frontier_len: self.max_frontier_len,
        }
    }
}

/// Searches for a sequence of gap moves that turns `initial` into the goal board.
///
/// The frontier decides the search order; see [`GraphSearch`]. The board must
/// already be validated (see [`crate::utils::board_from_rows`]).
///
/// # Examples
/// ```
/// use slide_solver::collections::PriorityQueue;
/// use slide_solver::heuristics::Manhattan;
/// use slide_solver::solver::solve;
/// use slide_solver::utils::board_from_str_lines;
///
/// let board = board_from_str_lines(&["1 2 3", "4 5 6", "7 . 8"]).unwrap();
/// let report = solve(&board, PriorityQueue::new(Manhattan));
/// assert_eq!(report.outcome.move_string().as_deref(), Some("R"));
/// ```
pub fn solve<C: OrderedCollection>(initial: &Board, frontier: C) -> SearchReport {
    debug!(side = initial.side(), "starting graph search");
    let report = GraphSearch::new(initial.clone(), frontier).run();
    match &report.outcome {
        Outcome::Solved(moves) => debug!(
            moves = moves.len(),
            states_expanded = report.states_expanded,
            max_frontier = report.max_frontier_len,
            "search solved"
        ),
        Outcome::Unsolvable => debug!(
            states_expanded = report.states_expanded,
            max_frontier = report.max_frontier_len,
            "search exhausted the reachable states"
        ),
    }
    report
}

/// The frontier policies the solver can be run with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first search with a FIFO queue. Finds shortest solutions.
    Bfs,
    /// Depth-first search with a LIFO stack. Solutions are usually far from shortest.
    Dfs,
    /// A* with a priority queue ranked by the given heuristic.
    AStar(HeuristicKind),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::AStar(kind) => write!(f, "astar/{}", kind),
        }
    }
}

/// Runs [`solve`] with the frontier matching `strategy`.
pub fn solve_with_strategy(initial: &Board, strategy: Strategy) -> SearchReport {
    debug!(%strategy, "selected search strategy");
    match strategy {
        Strategy::Bfs => solve(initial, FifoQueue::new()),
        Strategy::Dfs => solve(initial, LifoStack::new()),
        Strategy::AStar(kind) => solve(initial, PriorityQueue::new(kind)),
    }
}
