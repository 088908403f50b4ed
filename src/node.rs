//! Search-tree nodes.
//!
//! A `Node` wraps a [`Board`] together with the link back to the node it was
//! expanded from, the move that produced it and its depth. Nodes are cheap
//! handles around reference-counted data: cloning a node shares the same tree
//! position, and a child keeps its parent alive, never the reverse.
use crate::engine::{Board, Direction};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[derive(Debug)]
struct NodeData {
    board: Board,
    parent: Option<Node>,
    action: Option<Direction>,
    depth: u32,
}

/// A position in the search tree.
///
/// Two nodes are equal, and hash identically, iff their boards are equal.
/// Parent, action and depth do not take part, which is what lets the explored
/// set recognise a configuration reached by a different move sequence.
#[derive(Clone)]
pub struct Node {
    data: Rc<NodeData>,
}

/// Identity of a particular node allocation, as opposed to its board.
///
/// Only meaningful while the node is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl Node {
    /// Creates a root node: no parent, no action, depth 0.
    pub fn root(board: Board) -> Self {
        Node {
            data: Rc::new(NodeData {
                board,
                parent: None,
                action: None,
                depth: 0,
            }),
        }
    }

    /// Creates the child reached by moving the gap of `parent` in `direction`.
    ///
    /// Returns `None` when the move is illegal from the parent's board.
    pub fn child(parent: &Node, direction: Direction) -> Option<Self> {
        let board = parent.board().apply_move(direction)?;
        Some(Node {
            data: Rc::new(NodeData {
                board,
                parent: Some(parent.clone()),
                action: Some(direction),
                depth: parent.depth() + 1,
            }),
        })
    }

    /// Returns one slot per direction in the order Up, Down, Left, Right.
    /// A slot is `None` if that move is illegal from this node's board.
    pub fn successors(&self) -> [Option<Node>; 4] {
        Direction::ALL.map(|direction| Node::child(self, direction))
    }

    pub fn board(&self) -> &Board {
        &self.data.board
    }

    pub fn parent(&self) -> Option<&Node> {
        self.data.parent.as_ref()
    }

    /// The move that produced this node from its parent; `None` for a root.
    pub fn action(&self) -> Option<Direction> {
        self.data.action
    }

    pub fn depth(&self) -> u32 {
        self.data.depth
    }

    pub fn is_goal(&self) -> bool {
        self.data.board.is_goal()
    }

    /// Reconstructs the moves from `start` to this node.
    ///
    /// Walks parent links upward, prepending each action, until reaching a node
    /// whose board equals `start`'s board. If `start` is not an ancestor the walk
    /// ends at the tree root instead.
    ///
    /// # Examples
    /// ```
    /// use slide_solver::engine::{Board, Direction};
    /// use slide_solver::node::Node;
    ///
    /// let root = Node::root(Board::goal(3));
    /// let a = Node::child(&root, Direction::Up).unwrap();
    /// let b = Node::child(&a, Direction::Left).unwrap();
    /// assert_eq!(b.path_from(&root), vec![Direction::Up, Direction::Left]);
    /// ```
    pub fn path_from(&self, start: &Node) -> Vec<Direction> {
        let mut path = Vec::with_capacity(self.depth() as usize);
        let mut current = self;
        while current != start {
            match (current.action(), current.parent()) {
                (Some(action), Some(parent)) => {
                    path.push(action);
                    current = parent;
                }
                _ => break,
            }
        }
        path.reverse();
        path
    }

    pub(crate) fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.data) as usize)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.data.board == other.data.board
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.board.hash(state);
    }
}

impl fmt::Debug for Node {
    // The parent chain is summarised by depth to keep output bounded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("board", &self.data.board.cells())
            .field("action", &self.data.action)
            .field("depth", &self.data.depth)
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.board)
    }
}

impl Drop for NodeData {
    // Unlink long parent chains iteratively so dropping a deep node cannot
    // overflow the stack through recursive `Rc` drops.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node.data) {
                Ok(mut data) => next = data.parent.take(),
                Err(_) => break,
            }
        }
    }
}
