//! Frontier collections that decide the search order.
//!
//! - `FifoQueue`: earliest-pushed node first (breadth-first search).
//! - `LifoStack`: most recently pushed node first (depth-first search).
//! - `PriorityQueue`: lowest heuristic score first (A*).
//!
//! Popping from an empty collection is a programming error and panics.
use crate::heuristics::Heuristic;
use crate::node::{Node, NodeId};
use std::collections::{HashMap, VecDeque};

/// An ordered collection of discovered but not yet expanded nodes.
pub trait OrderedCollection {
    /// Adds a node to the collection.
    fn push(&mut self, node: Node);

    /// Removes and returns the next node in this collection's order.
    ///
    /// # Panics
    /// Panics if the collection is empty.
    fn pop(&mut self) -> Node;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// First-in, first-out frontier.
#[derive(Debug, Default)]
pub struct FifoQueue {
    queue: VecDeque<Node>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderedCollection for FifoQueue {
    fn push(&mut self, node: Node) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Node {
        match self.queue.pop_front() {
            Some(node) => node,
            None => panic!("pop from an empty FifoQueue"),
        }
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in, first-out frontier.
#[derive(Debug, Default)]
pub struct LifoStack {
    stack: Vec<Node>,
}

impl LifoStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderedCollection for LifoStack {
    fn push(&mut self, node: Node) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Node {
        match self.stack.pop() {
            Some(node) => node,
            None => panic!("pop from an empty LifoStack"),
        }
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

#[derive(Debug)]
struct Entry {
    priority: u32,
    node: Node,
}

/// A binary min-heap of nodes ranked by a heuristic.
///
/// The heap is stored densely in a `Vec` with the root at index 0, children of
/// `i` at `2i + 1` and `2i + 2`, and the parent of `i` at `(i - 1) / 2`.
/// Alongside it a map records the current index of every node in the heap and
/// is updated on every swap.
///
/// Each node's priority is computed once, when it is pushed; there is no
/// decrease-key. Equal priorities are ordered by heap structure, not by
/// insertion order.
///
/// Nodes are tracked by identity: two distinct nodes holding the same board may
/// both be queued (the search can reach a board along two paths before either
/// is expanded), but pushing the very same node twice is a contract violation.
///
/// # Examples
/// ```
/// use slide_solver::collections::{OrderedCollection, PriorityQueue};
/// use slide_solver::engine::{Board, Direction};
/// use slide_solver::heuristics::Manhattan;
/// use slide_solver::node::Node;
///
/// let goal = Node::root(Board::goal(3));
/// let away = Node::child(&goal, Direction::Up).unwrap();
///
/// let mut frontier = PriorityQueue::new(Manhattan);
/// frontier.push(away);
/// frontier.push(goal.clone());
/// assert_eq!(frontier.pop(), goal);
/// ```
#[derive(Debug)]
pub struct PriorityQueue<H> {
    heap: Vec<Entry>,
    location: HashMap<NodeId, usize>,
    heuristic: H,
}

impl<H: Heuristic> PriorityQueue<H> {
    pub fn new(heuristic: H) -> Self {
        PriorityQueue {
            heap: Vec::new(),
            location: HashMap::new(),
            heuristic,
        }
    }

    /// Returns the current heap index of `node`, if this exact node is queued.
    pub fn position_of(&self, node: &Node) -> Option<usize> {
        self.location.get(&node.id()).copied()
    }

    /// Returns the lowest priority without removing it.
    pub fn peek_priority(&self) -> Option<u32> {
        self.heap.first().map(|entry| entry.priority)
    }

    fn percolate_up(&mut self, start: usize) -> usize {
        let mut curr = start;
        while curr > 0 {
            let p = parent(curr);
            if self.heap[curr].priority < self.heap[p].priority {
                self.swap(curr, p);
                curr = p;
            } else {
                break;
            }
        }
        curr
    }

    fn push_down(&mut self, start: usize) -> usize {
        let mut curr = start;
        let mut l = left(curr);

        while self.has_two_children(curr) {
            let r = right(curr);
            let smaller = if self.heap[l].priority < self.heap[r].priority {
                l
            } else {
                r
            };

            if self.heap[curr].priority <= self.heap[smaller].priority {
                break;
            }
            self.swap(curr, smaller);
            curr = smaller;
            l = left(curr);
        }

        // A lone left child can only sit directly under the last internal node.
        if l < self.heap.len() && self.heap[l].priority < self.heap[curr].priority {
            self.swap(curr, l);
            curr = l;
        }
        curr
    }

    fn has_two_children(&self, i: usize) -> bool {
        right(i) < self.heap.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.location.insert(self.heap[i].node.id(), i);
        self.location.insert(self.heap[j].node.id(), j);
    }
}

impl<H: Heuristic> OrderedCollection for PriorityQueue<H> {
    /// Scores `node` with the heuristic and inserts it.
    ///
    /// # Panics
    /// Panics if this same node is already queued.
    fn push(&mut self, node: Node) {
        let id = node.id();
        assert!(
            !self.location.contains_key(&id),
            "node pushed twice into PriorityQueue: {:?}",
            node
        );

        let priority = self.heuristic.evaluate(&node);
        self.heap.push(Entry { priority, node });
        let last = self.heap.len() - 1;
        self.location.insert(id, last);
        self.percolate_up(last);
    }

    /// Removes the node with the numerically smallest priority.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    fn pop(&mut self) -> Node {
        assert!(!self.heap.is_empty(), "pop from an empty PriorityQueue");

        let root = self.heap.swap_remove(0);
        self.location.remove(&root.node.id());
        if let Some(moved) = self.heap.first() {
            self.location.insert(moved.node.id(), 0);
            self.push_down(0);
        }
        root.node
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

fn left(parent: usize) -> usize {
    2 * parent + 1
}

fn right(parent: usize) -> usize {
    2 * parent + 2
}

fn parent(child: usize) -> usize {
    (child - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, Direction};
    use crate::heuristics::Manhattan;

    /// Scores a node by its first cell so tests can pick priorities directly.
    fn first_cell(node: &Node) -> u32 {
        node.board().cells()[0] as u32
    }

    /// Distinct boards whose first cell takes each given value.
    fn nodes_with_first_cells(values: &[u8]) -> Vec<Node> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                // Cell 1 carries a unique tag so boards differ even for equal priorities.
                let mut cells = vec![v, i as u8];
                cells.extend(std::iter::repeat(0).take(2));
                Node::root(Board::from_cells_unchecked(2, cells))
            })
            .collect()
    }

    fn assert_heap_invariants<H: Heuristic>(queue: &PriorityQueue<H>) {
        let n = queue.heap.len();
        for i in 0..n {
            for child in [left(i), right(i)] {
                if child < n {
                    assert!(
                        queue.heap[i].priority <= queue.heap[child].priority,
                        "heap property violated at {} -> {}",
                        i,
                        child
                    );
                }
            }
            assert_eq!(queue.location.get(&queue.heap[i].node.id()), Some(&i));
        }
        assert_eq!(queue.location.len(), n);
    }

    #[test]
    fn test_fifo_queue_order() {
        let nodes = nodes_with_first_cells(&[3, 1, 2]);
        let mut queue = FifoQueue::new();
        assert!(queue.is_empty());
        for node in &nodes {
            queue.push(node.clone());
        }
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), nodes[0]);
        assert_eq!(queue.pop(), nodes[1]);
        assert_eq!(queue.pop(), nodes[2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_lifo_stack_order() {
        let nodes = nodes_with_first_cells(&[3, 1, 2]);
        let mut stack = LifoStack::new();
        for node in &nodes {
            stack.push(node.clone());
        }
        assert_eq!(stack.pop(), nodes[2]);
        assert_eq!(stack.pop(), nodes[1]);
        assert_eq!(stack.pop(), nodes[0]);
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty FifoQueue")]
    fn test_fifo_pop_empty_panics() {
        FifoQueue::new().pop();
    }

    #[test]
    #[should_panic(expected = "empty LifoStack")]
    fn test_lifo_pop_empty_panics() {
        LifoStack::new().pop();
    }

    #[test]
    #[should_panic(expected = "empty PriorityQueue")]
    fn test_priority_pop_empty_panics() {
        PriorityQueue::new(Manhattan).pop();
    }

    #[test]
    #[should_panic(expected = "pushed twice")]
    fn test_priority_push_same_node_twice_panics() {
        let node = Node::root(Board::goal(3));
        let mut queue = PriorityQueue::new(Manhattan);
        queue.push(node.clone());
        queue.push(node);
    }

    #[test]
    fn test_priority_accepts_equal_boards_from_distinct_nodes() {
        let mut queue = PriorityQueue::new(Manhattan);
        let root = Node::root(Board::goal(3));
        let up = Node::child(&root, Direction::Up).unwrap();
        let back = Node::child(&up, Direction::Down).unwrap();
        queue.push(root.clone());
        queue.push(back.clone());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().depth(), 0);
        assert_eq!(queue.pop().depth(), 2);
    }

    #[test]
    fn test_priority_pops_in_ascending_order() {
        let values = [9, 4, 7, 1, 8, 2, 6, 3, 5, 0, 4, 7];
        let mut queue = PriorityQueue::new(first_cell);
        for node in nodes_with_first_cells(&values) {
            queue.push(node);
            assert_heap_invariants(&queue);
        }
        assert_eq!(queue.peek_priority(), Some(0));

        let mut popped = Vec::new();
        while !queue.is_empty() {
            popped.push(first_cell(&queue.pop()));
            assert_heap_invariants(&queue);
        }
        let mut expected: Vec<u32> = values.iter().map(|&v| v as u32).collect();
        expected.sort_unstable();
        assert_eq!(popped, expected);
    }

    #[test]
    fn test_priority_interleaved_push_pop_keeps_invariants() {
        let nodes = nodes_with_first_cells(&[5, 3, 8, 1, 9, 2, 7, 4, 6, 0, 3, 5, 1]);
        let mut queue = PriorityQueue::new(first_cell);
        for (i, node) in nodes.into_iter().enumerate() {
            queue.push(node);
            assert_heap_invariants(&queue);
            if i % 3 == 2 {
                let popped = first_cell(&queue.pop());
                assert_heap_invariants(&queue);
                assert!(popped <= queue.peek_priority().unwrap_or(u32::MAX));
            }
        }
        while !queue.is_empty() {
            queue.pop();
            assert_heap_invariants(&queue);
        }
    }

    #[test]
    fn test_priority_position_tracks_swaps() {
        let nodes = nodes_with_first_cells(&[5, 4, 3]);
        let mut queue = PriorityQueue::new(first_cell);
        queue.push(nodes[0].clone());
        assert_eq!(queue.position_of(&nodes[0]), Some(0));

        queue.push(nodes[1].clone());
        assert_eq!(queue.position_of(&nodes[1]), Some(0));
        assert_eq!(queue.position_of(&nodes[0]), Some(1));

        queue.push(nodes[2].clone());
        assert_eq!(queue.position_of(&nodes[2]), Some(0));
        assert_eq!(queue.position_of(&nodes[1]), Some(2));

        let popped = queue.pop();
        assert_eq!(popped, nodes[2]);
        assert_eq!(queue.position_of(&nodes[2]), None);
        assert_eq!(queue.position_of(&nodes[1]), Some(0));
        assert_eq!(queue.position_of(&nodes[0]), Some(1));
    }

    #[test]
    fn test_priority_single_left_child_swap() {
        // After popping the root of [1, 3, 2, 4], the heap is [4, 3, 2]; pushing
        // down swaps with 2 and stops. Then [2, 3, 4] -> pop -> [4, 3]: only a
        // left child remains and it must still be swapped up.
        let nodes = nodes_with_first_cells(&[1, 3, 2, 4]);
        let mut queue = PriorityQueue::new(first_cell);
        for node in nodes {
            queue.push(node);
        }
        assert_eq!(first_cell(&queue.pop()), 1);
        assert_eq!(first_cell(&queue.pop()), 2);
        assert_heap_invariants(&queue);
        assert_eq!(queue.peek_priority(), Some(3));
        assert_eq!(first_cell(&queue.pop()), 3);
        assert_eq!(first_cell(&queue.pop()), 4);
    }
}
