//! Generic best-first search
//!
//! The framework knows nothing about boards. A problem supplies a [`Node`]
//! type (cost, heuristic, goal and terminal tests, child expansion) plus a
//! shared context threaded through every call; a [`Frontier`] decides the
//! expansion order.
//!
//! There is no closed set. Problems that revisit equivalent states dedupe in
//! their own context, and the first goal popped is returned without checking
//! whether a cheaper one is still queued.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A search-tree node
pub trait Node: Sized {
    /// Mutable state shared by every node of one search
    type Context;

    /// Cost accumulated from the root
    fn cost(&self) -> i64;

    /// Estimated remaining cost to a goal
    fn heuristic_value(&self) -> i64;

    fn estimated_cost(&self) -> i64 {
        self.cost() + self.heuristic_value()
    }

    /// Called once when the node is pulled from the frontier
    fn visit(&self, context: &mut Self::Context);

    /// Stop expanding this node; it stays a candidate
    fn is_terminal(&self, context: &Self::Context) -> bool;

    fn is_goal(&self, context: &Self::Context) -> bool;

    /// Expand this node; only called on non-terminal nodes
    fn children(&self, context: &Self::Context) -> Vec<Self>;
}

/// Order in which pending nodes are pulled
pub trait Frontier<N> {
    fn append_node(&mut self, node: N);
    fn next_candidate(&mut self) -> Option<N>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Search loop over any frontier
#[derive(Debug)]
pub struct GeneralSearch<N, F> {
    frontier: F,
    expanded: usize,
    _node: std::marker::PhantomData<N>,
}

impl<N: Node, F: Frontier<N>> GeneralSearch<N, F> {
    pub fn with_frontier(frontier: F) -> Self {
        Self {
            frontier,
            expanded: 0,
            _node: std::marker::PhantomData,
        }
    }

    /// Pull candidates until a goal is found or the frontier runs dry
    pub fn search(&mut self, context: &mut N::Context) -> Option<N> {
        while let Some(node) = self.frontier.next_candidate() {
            node.visit(context);
            if node.is_goal(context) {
                return Some(node);
            }
            if !node.is_terminal(context) {
                self.expanded += 1;
                for child in node.children(context) {
                    self.frontier.append_node(child);
                }
            }
        }
        None
    }

    /// Nodes whose children were generated
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Nodes still waiting in the frontier
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }
}

/// Best-first search keyed by [`Node::estimated_cost`]
pub type AStar<N> = GeneralSearch<N, PriorityFrontier<N>>;

impl<N: Node> AStar<N> {
    /// Start from `root`, queued at priority 0
    pub fn new(root: N) -> Self {
        let mut frontier = PriorityFrontier::default();
        frontier.push(root, 0);
        Self::with_frontier(frontier)
    }
}

/// Last-in first-out search
pub type DepthFirst<N> = GeneralSearch<N, Vec<N>>;

impl<N: Node> DepthFirst<N> {
    pub fn new(root: N) -> Self {
        Self::with_frontier(vec![root])
    }
}

impl<N> Frontier<N> for Vec<N> {
    fn append_node(&mut self, node: N) {
        self.push(node);
    }

    fn next_candidate(&mut self) -> Option<N> {
        self.pop()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Min-priority queue; equal priorities come out in insertion order
#[derive(Debug)]
pub struct PriorityFrontier<N> {
    heap: BinaryHeap<Queued<N>>,
    sequence: u64,
}

impl<N> Default for PriorityFrontier<N> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<N> PriorityFrontier<N> {
    pub fn push(&mut self, node: N, priority: i64) {
        self.heap.push(Queued {
            priority,
            sequence: self.sequence,
            node,
        });
        self.sequence += 1;
    }
}

impl<N: Node> Frontier<N> for PriorityFrontier<N> {
    fn append_node(&mut self, node: N) {
        let priority = node.estimated_cost();
        self.push(node, priority);
    }

    fn next_candidate(&mut self) -> Option<N> {
        self.heap.pop().map(|queued| queued.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug)]
struct Queued<N> {
    priority: i64,
    sequence: u64,
    node: N,
}

impl<N> PartialEq for Queued<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Queued<N> {}

impl<N> PartialOrd for Queued<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed: `BinaryHeap` is a max-heap.
impl<N> Ord for Queued<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
