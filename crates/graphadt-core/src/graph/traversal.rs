//! Graph exploration: generic search, BFS and DFS.
//!
//! Provides traversal via the [`Explore`] extension trait, blanket
//! implemented for every [`Graph`], so storage backings get it without
//! reimplementation. All traversals mark a node visited when it is
//! scheduled, never when it is expanded, so no node is scheduled twice.

use std::collections::{HashSet, VecDeque};

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

use super::adt::Graph;
use super::tree::{ExplorationTree, TreeIndex};

/// Unordered pool of tree records awaiting expansion.
///
/// Records leave the pool at a random position, so expansion order is
/// neither FIFO nor LIFO and differs between runs. Push and pop are O(1).
#[derive(Debug)]
pub(crate) struct Frontier {
    pending: Vec<TreeIndex>,
    rng: ThreadRng,
}

impl Default for Frontier {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            rng: rand::thread_rng(),
        }
    }
}

impl Frontier {
    pub(crate) fn insert(&mut self, idx: TreeIndex) {
        self.pending.push(idx);
    }

    pub(crate) fn pop_any(&mut self) -> Option<TreeIndex> {
        if self.pending.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..self.pending.len());
        Some(self.pending.swap_remove(pick))
    }
}

/// Generic search from `root_id`, calling `on_expand` for every record
/// removed from the frontier together with its successors.
///
/// Returns `None` if `root_id` is not a live node.
pub(crate) fn explore<G, F>(graph: &G, root_id: u64, mut on_expand: F) -> Option<ExplorationTree>
where
    G: Graph + ?Sized,
    F: FnMut(&ExplorationTree, TreeIndex, &[u64]),
{
    if !graph.contains_node(root_id) {
        return None;
    }

    let mut tree = ExplorationTree::with_root(root_id);
    let mut frontier = Frontier::default();
    frontier.insert(0);

    while let Some(idx) = frontier.pop_any() {
        let node_id = tree.node_id_at(idx);
        let adjacent = graph.get_adj(node_id);
        on_expand(&tree, idx, &adjacent);

        for next in adjacent {
            if !tree.contains(next) {
                let child = tree.attach(idx, next);
                frontier.insert(child);
            }
        }
    }

    Some(tree)
}

/// Traversal algorithms available on every [`Graph`].
pub trait Explore: Graph {
    /// Explores everything reachable from `root_id`, expanding frontier
    /// records in arbitrary order.
    ///
    /// Reachability is deterministic; the branch shape is not.
    /// Returns `None` if `root_id` is not a live node.
    fn generic_search(&self, root_id: u64) -> Option<ExplorationTree> {
        let tree = explore(self, root_id, |_, _, _| {})?;
        debug!(root_id, visited = tree.len(), "generic search finished");
        Some(tree)
    }

    /// Breadth-first search. Returns node IDs in dequeue order.
    ///
    /// Returns `None` if `root_id` is not a live node.
    fn bfs(&self, root_id: u64) -> Option<Vec<u64>> {
        if !self.contains_node(root_id) {
            return None;
        }

        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(root_id);
        queue.push_back(root_id);

        while let Some(current) = queue.pop_front() {
            for next in self.get_adj(current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
            order.push(current);
        }

        debug!(root_id, visited = order.len(), "bfs finished");
        Some(order)
    }

    /// Depth-first search. Returns node IDs in pop order.
    ///
    /// Returns `None` if `root_id` is not a live node.
    fn dfs(&self, root_id: u64) -> Option<Vec<u64>> {
        if !self.contains_node(root_id) {
            return None;
        }

        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![root_id];

        visited.insert(root_id);

        while let Some(current) = stack.pop() {
            for next in self.get_adj(current) {
                if visited.insert(next) {
                    stack.push(next);
                }
            }
            order.push(current);
        }

        debug!(root_id, visited = order.len(), "dfs finished");
        Some(order)
    }
}

impl<G: Graph + ?Sized> Explore for G {}
