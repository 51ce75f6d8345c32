//! Edge storage backings.
//!
//! [`EdgeStore`] is the storage half a [`GraphStore`](super::GraphStore)
//! composes with its node store. Endpoint validation happens in the graph;
//! stores only keep their indices consistent. [`AdjacencyList`] is the
//! default, [`AdjacencyMatrix`](super::matrix::AdjacencyMatrix) the dense
//! alternative.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;

use super::types::Edge;

/// Storage contract for directed edges keyed by `(tail, head)`.
pub trait EdgeStore: Default {
    /// Prepares storage for a newly created node.
    fn register_node(&mut self, node_id: u64);

    /// Drops every edge incident to `node_id` and forgets the node.
    ///
    /// Returns the number of edges removed.
    fn unregister_node(&mut self, node_id: u64) -> usize;

    /// Inserts `tail -> head`. Returns false, leaving the store untouched,
    /// if the edge already exists.
    fn insert(&mut self, tail: u64, head: u64, weight: Option<f64>) -> bool;

    /// Removes `tail -> head`, returning it if present.
    fn remove(&mut self, tail: u64, head: u64) -> Option<Edge>;

    /// Gets the edge `tail -> head`.
    fn get(&self, tail: u64, head: u64) -> Option<Edge>;

    /// Returns true if `tail -> head` exists.
    fn contains(&self, tail: u64, head: u64) -> bool {
        self.get(tail, head).is_some()
    }

    /// Returns all edges ordered by `(tail, head)`.
    fn edges(&self) -> Vec<Edge>;

    /// Returns the heads of all edges leaving `node_id`, ascending.
    fn successors(&self, node_id: u64) -> Vec<u64>;

    /// Returns the number of edges leaving `node_id`.
    fn out_degree(&self, node_id: u64) -> usize;

    /// Returns the number of edges entering `node_id`.
    fn in_degree(&self, node_id: u64) -> usize;

    /// Returns the total number of edges.
    fn len(&self) -> usize;

    /// Returns true if no edge is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Adjacency-list edge storage with bidirectional indexing.
///
/// O(log degree) access to a single edge and O(degree) access to the
/// successors of a node. The incoming index keeps cascade deletes and
/// in-degree queries proportional to the node's degree.
#[derive(Debug, Default, Clone)]
pub struct AdjacencyList {
    /// Outgoing edges: tail -> (head -> weight).
    outgoing: FxHashMap<u64, BTreeMap<u64, Option<f64>>>,
    /// Incoming edges: head -> tails.
    incoming: FxHashMap<u64, BTreeSet<u64>>,
    edge_count: usize,
}

impl AdjacencyList {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EdgeStore for AdjacencyList {
    fn register_node(&mut self, node_id: u64) {
        self.outgoing.entry(node_id).or_default();
        self.incoming.entry(node_id).or_default();
    }

    fn unregister_node(&mut self, node_id: u64) -> usize {
        let heads = self.outgoing.remove(&node_id).unwrap_or_default();
        let tails = self.incoming.remove(&node_id).unwrap_or_default();
        let mut removed = 0;

        for head in heads.keys() {
            if let Some(ids) = self.incoming.get_mut(head) {
                ids.remove(&node_id);
            }
            removed += 1;
        }

        for tail in tails {
            // A self-loop was already counted through the outgoing map.
            if tail == node_id {
                continue;
            }
            if let Some(row) = self.outgoing.get_mut(&tail) {
                if row.remove(&node_id).is_some() {
                    removed += 1;
                }
            }
        }

        self.edge_count -= removed;
        removed
    }

    fn insert(&mut self, tail: u64, head: u64, weight: Option<f64>) -> bool {
        let row = self.outgoing.entry(tail).or_default();
        if row.contains_key(&head) {
            return false;
        }
        row.insert(head, weight);
        self.incoming.entry(head).or_default().insert(tail);
        self.edge_count += 1;
        true
    }

    fn remove(&mut self, tail: u64, head: u64) -> Option<Edge> {
        let weight = self.outgoing.get_mut(&tail)?.remove(&head)?;
        if let Some(tails) = self.incoming.get_mut(&head) {
            tails.remove(&tail);
        }
        self.edge_count -= 1;
        Some(Edge::new(tail, head, weight))
    }

    fn get(&self, tail: u64, head: u64) -> Option<Edge> {
        self.outgoing
            .get(&tail)
            .and_then(|row| row.get(&head))
            .map(|&weight| Edge::new(tail, head, weight))
    }

    fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .outgoing
            .iter()
            .flat_map(|(&tail, row)| {
                row.iter()
                    .map(move |(&head, &weight)| Edge::new(tail, head, weight))
            })
            .collect();
        edges.sort_unstable_by_key(|e| (e.tail(), e.head()));
        edges
    }

    fn successors(&self, node_id: u64) -> Vec<u64> {
        self.outgoing
            .get(&node_id)
            .map(|row| row.keys().copied().collect())
            .unwrap_or_default()
    }

    fn out_degree(&self, node_id: u64) -> usize {
        self.outgoing.get(&node_id).map_or(0, BTreeMap::len)
    }

    fn in_degree(&self, node_id: u64) -> usize {
        self.incoming.get(&node_id).map_or(0, BTreeSet::len)
    }

    fn len(&self) -> usize {
        self.edge_count
    }
}
