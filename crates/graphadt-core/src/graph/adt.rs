//! The graph abstract data type contract.
//!
//! Every traversal and census algorithm in this crate is written against
//! [`Graph`] alone, so any storage implementing these primitives gains
//! [`Explore`](super::Explore) and [`PathCensus`](super::PathCensus)
//! through blanket implementations.

use crate::error::{Error, Result};

use super::types::{Edge, Node};

/// Unified node/edge operation set.
///
/// Failure policy: mutations on a missing target return an [`Error`];
/// lookups return `None`. Degree queries on a missing node return 0.
pub trait Graph {
    /// Payload attached to each node.
    type Value;

    /// Returns the number of live nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the number of live edges.
    fn num_edges(&self) -> usize;

    /// Returns true iff the graph holds no node.
    fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }

    /// Adds a node carrying `value` under the next unused ID.
    fn add_node(&mut self, value: Self::Value) -> &Node<Self::Value>;

    /// Removes a node together with every edge entering or leaving it.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if `id` is absent; nothing changes.
    fn delete_node(&mut self, id: u64) -> Result<Node<Self::Value>>;

    /// Gets a node by ID.
    fn get_node(&self, id: u64) -> Option<&Node<Self::Value>>;

    /// Returns true if `id` is a live node.
    fn contains_node(&self, id: u64) -> bool {
        self.get_node(id).is_some()
    }

    /// Returns all nodes in ascending ID order.
    fn get_nodes(&self) -> Vec<&Node<Self::Value>>;

    /// Inserts the directed edge `tail -> head`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEdge` if an endpoint is missing and
    /// `Error::DuplicateEdge` if the edge already exists.
    fn insert_edge(&mut self, tail: u64, head: u64, weight: Option<f64>) -> Result<Edge>;

    /// Removes the directed edge `tail -> head`.
    ///
    /// # Errors
    ///
    /// Returns `Error::EdgeNotFound` if no such edge exists.
    fn delete_edge(&mut self, tail: u64, head: u64) -> Result<Edge>;

    /// Gets the edge `tail -> head`.
    fn get_edge(&self, tail: u64, head: u64) -> Option<Edge>;

    /// Returns all edges ordered by `(tail, head)`.
    fn get_edges(&self) -> Vec<Edge>;

    /// Adjacency predicate.
    ///
    /// Under the default [`AdjacencyCheck::NodesExist`](crate::config::AdjacencyCheck)
    /// this only checks that both IDs are live nodes; it does not look for an
    /// edge between them.
    fn is_adj(&self, tail: u64, head: u64) -> bool;

    /// Returns the heads of all edges leaving `id`, ascending.
    fn get_adj(&self, id: u64) -> Vec<u64>;

    /// Out-degree of `id` (the length of [`Graph::get_adj`]).
    fn deg(&self, id: u64) -> usize;

    /// In-degree of `id`.
    fn in_deg(&self, id: u64) -> usize;

    /// Out-degree plus in-degree.
    fn total_deg(&self, id: u64) -> usize {
        self.deg(id) + self.in_deg(id)
    }

    /// Inserts both `a -> b` and `b -> a`, or nothing.
    ///
    /// A self-loop (`a == b`) is inserted once and returned twice.
    fn insert_undirected_edge(&mut self, a: u64, b: u64, weight: Option<f64>) -> Result<(Edge, Edge)> {
        if !self.contains_node(a) || !self.contains_node(b) {
            return Err(Error::InvalidEdge { tail: a, head: b });
        }
        if self.get_edge(a, b).is_some() {
            return Err(Error::DuplicateEdge { tail: a, head: b });
        }
        if self.get_edge(b, a).is_some() {
            return Err(Error::DuplicateEdge { tail: b, head: a });
        }
        let forward = self.insert_edge(a, b, weight)?;
        if a == b {
            return Ok((forward, forward));
        }
        let backward = self.insert_edge(b, a, weight)?;
        Ok((forward, backward))
    }

    /// Removes whichever of `a -> b` and `b -> a` exist.
    ///
    /// Returns the number of directed edges removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::EdgeNotFound` if neither direction existed.
    fn delete_undirected_edge(&mut self, a: u64, b: u64) -> Result<usize> {
        let mut removed = usize::from(self.delete_edge(a, b).is_ok());
        if a != b {
            removed += usize::from(self.delete_edge(b, a).is_ok());
        }
        if removed == 0 {
            return Err(Error::EdgeNotFound { tail: a, head: b });
        }
        Ok(removed)
    }
}
