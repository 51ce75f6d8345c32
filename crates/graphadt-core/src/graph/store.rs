//! Concrete graph composing a [`NodeStore`] with an [`EdgeStore`].

use std::fmt;

use tracing::debug;

use crate::config::{AdjacencyCheck, GraphConfig};
use crate::error::{Error, Result};

use super::adt::Graph;
use super::edge_store::{AdjacencyList, EdgeStore};
use super::matrix::AdjacencyMatrix;
use super::node_store::NodeStore;
use super::types::{Edge, Node};

/// Graph backed by adjacency lists.
pub type ListGraph<V> = GraphStore<V, AdjacencyList>;

/// Graph backed by an adjacency matrix.
pub type MatrixGraph<V> = GraphStore<V, AdjacencyMatrix>;

/// In-memory graph: node payloads in a [`NodeStore`], edges in `E`.
///
/// Keeps the invariant that every stored edge references two live nodes.
///
/// # Example
///
/// ```rust
/// use graphadt_core::graph::{Graph, ListGraph};
///
/// let mut graph = ListGraph::new();
/// let a = graph.add_node("a").id();
/// let b = graph.add_node("b").id();
/// graph.insert_edge(a, b, Some(1.5)).unwrap();
///
/// assert_eq!(graph.get_adj(a), vec![b]);
/// assert!(graph.insert_edge(a, b, None).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GraphStore<V, E: EdgeStore = AdjacencyList> {
    nodes: NodeStore<V>,
    edges: E,
    adjacency: AdjacencyCheck,
}

impl<V, E: EdgeStore> Default for GraphStore<V, E> {
    fn default() -> Self {
        Self {
            nodes: NodeStore::new(),
            edges: E::default(),
            adjacency: AdjacencyCheck::default(),
        }
    }
}

impl<V, E: EdgeStore> GraphStore<V, E> {
    /// Creates an empty graph with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph using the given `is_adj` behaviour.
    #[must_use]
    pub fn with_adjacency_check(adjacency: AdjacencyCheck) -> Self {
        Self {
            adjacency,
            ..Self::default()
        }
    }

    /// Creates an empty graph honouring `config`.
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::with_adjacency_check(config.adjacency)
    }

    /// Returns the active `is_adj` behaviour.
    #[must_use]
    pub fn adjacency_check(&self) -> AdjacencyCheck {
        self.adjacency
    }

    /// Gets a mutable reference to a node by ID.
    pub fn get_node_mut(&mut self, id: u64) -> Option<&mut Node<V>> {
        self.nodes.get_mut(id)
    }

    /// Returns the underlying edge store.
    #[must_use]
    pub fn edge_store(&self) -> &E {
        &self.edges
    }

    /// Writes the [`Display`](fmt::Display) rendering to stdout.
    pub fn print(&self)
    where
        V: fmt::Debug,
    {
        print!("{self}");
    }
}

impl<V, E: EdgeStore> Graph for GraphStore<V, E> {
    type Value = V;

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn add_node(&mut self, value: V) -> &Node<V> {
        let id = self.nodes.next_id();
        self.edges.register_node(id);
        debug!(node_id = id, "node added");
        self.nodes.insert(value)
    }

    fn delete_node(&mut self, id: u64) -> Result<Node<V>> {
        let node = self.nodes.remove(id).ok_or(Error::NodeNotFound(id))?;
        let removed = self.edges.unregister_node(id);
        debug!(node_id = id, edges_removed = removed, "node deleted");
        Ok(node)
    }

    fn get_node(&self, id: u64) -> Option<&Node<V>> {
        self.nodes.get(id)
    }

    fn contains_node(&self, id: u64) -> bool {
        self.nodes.contains(id)
    }

    fn get_nodes(&self) -> Vec<&Node<V>> {
        self.nodes.nodes()
    }

    fn insert_edge(&mut self, tail: u64, head: u64, weight: Option<f64>) -> Result<Edge> {
        if !self.nodes.contains(tail) || !self.nodes.contains(head) {
            return Err(Error::InvalidEdge { tail, head });
        }
        if !self.edges.insert(tail, head, weight) {
            return Err(Error::DuplicateEdge { tail, head });
        }
        debug!(tail, head, ?weight, "edge inserted");
        Ok(Edge::new(tail, head, weight))
    }

    fn delete_edge(&mut self, tail: u64, head: u64) -> Result<Edge> {
        let edge = self
            .edges
            .remove(tail, head)
            .ok_or(Error::EdgeNotFound { tail, head })?;
        debug!(tail, head, "edge deleted");
        Ok(edge)
    }

    fn get_edge(&self, tail: u64, head: u64) -> Option<Edge> {
        self.edges.get(tail, head)
    }

    fn get_edges(&self) -> Vec<Edge> {
        self.edges.edges()
    }

    fn is_adj(&self, tail: u64, head: u64) -> bool {
        match self.adjacency {
            AdjacencyCheck::NodesExist => self.nodes.contains(tail) && self.nodes.contains(head),
            AdjacencyCheck::EdgeExists => self.edges.contains(tail, head),
        }
    }

    fn get_adj(&self, id: u64) -> Vec<u64> {
        self.edges.successors(id)
    }

    fn deg(&self, id: u64) -> usize {
        self.edges.out_degree(id)
    }

    fn in_deg(&self, id: u64) -> usize {
        self.edges.in_degree(id)
    }
}

impl<V: fmt::Debug, E: EdgeStore> fmt::Display for GraphStore<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes.nodes() {
            write!(f, "{}: {:?} -> [", node.id(), node.value())?;
            for (i, head) in self.edges.successors(node.id()).into_iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                match self.edges.get(node.id(), head).and_then(|e| e.weight()) {
                    Some(w) => write!(f, "{head} ({w})")?,
                    None => write!(f, "{head}")?,
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
