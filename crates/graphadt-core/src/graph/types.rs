//! Node and edge records exchanged through the graph contract.

use std::fmt;

/// A graph node: an integer ID assigned by the graph plus an arbitrary payload.
///
/// # Example
///
/// ```rust
/// use graphadt_core::graph::{Graph, ListGraph};
///
/// let mut graph = ListGraph::new();
/// let id = graph.add_node("Alice").id();
/// assert_eq!(graph.get_node(id).unwrap().value(), &"Alice");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node<V> {
    id: u64,
    value: V,
}

impl<V> Node<V> {
    pub(crate) fn new(id: u64, value: V) -> Self {
        Self { id, value }
    }

    /// Returns the node ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the attached value.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the attached value.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the node, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }
}

/// A directed edge identified by its `(tail, head)` pair.
///
/// The weight is optional; an absent weight is distinct from `Some(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    tail: u64,
    head: u64,
    weight: Option<f64>,
}

impl Edge {
    /// Creates an edge record.
    #[must_use]
    pub fn new(tail: u64, head: u64, weight: Option<f64>) -> Self {
        Self { tail, head, weight }
    }

    /// Returns the tail (source) node ID.
    #[must_use]
    pub fn tail(&self) -> u64 {
        self.tail
    }

    /// Returns the head (target) node ID.
    #[must_use]
    pub fn head(&self) -> u64 {
        self.head
    }

    /// Returns the optional weight.
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Returns true if `node_id` is either endpoint.
    #[must_use]
    pub fn touches(&self, node_id: u64) -> bool {
        self.tail == node_id || self.head == node_id
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} -> {} ({})", self.tail, self.head, w),
            None => write!(f, "{} -> {}", self.tail, self.head),
        }
    }
}
