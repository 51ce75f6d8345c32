//! Node storage with monotonically increasing IDs.

use rustc_hash::FxHashMap;

use super::types::Node;

/// Nodes keyed by ID.
///
/// IDs come from a counter that only moves forward, so an ID freed by
/// [`NodeStore::remove`] is never handed out again.
#[derive(Debug, Clone)]
pub struct NodeStore<V> {
    nodes: FxHashMap<u64, Node<V>>,
    next_id: u64,
}

impl<V> Default for NodeStore<V> {
    fn default() -> Self {
        Self {
            nodes: FxHashMap::default(),
            next_id: 0,
        }
    }
}

impl<V> NodeStore<V> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under the next ID.
    pub fn insert(&mut self, value: V) -> &Node<V> {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.entry(id).or_insert(Node::new(id, value))
    }

    /// Gets a node by ID.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Node<V>> {
        self.nodes.get(&id)
    }

    /// Gets a mutable reference to a node by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Node<V>> {
        self.nodes.get_mut(&id)
    }

    /// Removes a node, returning it if it was present.
    pub fn remove(&mut self, id: u64) -> Option<Node<V>> {
        self.nodes.remove(&id)
    }

    /// Returns true if a node with the given ID exists.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the ID the next insertion will receive.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns all live IDs in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns all nodes in ascending ID order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&Node<V>> {
        let mut nodes: Vec<&Node<V>> = self.nodes.values().collect();
        nodes.sort_unstable_by_key(|n| n.id());
        nodes
    }
}
