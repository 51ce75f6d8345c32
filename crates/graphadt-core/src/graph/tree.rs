//! Exploration trees produced by [`Explore::generic_search`](super::Explore::generic_search).
//!
//! The tree is an arena: records are addressed by [`TreeIndex`], each record
//! owns the indices of its children and keeps its parent index as a plain
//! lookup field. Index 0 is always the root.

use std::fmt;

use rustc_hash::FxHashMap;

/// Position of a record inside an [`ExplorationTree`].
pub type TreeIndex = usize;

/// One visited graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    node_id: u64,
    parent: Option<TreeIndex>,
    children: Vec<TreeIndex>,
    distance: usize,
}

impl TreeNode {
    /// The graph node this record stands for.
    #[must_use]
    pub fn node_id(&self) -> u64 {
        self.node_id
    }

    /// Index of the parent record (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<TreeIndex> {
        self.parent
    }

    /// Indices of the child records, in discovery order.
    #[must_use]
    pub fn children(&self) -> &[TreeIndex] {
        &self.children
    }

    /// Hops from the root along tree edges.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.distance
    }
}

/// Parent/child structure recording how a traversal reached each node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorationTree {
    nodes: Vec<TreeNode>,
    index: FxHashMap<u64, TreeIndex>,
}

impl ExplorationTree {
    pub(crate) fn with_root(root_id: u64) -> Self {
        let mut index = FxHashMap::default();
        index.insert(root_id, 0);
        Self {
            nodes: vec![TreeNode {
                node_id: root_id,
                parent: None,
                children: Vec::new(),
                distance: 0,
            }],
            index,
        }
    }

    /// Links a new record for `node_id` below `parent`.
    pub(crate) fn attach(&mut self, parent: TreeIndex, node_id: u64) -> TreeIndex {
        let idx = self.nodes.len();
        let distance = self.nodes[parent].distance + 1;
        self.nodes.push(TreeNode {
            node_id,
            parent: Some(parent),
            children: Vec::new(),
            distance,
        });
        self.nodes[parent].children.push(idx);
        self.index.insert(node_id, idx);
        idx
    }

    pub(crate) fn node_id_at(&self, idx: TreeIndex) -> u64 {
        self.nodes[idx].node_id
    }

    /// The root record.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// Number of visited nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets a record by index.
    #[must_use]
    pub fn node(&self, idx: TreeIndex) -> Option<&TreeNode> {
        self.nodes.get(idx)
    }

    /// Finds the record standing for `node_id`.
    #[must_use]
    pub fn index_of(&self, node_id: u64) -> Option<TreeIndex> {
        self.index.get(&node_id).copied()
    }

    /// Returns true if `node_id` was visited.
    #[must_use]
    pub fn contains(&self, node_id: u64) -> bool {
        self.index.contains_key(&node_id)
    }

    /// Child indices of `idx` (empty for an unknown index).
    #[must_use]
    pub fn children(&self, idx: TreeIndex) -> &[TreeIndex] {
        self.nodes
            .get(idx)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent index of `idx`.
    #[must_use]
    pub fn parent(&self, idx: TreeIndex) -> Option<TreeIndex> {
        self.nodes.get(idx).and_then(|n| n.parent)
    }

    /// Distance of `node_id` from the root, if visited.
    #[must_use]
    pub fn distance_of(&self, node_id: u64) -> Option<usize> {
        self.index_of(node_id).map(|idx| self.nodes[idx].distance)
    }

    /// Node IDs from `idx` up to and including the root.
    #[must_use]
    pub fn path_to_root(&self, idx: TreeIndex) -> Vec<u64> {
        let mut path = Vec::new();
        let mut current = self.nodes.get(idx);
        while let Some(node) = current {
            path.push(node.node_id);
            current = node.parent.map(|p| &self.nodes[p]);
        }
        path
    }

    /// Visited node IDs in discovery order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<u64> {
        self.nodes.iter().map(|n| n.node_id).collect()
    }

    /// Largest distance recorded in the tree.
    #[must_use]
    pub fn height(&self) -> usize {
        self.nodes.iter().map(|n| n.distance).max().unwrap_or(0)
    }

    /// Iterates over all records in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }
}

impl fmt::Display for ExplorationTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![0];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            writeln!(
                f,
                "{:indent$}{} (d={})",
                "",
                node.node_id,
                node.distance,
                indent = node.distance * 2
            )?;
            stack.extend(node.children.iter().rev());
        }
        Ok(())
    }
}
