//! In-memory graph ADT with exploration and median census algorithms.
//!
//! Provides the [`Graph`] contract, two storage backings composed behind
//! [`GraphStore`], and the [`Explore`] / [`PathCensus`] extension traits
//! that every `Graph` gains automatically.
//!
//! # Example
//!
//! ```rust
//! use graphadt_core::graph::{Explore, Graph, ListGraph, MedianOutcome, PathCensus};
//!
//! // 0 - 1 - 2 - 3 - 4
//! let mut graph = ListGraph::new();
//! for name in ["a", "b", "c", "d", "e"] {
//!     graph.add_node(name);
//! }
//! for i in 0..4 {
//!     graph.insert_undirected_edge(i, i + 1, None).unwrap();
//! }
//!
//! assert_eq!(graph.bfs(0), Some(vec![0, 1, 2, 3, 4]));
//!
//! let walk = graph.medium_node(0).unwrap();
//! assert_eq!(walk.length, 4);
//! assert_eq!(
//!     graph.median_of_path(&walk.path),
//!     MedianOutcome::Single { node: 2, weight: 2 }
//! );
//! ```

mod adt;
pub mod census;
mod edge_store;
mod matrix;
mod node_store;
mod store;
pub mod traversal;
mod tree;
mod types;

#[cfg(test)]
mod store_tests;
#[cfg(test)]
mod traversal_tests;

pub use adt::Graph;
pub use census::{CensusResult, DiameterPath, LeafDistance, MedianOutcome, PathCensus};
pub use edge_store::{AdjacencyList, EdgeStore};
pub use matrix::AdjacencyMatrix;
pub use node_store::NodeStore;
pub use store::{GraphStore, ListGraph, MatrixGraph};
pub use traversal::Explore;
pub use tree::{ExplorationTree, TreeIndex, TreeNode};
pub use types::{Edge, Node};
