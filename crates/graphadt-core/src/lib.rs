//! # GraphADT Core
//!
//! In-memory graph abstract data type with exploration algorithms.
//!
//! ## Features
//!
//! - **Graph contract**: integer node IDs that are never reused, directed
//!   edges with optional weights, explicit errors on invalid mutations
//! - **Two backings**: adjacency lists and an adjacency matrix behind one
//!   [`GraphStore`](graph::GraphStore)
//! - **Exploration**: generic search producing an exploration tree, BFS, DFS
//! - **Median census**: longest-path discovery from leaves and the median
//!   node(s) of those paths
//!
//! ## Quick Start
//!
//! ```rust
//! use graphadt_core::graph::{Explore, Graph, ListGraph};
//!
//! let mut graph = ListGraph::new();
//! let hub = graph.add_node("hub").id();
//! for name in ["x", "y", "z"] {
//!     let leaf = graph.add_node(name).id();
//!     graph.insert_undirected_edge(hub, leaf, None).unwrap();
//! }
//!
//! assert_eq!(graph.deg(hub), 3);
//! let tree = graph.generic_search(hub).unwrap();
//! assert_eq!(tree.len(), 4);
//! ```
//!
//! The crate is single-threaded: no traversal or census call tolerates the
//! graph being mutated while it runs.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{AdjacencyCheck, CensusConfig, GraphConfig, LoggingConfig, StorageBacking};
pub use error::{Error, Result};
