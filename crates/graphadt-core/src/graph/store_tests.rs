//! Tests for GraphStore against the Graph contract, on both backings.

use super::adt::Graph;
use super::edge_store::EdgeStore;
use super::store::{GraphStore, ListGraph, MatrixGraph};
use super::types::Edge;
use crate::config::{AdjacencyCheck, GraphConfig};
use crate::error::Error;

/// Star: node 0 linked both ways to 1, 2 and 3.
fn star<E: EdgeStore>() -> GraphStore<&'static str, E> {
    let mut graph = GraphStore::new();
    for name in ["hub", "a", "b", "c"] {
        graph.add_node(name);
    }
    for leaf in 1..=3 {
        graph.insert_undirected_edge(0, leaf, None).unwrap();
    }
    graph
}

fn check_add_and_get<E: EdgeStore>() {
    let mut graph: GraphStore<String, E> = GraphStore::new();
    assert!(graph.is_empty());

    let id = graph.add_node("alpha".to_string()).id();
    assert_eq!(id, 0);
    assert_eq!(graph.get_node(id).unwrap().value(), "alpha");
    assert_eq!(graph.num_nodes(), 1);
    assert!(!graph.is_empty());
    assert!(graph.get_node(99).is_none());
}

fn check_ids_not_reused<E: EdgeStore>() {
    let mut graph: GraphStore<u32, E> = GraphStore::new();
    let a = graph.add_node(1).id();
    let b = graph.add_node(2).id();
    graph.delete_node(b).unwrap();
    let c = graph.add_node(3).id();

    assert_eq!((a, b, c), (0, 1, 2));
    assert!(graph.get_node(b).is_none());
    let ids: Vec<u64> = graph.get_nodes().iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec![0, 2]);
}

fn check_delete_missing_node<E: EdgeStore>() {
    let mut graph: GraphStore<u32, E> = GraphStore::new();
    graph.add_node(1);
    let err = graph.delete_node(5).unwrap_err();
    assert!(matches!(err, Error::NodeNotFound(5)));
    assert_eq!(graph.num_nodes(), 1);
}

fn check_edge_errors<E: EdgeStore>() {
    let mut graph: GraphStore<u32, E> = GraphStore::new();
    let a = graph.add_node(1).id();
    let b = graph.add_node(2).id();

    assert!(matches!(
        graph.insert_edge(a, 42, None),
        Err(Error::InvalidEdge { tail: 0, head: 42 })
    ));
    graph.insert_edge(a, b, None).unwrap();
    assert!(matches!(
        graph.insert_edge(a, b, Some(3.0)),
        Err(Error::DuplicateEdge { .. })
    ));
    assert!(matches!(
        graph.delete_edge(b, a),
        Err(Error::EdgeNotFound { tail: 1, head: 0 })
    ));
    assert_eq!(graph.num_edges(), 1);
}

fn check_delete_node_cascades<E: EdgeStore>() {
    let mut graph: GraphStore<&str, E> = star();
    assert_eq!(graph.num_edges(), 6);

    let removed = graph.delete_node(0).unwrap();
    assert_eq!(*removed.value(), "hub");
    assert_eq!(graph.num_edges(), 0);
    for leaf in 1..=3 {
        assert!(graph.get_adj(leaf).is_empty());
        assert_eq!(graph.in_deg(leaf), 0);
    }
    assert!(graph
        .get_edges()
        .iter()
        .all(|e| graph.contains_node(e.tail()) && graph.contains_node(e.head())));
}

fn check_star_queries<E: EdgeStore>() {
    let graph: GraphStore<&str, E> = star();
    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.num_edges(), 6);
    assert_eq!(graph.deg(0), 3);
    assert_eq!(graph.deg(1), 1);
    assert_eq!(graph.in_deg(0), 3);
    assert_eq!(graph.total_deg(0), 6);
    assert_eq!(graph.get_adj(0), vec![1, 2, 3]);
    assert!(graph.is_adj(0, 1));
    assert!(!graph.is_adj(0, 9));
    // Existence-only check: leaves share no edge but are still "adjacent".
    assert!(graph.is_adj(1, 2));
    assert_eq!(graph.deg(99), 0);
    assert!(graph.get_adj(99).is_empty());
}

fn check_edge_exists_mode<E: EdgeStore>() {
    let mut graph: GraphStore<u32, E> = GraphStore::with_adjacency_check(AdjacencyCheck::EdgeExists);
    let a = graph.add_node(1).id();
    let b = graph.add_node(2).id();
    let c = graph.add_node(3).id();
    graph.insert_edge(a, b, None).unwrap();

    assert!(graph.is_adj(a, b));
    assert!(!graph.is_adj(b, a));
    assert!(!graph.is_adj(a, c));
}

fn check_queries_are_idempotent<E: EdgeStore>() {
    let graph: GraphStore<&str, E> = star();
    let edges = graph.get_edges();
    let adj = graph.get_adj(0);
    let deg = graph.deg(0);
    for _ in 0..3 {
        assert_eq!(graph.get_edges(), edges);
        assert_eq!(graph.get_adj(0), adj);
        assert_eq!(graph.deg(0), deg);
        assert!(graph.is_adj(0, 2));
    }
}

fn check_weights<E: EdgeStore>() {
    let mut graph: GraphStore<u32, E> = GraphStore::new();
    let a = graph.add_node(1).id();
    let b = graph.add_node(2).id();
    graph.insert_edge(a, b, Some(0.0)).unwrap();
    graph.insert_edge(b, a, None).unwrap();

    assert_eq!(graph.get_edge(a, b).unwrap().weight(), Some(0.0));
    assert_eq!(graph.get_edge(b, a).unwrap().weight(), None);
}

fn check_undirected_helpers<E: EdgeStore>() {
    let mut graph: GraphStore<u32, E> = GraphStore::new();
    let a = graph.add_node(1).id();
    let b = graph.add_node(2).id();

    let (forward, backward) = graph.insert_undirected_edge(a, b, Some(2.0)).unwrap();
    assert_eq!(forward, Edge::new(a, b, Some(2.0)));
    assert_eq!(backward, Edge::new(b, a, Some(2.0)));

    // Either direction already present blocks the pair.
    assert!(matches!(
        graph.insert_undirected_edge(b, a, None),
        Err(Error::DuplicateEdge { .. })
    ));
    assert_eq!(graph.num_edges(), 2);

    graph.delete_edge(b, a).unwrap();
    assert_eq!(graph.delete_undirected_edge(a, b).unwrap(), 1);
    assert!(matches!(
        graph.delete_undirected_edge(a, b),
        Err(Error::EdgeNotFound { .. })
    ));
}

fn check_undirected_self_loop<E: EdgeStore>() {
    let mut graph: GraphStore<u32, E> = GraphStore::new();
    let a = graph.add_node(1).id();
    let (forward, backward) = graph.insert_undirected_edge(a, a, None).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.delete_undirected_edge(a, a).unwrap(), 1);
}

#[test]
fn test_list_add_and_get() {
    check_add_and_get::<super::AdjacencyList>();
}

#[test]
fn test_matrix_add_and_get() {
    check_add_and_get::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_ids_not_reused() {
    check_ids_not_reused::<super::AdjacencyList>();
}

#[test]
fn test_matrix_ids_not_reused() {
    check_ids_not_reused::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_delete_missing_node() {
    check_delete_missing_node::<super::AdjacencyList>();
}

#[test]
fn test_matrix_delete_missing_node() {
    check_delete_missing_node::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_edge_errors() {
    check_edge_errors::<super::AdjacencyList>();
}

#[test]
fn test_matrix_edge_errors() {
    check_edge_errors::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_delete_node_cascades() {
    check_delete_node_cascades::<super::AdjacencyList>();
}

#[test]
fn test_matrix_delete_node_cascades() {
    check_delete_node_cascades::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_star_queries() {
    check_star_queries::<super::AdjacencyList>();
}

#[test]
fn test_matrix_star_queries() {
    check_star_queries::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_edge_exists_mode() {
    check_edge_exists_mode::<super::AdjacencyList>();
}

#[test]
fn test_matrix_edge_exists_mode() {
    check_edge_exists_mode::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_queries_are_idempotent() {
    check_queries_are_idempotent::<super::AdjacencyList>();
}

#[test]
fn test_matrix_queries_are_idempotent() {
    check_queries_are_idempotent::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_weights() {
    check_weights::<super::AdjacencyList>();
}

#[test]
fn test_matrix_weights() {
    check_weights::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_undirected_helpers() {
    check_undirected_helpers::<super::AdjacencyList>();
}

#[test]
fn test_matrix_undirected_helpers() {
    check_undirected_helpers::<super::AdjacencyMatrix>();
}

#[test]
fn test_list_undirected_self_loop() {
    check_undirected_self_loop::<super::AdjacencyList>();
}

#[test]
fn test_matrix_undirected_self_loop() {
    check_undirected_self_loop::<super::AdjacencyMatrix>();
}

#[test]
fn test_from_config_uses_adjacency_check() {
    let config = GraphConfig {
        adjacency: AdjacencyCheck::EdgeExists,
        ..GraphConfig::default()
    };
    let graph: ListGraph<u8> = GraphStore::from_config(&config);
    assert_eq!(graph.adjacency_check(), AdjacencyCheck::EdgeExists);
}

#[test]
fn test_get_node_mut_updates_value() {
    let mut graph: MatrixGraph<u32> = GraphStore::new();
    let id = graph.add_node(1).id();
    *graph.get_node_mut(id).unwrap().value_mut() = 7;
    assert_eq!(*graph.get_node(id).unwrap().value(), 7);
}

#[test]
fn test_display_lists_nodes_and_edges() {
    let mut graph: ListGraph<&str> = GraphStore::new();
    graph.add_node("a");
    graph.add_node("b");
    graph.add_node("c");
    graph.insert_edge(0, 1, None).unwrap();
    graph.insert_edge(0, 2, Some(2.5)).unwrap();

    let rendered = graph.to_string();
    assert_eq!(rendered, "0: \"a\" -> [1, 2 (2.5)]\n1: \"b\" -> []\n2: \"c\" -> []\n");
}

#[test]
fn test_backings_agree() {
    let list: ListGraph<&str> = star();
    let matrix: MatrixGraph<&str> = star();
    assert_eq!(list.get_edges(), matrix.get_edges());
    assert_eq!(list.to_string(), matrix.to_string());
}

#[test]
fn test_node_store_ids_skip_deleted() {
    let mut store = super::NodeStore::new();
    for value in ["a", "b", "c"] {
        store.insert(value);
    }
    store.remove(1);
    assert_eq!(store.ids(), vec![0, 2]);
    assert_eq!(store.next_id(), 3);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_edge_store_view_matches_graph() {
    let graph: MatrixGraph<&str> = star();
    assert_eq!(graph.edge_store().len(), graph.num_edges());
    assert!(graph.edge_store().dimension() >= graph.num_nodes());
}
