//! Tests for generic search, BFS and DFS.

use std::collections::HashSet;

use super::adt::Graph;
use super::census::PathCensus;
use super::edge_store::EdgeStore;
use super::store::{GraphStore, ListGraph, MatrixGraph};
use super::traversal::{Explore, Frontier};

/// Undirected line 0 - 1 - ... - (n-1).
fn line<E: EdgeStore>(n: u64) -> GraphStore<u64, E> {
    let mut graph = GraphStore::new();
    for i in 0..n {
        graph.add_node(i);
    }
    for i in 1..n {
        graph.insert_undirected_edge(i - 1, i, None).unwrap();
    }
    graph
}

/// Directed triangle 0 -> 1 -> 2 -> 0 plus an unreachable node 3.
fn cycle_with_island() -> ListGraph<()> {
    let mut graph = ListGraph::new();
    for _ in 0..4 {
        graph.add_node(());
    }
    graph.insert_edge(0, 1, None).unwrap();
    graph.insert_edge(1, 2, None).unwrap();
    graph.insert_edge(2, 0, None).unwrap();
    graph
}

#[test]
fn test_bfs_on_line() {
    let graph: ListGraph<u64> = line(5);
    assert_eq!(graph.bfs(0), Some(vec![0, 1, 2, 3, 4]));
    assert_eq!(graph.bfs(4), Some(vec![4, 3, 2, 1, 0]));
}

#[test]
fn test_dfs_on_line() {
    let graph: MatrixGraph<u64> = line(5);
    assert_eq!(graph.dfs(0), Some(vec![0, 1, 2, 3, 4]));
}

#[test]
fn test_bfs_visits_by_level() {
    // 0 -> {1, 2}, 1 -> 3, 2 -> 4
    let mut graph: ListGraph<()> = ListGraph::new();
    for _ in 0..5 {
        graph.add_node(());
    }
    for (t, h) in [(0, 1), (0, 2), (1, 3), (2, 4)] {
        graph.insert_edge(t, h, None).unwrap();
    }
    assert_eq!(graph.bfs(0), Some(vec![0, 1, 2, 3, 4]));
    // Stack pops the highest successor first.
    assert_eq!(graph.dfs(0), Some(vec![0, 2, 4, 1, 3]));
}

#[test]
fn test_missing_root_returns_none() {
    let graph: ListGraph<u64> = line(3);
    assert!(graph.bfs(9).is_none());
    assert!(graph.dfs(9).is_none());
    assert!(graph.generic_search(9).is_none());
}

#[test]
fn test_isolated_root() {
    let mut graph: ListGraph<()> = ListGraph::new();
    let id = graph.add_node(()).id();
    assert_eq!(graph.bfs(id), Some(vec![id]));
    assert_eq!(graph.dfs(id), Some(vec![id]));
    let tree = graph.generic_search(id).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_cycles_terminate_without_duplicates() {
    let graph = cycle_with_island();
    for order in [graph.bfs(1).unwrap(), graph.dfs(1).unwrap()] {
        let unique: HashSet<u64> = order.iter().copied().collect();
        assert_eq!(order.len(), 3);
        assert_eq!(unique.len(), 3);
        assert!(!unique.contains(&3));
    }
    let tree = graph.generic_search(1).unwrap();
    assert_eq!(tree.len(), 3);
    assert!(!tree.contains(3));
}

#[test]
fn test_generic_search_on_line() {
    let graph: ListGraph<u64> = line(5);
    let tree = graph.generic_search(0).unwrap();

    assert_eq!(tree.root().node_id(), 0);
    assert_eq!(tree.len(), 5);
    // A line has only one spanning tree.
    for id in 0..5 {
        assert_eq!(tree.distance_of(id), Some(id as usize));
    }
    assert_eq!(tree.height(), 4);
}

#[test]
fn test_generic_search_tree_is_consistent() {
    // Two parallel routes 0 -> 1 -> 3 and 0 -> 2 -> 3, then 3 -> 4.
    let mut graph: MatrixGraph<()> = MatrixGraph::new();
    for _ in 0..5 {
        graph.add_node(());
    }
    for (t, h) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
        graph.insert_edge(t, h, None).unwrap();
    }

    let tree = graph.generic_search(0).unwrap();
    assert_eq!(tree.len(), 5);

    for node in tree.iter() {
        match node.parent() {
            None => assert_eq!(node.node_id(), 0),
            Some(parent_idx) => {
                let parent = tree.node(parent_idx).unwrap();
                assert_eq!(node.distance(), parent.distance() + 1);
                assert!(graph.get_edge(parent.node_id(), node.node_id()).is_some());
                assert!(parent.children().iter().any(|&c| tree.node(c) == Some(node)));
            }
        }
    }
    assert_eq!(tree.distance_of(3), Some(2));
    assert_eq!(tree.distance_of(4), Some(3));
}

#[test]
fn test_traversals_agree_on_reachable_set() {
    let graph = cycle_with_island();
    for root in 0..4 {
        let bfs: HashSet<u64> = graph.bfs(root).unwrap().into_iter().collect();
        let dfs: HashSet<u64> = graph.dfs(root).unwrap().into_iter().collect();
        let tree: HashSet<u64> = graph.generic_search(root).unwrap().node_ids().into_iter().collect();
        assert_eq!(bfs, dfs);
        assert_eq!(bfs, tree);
    }
}

#[test]
fn test_traversal_does_not_mutate() {
    let graph: ListGraph<u64> = line(4);
    let before = graph.get_edges();
    let _ = graph.bfs(0);
    let _ = graph.dfs(0);
    let _ = graph.generic_search(0);
    assert_eq!(graph.get_edges(), before);
    assert_eq!(graph.num_nodes(), 4);
}

#[test]
fn test_frontier_drains_every_record_once() {
    let mut frontier = Frontier::default();
    for idx in 0..1_000 {
        frontier.insert(idx);
    }
    let mut seen = HashSet::new();
    while let Some(idx) = frontier.pop_any() {
        assert!(seen.insert(idx), "record {idx} popped twice");
    }
    assert_eq!(seen.len(), 1_000);
    assert!(frontier.pop_any().is_none());
}

#[test]
fn test_generic_search_on_large_star() {
    // Wide frontiers must stay cheap: every pop is constant time.
    const LEAVES: u64 = 100_000;
    let mut graph: ListGraph<()> = ListGraph::new();
    let hub = graph.add_node(()).id();
    for _ in 0..LEAVES {
        let leaf = graph.add_node(()).id();
        graph.insert_edge(hub, leaf, None).unwrap();
    }

    let tree = graph.generic_search(hub).unwrap();
    assert_eq!(tree.len() as u64, LEAVES + 1);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.children(0).len() as u64, LEAVES);
    assert_eq!(graph.subtree_size(hub), Some(LEAVES as usize));
}
