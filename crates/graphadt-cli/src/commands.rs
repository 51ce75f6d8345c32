//! Subcommand handlers.
//!
//! Each subcommand is implemented as a separate function; all of them write
//! to stdout and report missing nodes as errors.

use anyhow::Result;
use colored::Colorize;
use graphadt_core::graph::{EdgeStore, Explore, Graph, GraphStore, MedianOutcome, PathCensus};
use graphadt_core::{AdjacencyCheck, CensusConfig, Error, GraphConfig};

type CliGraph<E> = GraphStore<String, E>;

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_median(outcome: &MedianOutcome) -> String {
    match *outcome {
        MedianOutcome::NoMedian => "none".to_string(),
        MedianOutcome::Single { node, weight } => format!("{node} (weight {weight})"),
        MedianOutcome::Tied {
            first,
            second,
            weight,
        } => format!("{first} and {second} tied (weight {weight})"),
    }
}

pub fn cmd_print<E: EdgeStore>(graph: &CliGraph<E>) -> Result<()> {
    if graph.is_empty() {
        println!("{}", "Graph is empty.".dimmed());
    } else {
        graph.print();
    }
    Ok(())
}

pub fn cmd_stats<E: EdgeStore>(graph: &CliGraph<E>) -> Result<()> {
    println!("{}", "Graph:".bold());
    println!("  nodes: {}", graph.num_nodes());
    println!("  edges: {}", graph.num_edges());
    for node in graph.get_nodes() {
        let id = node.id();
        println!(
            "  {}: out {} / in {}",
            id.to_string().cyan(),
            graph.deg(id),
            graph.in_deg(id)
        );
    }
    Ok(())
}

pub fn cmd_adj<E: EdgeStore>(graph: &CliGraph<E>, tail: u64, head: u64) -> Result<()> {
    let mode = match graph.adjacency_check() {
        AdjacencyCheck::NodesExist => "nodes_exist",
        AdjacencyCheck::EdgeExists => "edge_exists",
    };
    println!(
        "{} {} -> {}: {} ({})",
        "adjacent:".bold(),
        tail,
        head,
        graph.is_adj(tail, head),
        mode.dimmed()
    );
    Ok(())
}

pub fn cmd_bfs<E: EdgeStore>(graph: &CliGraph<E>, root: u64) -> Result<()> {
    let order = graph.bfs(root).ok_or(Error::NodeNotFound(root))?;
    println!("{} {}", "bfs:".bold(), join_ids(&order));
    Ok(())
}

pub fn cmd_dfs<E: EdgeStore>(graph: &CliGraph<E>, root: u64) -> Result<()> {
    let order = graph.dfs(root).ok_or(Error::NodeNotFound(root))?;
    println!("{} {}", "dfs:".bold(), join_ids(&order));
    Ok(())
}

pub fn cmd_search<E: EdgeStore>(graph: &CliGraph<E>, root: u64) -> Result<()> {
    let tree = graph.generic_search(root).ok_or(Error::NodeNotFound(root))?;
    println!(
        "{} {} nodes, height {}",
        "Exploration tree:".bold(),
        tree.len(),
        tree.height()
    );
    print!("{tree}");
    Ok(())
}

pub fn cmd_leaf<E: EdgeStore>(graph: &CliGraph<E>, root: u64) -> Result<()> {
    let walk = graph.leaf_distance(root).ok_or(Error::NodeNotFound(root))?;
    match walk.leaf {
        Some(leaf) => {
            println!("{} {}", "leaf:".bold(), leaf);
            println!("{} {}", "distance:".bold(), walk.distance);
            println!("{} {}", "path:".bold(), join_ids(&walk.path));
        }
        None => println!("{}", "No leaf reachable.".yellow()),
    }
    println!("{} {}", "visited:".bold(), walk.visited.len());
    Ok(())
}

pub fn cmd_median<E: EdgeStore>(graph: &mut CliGraph<E>, root: u64) -> Result<()> {
    let walk = graph.medium_node(root).ok_or(Error::NodeNotFound(root))?;
    if walk.path.is_empty() {
        println!("{}", "No leaf-to-leaf path found.".yellow());
        return Ok(());
    }
    println!("{} {}", "path:".bold(), join_ids(&walk.path));
    println!("{} {}", "length:".bold(), walk.length);
    let outcome = graph.median_of_path(&walk.path);
    println!("{} {}", "median:".bold(), describe_median(&outcome));
    Ok(())
}

pub fn cmd_census<E: EdgeStore>(graph: &mut CliGraph<E>, config: &CensusConfig) -> Result<()> {
    match graph.census(config) {
        Some(result) => {
            println!("{} {}", "median:".bold(), describe_median(&result.median));
            println!("{} {}", "rounds:".bold(), result.rounds);
        }
        None => println!("{}", "No median found.".yellow()),
    }
    Ok(())
}

pub fn cmd_config(config: &GraphConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
