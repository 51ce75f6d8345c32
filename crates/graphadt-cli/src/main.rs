#![allow(clippy::doc_markdown)]
//! GraphADT CLI - build a graph from the command line and explore it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use graphadt_core::graph::{AdjacencyList, AdjacencyMatrix, EdgeStore, Graph, GraphStore};
use graphadt_core::{GraphConfig, StorageBacking};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod edges;
#[cfg(test)]
mod edges_tests;

use edges::{parse_edge, EdgeSpec};

/// Upper bound for `--nodes`.
const MAX_NODES: u64 = 1_000_000;

/// GraphADT - explore small graphs and find their longest-path medians
#[derive(Parser, Debug)]
#[command(name = "graphadt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  graphadt -n 5 -e 0-1,1-2,2-3,3-4 -u bfs
  graphadt -n 4 -e 0-1,1-2:2.5,2-3 -u --backing matrix print
  graphadt -n 5 -e 0-1,1-2,2-3,3-4 -u census --seed 7")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "GRAPHADT_CONFIG")]
    config: Option<PathBuf>,

    /// Number of nodes to create; IDs run from 0 to N-1
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 0,
        value_parser = clap::value_parser!(u64).range(..=MAX_NODES)
    )]
    nodes: u64,

    /// Comma-separated edges: TAIL-HEAD[:WEIGHT]
    #[arg(short, long, global = true, value_delimiter = ',', value_parser = parse_edge)]
    edges: Vec<EdgeSpec>,

    /// Insert every edge in both directions
    #[arg(short, long, global = true)]
    undirected: bool,

    /// Edge storage (overrides the configuration file)
    #[arg(long, global = true, value_enum)]
    backing: Option<Backing>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every node with its outgoing edges
    Print,

    /// Print node, edge and degree counts
    Stats,

    /// Evaluate the adjacency predicate for a node pair
    Adj {
        /// Tail node
        #[arg(short, long)]
        tail: u64,

        /// Head node
        #[arg(long)]
        head: u64,
    },

    /// Breadth-first search
    Bfs {
        /// Start node
        #[arg(short, long, default_value_t = 0)]
        root: u64,
    },

    /// Depth-first search
    Dfs {
        /// Start node
        #[arg(short, long, default_value_t = 0)]
        root: u64,
    },

    /// Generic search; prints the exploration tree
    Search {
        /// Start node
        #[arg(short, long, default_value_t = 0)]
        root: u64,
    },

    /// Farthest leaf reachable from a node
    Leaf {
        /// Start node
        #[arg(short, long, default_value_t = 0)]
        root: u64,
    },

    /// Longest leaf-to-leaf path found from a node, and its median
    Median {
        /// Start node
        #[arg(short, long, default_value_t = 0)]
        root: u64,
    },

    /// Median census over the whole graph
    Census {
        /// Seed for the candidate picker (overrides the configuration file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backing {
    List,
    Matrix,
}

impl From<Backing> for StorageBacking {
    fn from(backing: Backing) -> Self {
        match backing {
            Backing::List => StorageBacking::List,
            Backing::Matrix => StorageBacking::Matrix,
        }
    }
}

fn init_tracing(config: &GraphConfig, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_graph<E: EdgeStore>(cli: &Cli, config: &GraphConfig) -> Result<GraphStore<String, E>> {
    let mut graph = GraphStore::from_config(config);
    for i in 0..cli.nodes {
        graph.add_node(format!("n{i}"));
    }
    for edge in &cli.edges {
        if cli.undirected {
            graph
                .insert_undirected_edge(edge.tail, edge.head, edge.weight)
                .with_context(|| format!("cannot insert edge {edge}"))?;
        } else {
            graph
                .insert_edge(edge.tail, edge.head, edge.weight)
                .with_context(|| format!("cannot insert edge {edge}"))?;
        }
    }
    tracing::debug!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "graph built"
    );
    Ok(graph)
}

fn run<E: EdgeStore>(cli: &Cli, config: &GraphConfig) -> Result<()> {
    let mut graph = build_graph::<E>(cli, config)?;
    match cli.command {
        Commands::Print => commands::cmd_print(&graph),
        Commands::Stats => commands::cmd_stats(&graph),
        Commands::Adj { tail, head } => commands::cmd_adj(&graph, tail, head),
        Commands::Bfs { root } => commands::cmd_bfs(&graph, root),
        Commands::Dfs { root } => commands::cmd_dfs(&graph, root),
        Commands::Search { root } => commands::cmd_search(&graph, root),
        Commands::Leaf { root } => commands::cmd_leaf(&graph, root),
        Commands::Median { root } => commands::cmd_median(&mut graph, root),
        Commands::Census { .. } => commands::cmd_census(&mut graph, &config.census),
        Commands::Config => commands::cmd_config(config),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GraphConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(backing) = cli.backing {
        config.storage = backing.into();
    }
    if let Commands::Census { seed: Some(seed) } = cli.command {
        config.census.seed = Some(seed);
    }

    init_tracing(&config, cli.verbose);

    match config.storage {
        StorageBacking::List => run::<AdjacencyList>(&cli, &config),
        StorageBacking::Matrix => run::<AdjacencyMatrix>(&cli, &config),
    }
}
