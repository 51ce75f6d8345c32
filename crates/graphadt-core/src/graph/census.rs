//! Longest-path median census.
//!
//! Answers "which node sits at the middle of the longest path discoverable
//! from some root?" by combining three steps:
//!
//! 1. [`PathCensus::leaf_distance`] measures how far the farthest leaf lies
//!    from a root.
//! 2. [`PathCensus::medium_node`] runs that measurement from every leaf it
//!    meets and keeps the longest result, an approximation of the diameter
//!    of the explored component.
//! 3. [`PathCensus::median_of_path`] picks the median of such a path. On an
//!    even-length path it **deletes the central edge in both directions**
//!    and compares the sizes of the two halves.
//!
//! [`PathCensus::census`] repeats this over the whole graph. Because step 3
//! mutates the graph, both take `&mut self`; use
//! [`PathCensus::census_on_copy`] to keep the graph intact.
//!
//! A leaf is a node with exactly one successor. On graphs built from
//! symmetric edge pairs this is a degree-1 vertex.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::config::CensusConfig;

use super::adt::Graph;
use super::traversal::explore;
use super::tree::TreeIndex;

/// Farthest leaf seen from one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafDistance {
    /// Distance of the farthest leaf (0 if no leaf was met).
    pub distance: usize,
    /// The farthest leaf. Among leaves at equal distance, the one expanded
    /// last wins.
    pub leaf: Option<u64>,
    /// Every node reached from the root.
    pub visited: Vec<u64>,
    /// Node IDs from the root to `leaf` along tree edges.
    pub path: Vec<u64>,
}

/// Longest leaf-to-leaf path found while exploring from one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiameterPath {
    /// Edge count of the longest path (0 if none was found).
    pub length: usize,
    /// The far endpoint of the longest path.
    pub endpoint: Option<u64>,
    /// Every node reached from the root.
    pub visited: Vec<u64>,
    /// Node IDs from one endpoint to the other.
    pub path: Vec<u64>,
}

/// Median of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianOutcome {
    /// The path has fewer than 3 nodes.
    NoMedian,
    /// A single median with its weight.
    Single {
        /// Median node ID.
        node: u64,
        /// Half the node count for odd paths, otherwise the size of the
        /// larger half after the split.
        weight: usize,
    },
    /// Both central nodes of an even path, whose halves have equal size.
    Tied {
        /// Central node closer to the path start.
        first: u64,
        /// Central node closer to the path end.
        second: u64,
        /// Size of either half.
        weight: usize,
    },
}

impl MedianOutcome {
    /// Returns the weight, or `None` for [`MedianOutcome::NoMedian`].
    #[must_use]
    pub fn weight(&self) -> Option<usize> {
        match *self {
            MedianOutcome::NoMedian => None,
            MedianOutcome::Single { weight, .. } | MedianOutcome::Tied { weight, .. } => {
                Some(weight)
            }
        }
    }

    /// Returns the median node IDs (empty, one, or a tied pair).
    #[must_use]
    pub fn nodes(&self) -> Vec<u64> {
        match *self {
            MedianOutcome::NoMedian => Vec::new(),
            MedianOutcome::Single { node, .. } => vec![node],
            MedianOutcome::Tied { first, second, .. } => vec![first, second],
        }
    }
}

/// Best median found across the whole graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusResult {
    /// Winning median.
    pub median: MedianOutcome,
    /// Number of rounds (diameter searches) performed.
    pub rounds: usize,
}

impl CensusResult {
    /// Weight of the winning median.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.median.weight().unwrap_or(0)
    }
}

/// Median census algorithms available on every [`Graph`].
pub trait PathCensus: Graph {
    /// Explores from `root_id` and reports the farthest leaf.
    ///
    /// Returns `None` if `root_id` is not a live node.
    fn leaf_distance(&self, root_id: u64) -> Option<LeafDistance> {
        let mut best: Option<(usize, TreeIndex)> = None;
        let tree = explore(self, root_id, |tree, idx, adjacent| {
            if adjacent.len() != 1 {
                return;
            }
            let distance = tree.node(idx).map_or(0, |n| n.distance());
            if best.map_or(true, |(max, _)| distance >= max) {
                best = Some((distance, idx));
            }
        })?;

        let path = best
            .map(|(_, idx)| {
                let mut path = tree.path_to_root(idx);
                path.reverse();
                path
            })
            .unwrap_or_default();

        Some(LeafDistance {
            distance: best.map_or(0, |(distance, _)| distance),
            leaf: best.map(|(_, idx)| tree.node_id_at(idx)),
            visited: tree.node_ids(),
            path,
        })
    }

    /// Explores from `root_id`, measuring [`PathCensus::leaf_distance`] from
    /// every leaf met, and keeps the strictly longest result.
    ///
    /// Returns `None` if `root_id` is not a live node.
    fn medium_node(&self, root_id: u64) -> Option<DiameterPath> {
        let mut best: Option<LeafDistance> = None;
        let tree = explore(self, root_id, |tree, idx, adjacent| {
            if adjacent.len() != 1 {
                return;
            }
            let Some(walk) = self.leaf_distance(tree.node_id_at(idx)) else {
                return;
            };
            if walk.distance > best.as_ref().map_or(0, |b| b.distance) {
                best = Some(walk);
            }
        })?;

        let visited = tree.node_ids();
        Some(match best {
            Some(best) => DiameterPath {
                length: best.distance,
                endpoint: best.leaf,
                visited,
                path: best.path,
            },
            None => DiameterPath {
                length: 0,
                endpoint: None,
                visited,
                path: Vec::new(),
            },
        })
    }

    /// Finds the median of `path`.
    ///
    /// - Fewer than 3 nodes: [`MedianOutcome::NoMedian`].
    /// - Odd node count: the middle node, weighted by half the node count.
    /// - Even node count: the edge between the two central nodes is deleted
    ///   in both directions, then the node whose half reaches strictly more
    ///   nodes wins; equal halves yield [`MedianOutcome::Tied`].
    ///
    /// The deletion is permanent. Later calls on the same graph see the
    /// split.
    fn median_of_path(&mut self, path: &[u64]) -> MedianOutcome {
        let len = path.len();
        if len < 3 {
            return MedianOutcome::NoMedian;
        }
        if len % 2 == 1 {
            return MedianOutcome::Single {
                node: path[len / 2],
                weight: len / 2,
            };
        }

        let first = path[len / 2 - 1];
        let second = path[len / 2];
        match self.delete_undirected_edge(first, second) {
            Ok(removed) => warn!(first, second, removed, "split path at its central edge"),
            Err(err) => debug!(first, second, %err, "central edge already absent"),
        }

        let first_size = self.subtree_size(first).unwrap_or(0);
        let second_size = self.subtree_size(second).unwrap_or(0);
        match first_size.cmp(&second_size) {
            std::cmp::Ordering::Greater => MedianOutcome::Single {
                node: first,
                weight: first_size,
            },
            std::cmp::Ordering::Less => MedianOutcome::Single {
                node: second,
                weight: second_size,
            },
            std::cmp::Ordering::Equal => MedianOutcome::Tied {
                first,
                second,
                weight: first_size,
            },
        }
    }

    /// Counts the nodes reachable from `root_id`, excluding the root.
    ///
    /// Returns `None` if `root_id` is not a live node.
    fn subtree_size(&self, root_id: u64) -> Option<usize> {
        explore(self, root_id, |_, _, _| {}).map(|tree| tree.len() - 1)
    }

    /// Runs the census, drawing candidate roots from `rng`.
    ///
    /// Candidates are all nodes with at least one successor. Each round
    /// picks one, searches its diameter, takes the median of that path and
    /// drops every node the search visited from the pool. The heaviest
    /// median wins; on equal weight the earlier one is kept.
    ///
    /// Returns `None` if no round produced a median.
    fn census_with_rng<R: Rng>(&mut self, rng: &mut R) -> Option<CensusResult> {
        let ids: Vec<u64> = self.get_nodes().iter().map(|n| n.id()).collect();
        let mut pool: Vec<u64> = ids.into_iter().filter(|&id| self.deg(id) > 0).collect();
        let mut best: Option<MedianOutcome> = None;
        let mut rounds = 0;

        while !pool.is_empty() {
            let pick = pool[rng.gen_range(0..pool.len())];
            rounds += 1;

            let Some(walk) = self.medium_node(pick) else {
                pool.retain(|&id| id != pick);
                continue;
            };

            if walk.endpoint.is_some() {
                let outcome = self.median_of_path(&walk.path);
                debug!(round = rounds, root = pick, length = walk.length, ?outcome, "census round");
                let best_weight = best.and_then(|b| b.weight()).unwrap_or(0);
                if outcome.weight().is_some_and(|w| w > best_weight) {
                    best = Some(outcome);
                }
            }

            let visited: FxHashSet<u64> = walk.visited.into_iter().collect();
            pool.retain(|id| !visited.contains(id));
        }

        debug!(rounds, ?best, "census finished");
        best.map(|median| CensusResult { median, rounds })
    }

    /// Runs the census with the candidate picker configured by `config`.
    fn census(&mut self, config: &CensusConfig) -> Option<CensusResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.census_with_rng(&mut rng)
    }

    /// Runs the census on a clone, leaving `self` untouched.
    fn census_on_copy(&self, config: &CensusConfig) -> Option<CensusResult>
    where
        Self: Clone + Sized,
    {
        let mut copy = self.clone();
        copy.census(config)
    }
}

impl<G: Graph + ?Sized> PathCensus for G {}
