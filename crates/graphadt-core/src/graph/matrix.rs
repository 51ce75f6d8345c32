//! Adjacency-matrix edge storage.

use rustc_hash::FxHashMap;

use super::edge_store::EdgeStore;
use super::types::Edge;

#[derive(Debug, Clone, Copy)]
struct Link {
    weight: Option<f64>,
}

/// Dense edge storage: one matrix cell per ordered pair of node slots.
///
/// Node IDs are mapped to matrix slots. Slots released by deleted nodes are
/// reused for later nodes, so the matrix only grows with the peak number of
/// live nodes, not with the highest ID ever assigned.
#[derive(Debug, Default, Clone)]
pub struct AdjacencyMatrix {
    slots: FxHashMap<u64, usize>,
    slot_ids: Vec<Option<u64>>,
    free: Vec<usize>,
    cells: Vec<Vec<Option<Link>>>,
    edge_count: usize,
}

impl AdjacencyMatrix {
    /// Creates an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matrix dimension (allocated slots, live or free).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.cells.len()
    }

    fn cell(&self, tail: u64, head: u64) -> Option<Link> {
        let &t = self.slots.get(&tail)?;
        let &h = self.slots.get(&head)?;
        self.cells[t][h]
    }
}

impl EdgeStore for AdjacencyMatrix {
    fn register_node(&mut self, node_id: u64) {
        if self.slots.contains_key(&node_id) {
            return;
        }
        let slot = if let Some(slot) = self.free.pop() {
            self.slot_ids[slot] = Some(node_id);
            slot
        } else {
            let slot = self.cells.len();
            for row in &mut self.cells {
                row.push(None);
            }
            self.cells.push(vec![None; slot + 1]);
            self.slot_ids.push(Some(node_id));
            slot
        };
        self.slots.insert(node_id, slot);
    }

    fn unregister_node(&mut self, node_id: u64) -> usize {
        let Some(slot) = self.slots.remove(&node_id) else {
            return 0;
        };
        let mut removed = 0;
        for cell in &mut self.cells[slot] {
            if cell.take().is_some() {
                removed += 1;
            }
        }
        for row in &mut self.cells {
            if row[slot].take().is_some() {
                removed += 1;
            }
        }
        self.slot_ids[slot] = None;
        self.free.push(slot);
        self.edge_count -= removed;
        removed
    }

    fn insert(&mut self, tail: u64, head: u64, weight: Option<f64>) -> bool {
        let (Some(&t), Some(&h)) = (self.slots.get(&tail), self.slots.get(&head)) else {
            return false;
        };
        if self.cells[t][h].is_some() {
            return false;
        }
        self.cells[t][h] = Some(Link { weight });
        self.edge_count += 1;
        true
    }

    fn remove(&mut self, tail: u64, head: u64) -> Option<Edge> {
        let &t = self.slots.get(&tail)?;
        let &h = self.slots.get(&head)?;
        let link = self.cells[t][h].take()?;
        self.edge_count -= 1;
        Some(Edge::new(tail, head, link.weight))
    }

    fn get(&self, tail: u64, head: u64) -> Option<Edge> {
        self.cell(tail, head)
            .map(|link| Edge::new(tail, head, link.weight))
    }

    fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (t, row) in self.cells.iter().enumerate() {
            let Some(tail) = self.slot_ids[t] else {
                continue;
            };
            for (h, cell) in row.iter().enumerate() {
                if let (Some(link), Some(head)) = (cell, self.slot_ids[h]) {
                    edges.push(Edge::new(tail, head, link.weight));
                }
            }
        }
        edges.sort_unstable_by_key(|e| (e.tail(), e.head()));
        edges
    }

    fn successors(&self, node_id: u64) -> Vec<u64> {
        let Some(&t) = self.slots.get(&node_id) else {
            return Vec::new();
        };
        let mut heads: Vec<u64> = self.cells[t]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .filter_map(|(h, _)| self.slot_ids[h])
            .collect();
        heads.sort_unstable();
        heads
    }

    fn out_degree(&self, node_id: u64) -> usize {
        self.slots
            .get(&node_id)
            .map_or(0, |&t| self.cells[t].iter().filter(|c| c.is_some()).count())
    }

    fn in_degree(&self, node_id: u64) -> usize {
        self.slots.get(&node_id).map_or(0, |&h| {
            self.cells.iter().filter(|row| row[h].is_some()).count()
        })
    }

    fn len(&self) -> usize {
        self.edge_count
    }
}
