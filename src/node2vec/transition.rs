//! Second-order transition probability tables.
//!
//! For the first hop of a walk only the current node matters; afterwards
//! the distribution depends on the previous hop as well, biased by the
//! return parameter `p` and the in-out parameter `q`.

use rustc_hash::FxHashMap;

use super::alias::AliasTable;
use super::Node2VecResult;
use crate::graph::GraphSnapshot;

/// Alias tables driving biased walks.
///
/// One table per node with outgoing edges (first hop), one per directed
/// arc `(src, dst)` whose destination has outgoing edges (later hops).
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTables {
    node_tables: Vec<Option<AliasTable>>,
    edge_tables: FxHashMap<(usize, usize), AliasTable>,
}

impl TransitionTables {
    /// Precompute all transition tables for a snapshot.
    ///
    /// Dead-end nodes get no table; an arc into a dead end gets no edge
    /// table either, since the walk terminates there anyway.
    pub fn build(snapshot: &GraphSnapshot, p: f64, q: f64) -> Node2VecResult<Self> {
        let n = snapshot.node_count();

        let mut node_tables = Vec::with_capacity(n);
        for node in 0..n {
            let nbrs = snapshot.neighbors(node);
            if nbrs.is_empty() {
                node_tables.push(None);
                continue;
            }
            let weights: Vec<f64> = (0..nbrs.len())
                .map(|pos| snapshot.edge_weight(node, pos))
                .collect();
            node_tables.push(Some(AliasTable::new(&weights)?));
        }

        let mut edge_tables = FxHashMap::default();
        for src in 0..n {
            for &dst in snapshot.neighbors(src) {
                if snapshot.neighbors(dst).is_empty() {
                    continue;
                }
                let weights = biased_weights(snapshot, src, dst, p, q);
                edge_tables.insert((src, dst), AliasTable::new(&weights)?);
            }
        }

        Ok(Self {
            node_tables,
            edge_tables,
        })
    }

    /// First-hop table of a node; `None` for dead ends.
    pub fn node_table(&self, node: usize) -> Option<&AliasTable> {
        self.node_tables.get(node).and_then(Option::as_ref)
    }

    /// Second-order table for a walk that arrived at `cur` from `prev`.
    pub fn edge_table(&self, prev: usize, cur: usize) -> Option<&AliasTable> {
        self.edge_tables.get(&(prev, cur))
    }

    /// Number of arcs with a second-order table.
    pub fn edge_table_count(&self) -> usize {
        self.edge_tables.len()
    }
}

/// Unnormalized Node2Vec weights over `dst`'s neighbors for a walk that
/// arrived via `src -> dst`: returning costs `1/p`, staying at the same
/// distance (a common neighbor of `src`) costs 1, moving further costs
/// `1/q`; all scaled by the edge weight.
fn biased_weights(snapshot: &GraphSnapshot, src: usize, dst: usize, p: f64, q: f64) -> Vec<f64> {
    snapshot
        .neighbors(dst)
        .iter()
        .enumerate()
        .map(|(pos, &next)| {
            let w = snapshot.edge_weight(dst, pos);
            if next == src {
                w / p
            } else if snapshot.has_edge(src, next) {
                w
            } else {
                w / q
            }
        })
        .collect()
}
