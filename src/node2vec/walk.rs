//! Biased random walk generation.

use rand::seq::SliceRandom;
use rand::Rng;

use super::transition::TransitionTables;
use crate::graph::GraphSnapshot;

/// Generate one second-order walk starting at `start`.
///
/// The first hop samples from the start node's first-hop table; every
/// later hop samples from the edge table keyed by `(prev, cur)`, so the
/// step distribution remembers where the walk came from. A dead end ends
/// the walk early, which is expected topology rather than an error.
pub fn node2vec_walk<R: Rng + ?Sized>(
    snapshot: &GraphSnapshot,
    tables: &TransitionTables,
    start: usize,
    walk_length: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut walk = Vec::with_capacity(walk_length);
    walk.push(start);

    let mut prev: Option<usize> = None;
    let mut cur = start;
    while walk.len() < walk_length {
        let nbrs = snapshot.neighbors(cur);
        if nbrs.is_empty() {
            break;
        }
        let table = match prev {
            None => tables.node_table(cur),
            Some(p) => tables.edge_table(p, cur),
        };
        let next = match table {
            Some(t) => nbrs[t.draw(rng)],
            None => break,
        };
        walk.push(next);
        prev = Some(cur);
        cur = next;
    }
    walk
}

/// Generate `num_walks` rounds of walks, one per node per round.
///
/// Each round reshuffles the start order with the shared RNG so no fixed
/// traversal order biases early training. Total walk count is
/// `num_walks * node_count`.
pub fn generate_walks<R: Rng + ?Sized>(
    snapshot: &GraphSnapshot,
    tables: &TransitionTables,
    num_walks: usize,
    walk_length: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut starts: Vec<usize> = (0..snapshot.node_count()).collect();
    let mut walks = Vec::with_capacity(starts.len() * num_walks);
    for _ in 0..num_walks {
        starts.shuffle(rng);
        for &node in &starts {
            walks.push(node2vec_walk(snapshot, tables, node, walk_length, rng));
        }
    }
    walks
}
