//! Dense-indexed adjacency snapshot.
//!
//! Opaque node ids are assigned dense indices so the walk and training
//! hot paths work on integers; ids are resolved back only at the engine
//! boundary.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Adjacency mapping as produced by a graph source: node id to neighbors.
pub type Adjacency = IndexMap<String, Vec<String>>;

/// A dense, integer-indexed view of one graph snapshot.
///
/// Keys are indexed in insertion order; ids referenced only as neighbors
/// are registered afterwards as dead-end nodes with empty out-lists.
/// Neighbor lists are kept sorted by index so membership tests are a
/// binary search and table construction order is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    index_to_node: Vec<String>,
    node_to_index: FxHashMap<String, usize>,
    neighbors: Vec<Vec<usize>>,
    /// Per-edge weights aligned with `neighbors`; `None` means uniform.
    weights: Option<Vec<Vec<f64>>>,
}

impl GraphSnapshot {
    /// Build an unweighted snapshot from an adjacency mapping.
    ///
    /// Undirected mode adds the reverse of every arc before indexing;
    /// duplicate arcs introduced by symmetrization are removed.
    pub fn from_adjacency(adjacency: &Adjacency, directed: bool) -> Self {
        let (index_to_node, node_to_index) = index_nodes(adjacency);

        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); index_to_node.len()];
        for (src_id, dsts) in adjacency {
            let src = node_to_index[src_id.as_str()];
            for dst_id in dsts {
                let dst = node_to_index[dst_id.as_str()];
                neighbors[src].push(dst);
                if !directed {
                    neighbors[dst].push(src);
                }
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
            if !directed {
                list.dedup();
            }
        }

        Self {
            index_to_node,
            node_to_index,
            neighbors,
            weights: None,
        }
    }

    /// Build a weighted snapshot from `(neighbor, weight)` adjacency.
    ///
    /// Symmetrization adds a reverse arc with the same weight only where
    /// no explicit reverse exists.
    pub fn from_weighted_adjacency(
        adjacency: &IndexMap<String, Vec<(String, f64)>>,
        directed: bool,
    ) -> Self {
        let keyed: Adjacency = adjacency
            .iter()
            .map(|(id, nbrs)| {
                (
                    id.clone(),
                    nbrs.iter().map(|(n, _)| n.clone()).collect::<Vec<_>>(),
                )
            })
            .collect();
        let (index_to_node, node_to_index) = index_nodes(&keyed);

        let mut weighted: Vec<Vec<(usize, f64)>> = vec![Vec::new(); index_to_node.len()];
        for (src_id, dsts) in adjacency {
            let src = node_to_index[src_id.as_str()];
            for (dst_id, w) in dsts {
                let dst = node_to_index[dst_id.as_str()];
                weighted[src].push((dst, *w));
            }
        }
        if !directed {
            for src in 0..weighted.len() {
                for (dst, w) in weighted[src].clone() {
                    if !weighted[dst].iter().any(|&(n, _)| n == src) {
                        weighted[dst].push((src, w));
                    }
                }
            }
        }

        let mut neighbors = Vec::with_capacity(weighted.len());
        let mut weights = Vec::with_capacity(weighted.len());
        for mut list in weighted {
            list.sort_unstable_by_key(|&(n, _)| n);
            neighbors.push(list.iter().map(|&(n, _)| n).collect());
            weights.push(list.iter().map(|&(_, w)| w).collect());
        }

        Self {
            index_to_node,
            node_to_index,
            neighbors,
            weights: Some(weights),
        }
    }

    /// Number of nodes, including dead ends registered from neighbor lists.
    pub fn node_count(&self) -> usize {
        self.index_to_node.len()
    }

    /// True when the snapshot has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.index_to_node.is_empty()
    }

    /// Sorted out-neighbors of a node.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the `pos`-th outgoing edge of `node`; 1.0 when unweighted.
    pub fn edge_weight(&self, node: usize, pos: usize) -> f64 {
        self.weights
            .as_ref()
            .and_then(|w| w.get(node))
            .and_then(|row| row.get(pos))
            .copied()
            .unwrap_or(1.0)
    }

    /// True when a `src -> dst` arc exists.
    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.neighbors(src).binary_search(&dst).is_ok()
    }

    /// Resolve a dense index back to its node id.
    pub fn node_id(&self, index: usize) -> &str {
        &self.index_to_node[index]
    }

    /// Resolve a node id to its dense index.
    pub fn index_of(&self, node_id: &str) -> Option<usize> {
        self.node_to_index.get(node_id).copied()
    }

    /// All node ids in dense-index order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.index_to_node.iter().map(String::as_str)
    }
}

/// Assign dense indices: keys first in insertion order, then any id that
/// appears only as a neighbor.
fn index_nodes(adjacency: &Adjacency) -> (Vec<String>, FxHashMap<String, usize>) {
    let mut index_to_node: Vec<String> = Vec::with_capacity(adjacency.len());
    let mut node_to_index: FxHashMap<String, usize> = FxHashMap::default();

    for id in adjacency.keys() {
        if !node_to_index.contains_key(id.as_str()) {
            node_to_index.insert(id.clone(), index_to_node.len());
            index_to_node.push(id.clone());
        }
    }
    for dsts in adjacency.values() {
        for id in dsts {
            if !node_to_index.contains_key(id.as_str()) {
                node_to_index.insert(id.clone(), index_to_node.len());
                index_to_node.push(id.clone());
            }
        }
    }

    (index_to_node, node_to_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(pairs: &[(&str, &[&str])]) -> Adjacency {
        pairs
            .iter()
            .map(|(id, nbrs)| {
                (
                    id.to_string(),
                    nbrs.iter().map(|n| n.to_string()).collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn test_directed_keeps_arcs_one_way() {
        let snapshot = GraphSnapshot::from_adjacency(&adjacency(&[("a", &["b"]), ("b", &[])]), true);
        let a = snapshot.index_of("a").unwrap();
        let b = snapshot.index_of("b").unwrap();
        assert!(snapshot.has_edge(a, b));
        assert!(!snapshot.has_edge(b, a));
    }

    #[test]
    fn test_undirected_symmetrizes_and_dedups() {
        // a -> b exists in both directions already; symmetrization must not
        // double the arc.
        let snapshot =
            GraphSnapshot::from_adjacency(&adjacency(&[("a", &["b"]), ("b", &["a"])]), false);
        let a = snapshot.index_of("a").unwrap();
        let b = snapshot.index_of("b").unwrap();
        assert_eq!(snapshot.neighbors(a), &[b]);
        assert_eq!(snapshot.neighbors(b), &[a]);
    }

    #[test]
    fn test_missing_neighbor_becomes_dead_end() {
        let snapshot = GraphSnapshot::from_adjacency(&adjacency(&[("a", &["ghost"])]), true);
        let ghost = snapshot.index_of("ghost").unwrap();
        assert_eq!(snapshot.node_count(), 2);
        assert!(snapshot.neighbors(ghost).is_empty());
    }

    #[test]
    fn test_neighbor_lists_sorted() {
        let snapshot =
            GraphSnapshot::from_adjacency(&adjacency(&[("a", &["c", "b"]), ("b", &[]), ("c", &[])]), true);
        let a = snapshot.index_of("a").unwrap();
        let nbrs = snapshot.neighbors(a);
        assert!(nbrs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_weighted_symmetrization_preserves_explicit_reverse() {
        let mut adjacency: IndexMap<String, Vec<(String, f64)>> = IndexMap::new();
        adjacency.insert("a".to_string(), vec![("b".to_string(), 2.0)]);
        adjacency.insert("b".to_string(), vec![("a".to_string(), 5.0)]);
        let snapshot = GraphSnapshot::from_weighted_adjacency(&adjacency, false);
        let b = snapshot.index_of("b").unwrap();
        // The explicit b -> a weight wins over the symmetrized copy.
        assert_eq!(snapshot.edge_weight(b, 0), 5.0);
    }

    #[test]
    fn test_snapshot_equality_detects_change() {
        let before = GraphSnapshot::from_adjacency(&adjacency(&[("a", &["b"]), ("b", &[])]), true);
        let same = GraphSnapshot::from_adjacency(&adjacency(&[("a", &["b"]), ("b", &[])]), true);
        let changed = GraphSnapshot::from_adjacency(&adjacency(&[("a", &[]), ("b", &[])]), true);
        assert_eq!(before, same);
        assert_ne!(before, changed);
    }
}
