//! Exact cosine top-k search.
//!
//! The search contract is exact, not approximate: every stored vector is
//! scored. Ordering is fully specified (score descending, ties broken by
//! node id ascending) so results never depend on map iteration order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::store::EmbeddingStore;
use super::{VectorError, VectorResult};

/// One search result: a node id and its cosine similarity to the query.
///
/// Node metadata (labels, properties) is resolved by the caller through
/// its graph source; the core returns ids only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub node_id: String,
    pub score: f32,
}

/// Score every stored vector against `query` and keep the best `top_k`.
///
/// Fails with [`VectorError::InvalidTopK`] for `top_k == 0` and with
/// [`VectorError::DimensionMismatch`] when a stored vector's length
/// differs from the query's.
pub(crate) fn top_k(
    store: &EmbeddingStore,
    query: &[f32],
    top_k: usize,
) -> VectorResult<Vec<SearchHit>> {
    if top_k == 0 {
        return Err(VectorError::InvalidTopK(top_k));
    }

    let mut hits = Vec::with_capacity(store.len());
    for (node_id, embedding) in store.get_all() {
        if embedding.len() != query.len() {
            return Err(VectorError::DimensionMismatch {
                expected: query.len(),
                got: embedding.len(),
            });
        }
        hits.push(SearchHit {
            node_id: node_id.clone(),
            score: cosine_similarity(query, embedding),
        });
    }

    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.node_id.cmp(&b.node_id))
    });
    hits.truncate(top_k);
    Ok(hits)
}

/// Cosine similarity of two equal-length vectors; a zero-norm operand
/// scores 0.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> EmbeddingStore {
        let mut store = EmbeddingStore::new();
        store.set("A", vec![1.0, 0.0]);
        store.set("B", vec![0.0, 1.0]);
        store
    }

    #[test]
    fn test_top_one_is_most_similar() {
        let store = seeded_store();
        let hits = store.search(&[1.0, 0.0], 1).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].node_id, "A");
        assert!((hits[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_results_ordered_by_score_descending() {
        let mut store = seeded_store();
        store.set("C", vec![0.7, 0.7]);
        let hits = store.search(&[1.0, 0.0], 3).unwrap();
        let ids: Vec<&str> = hits.iter().map(|h| h.node_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_ties_break_by_node_id_ascending() {
        let mut store = EmbeddingStore::new();
        store.set("b", vec![1.0, 0.0]);
        store.set("a", vec![1.0, 0.0]);
        store.set("c", vec![0.0, 1.0]);
        let hits = store.search(&[1.0, 0.0], 2).unwrap();
        assert_eq!(hits[0].node_id, "a");
        assert_eq!(hits[1].node_id, "b");
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let store = seeded_store();
        assert_eq!(
            store.search(&[1.0, 0.0], 0).unwrap_err(),
            VectorError::InvalidTopK(0)
        );
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let store = seeded_store();
        assert_eq!(
            store.search(&[1.0, 0.0, 0.0], 1).unwrap_err(),
            VectorError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_zero_norm_vectors_score_zero() {
        let mut store = EmbeddingStore::new();
        store.set("zero", vec![0.0, 0.0]);
        let hits = store.search(&[1.0, 0.0], 1).unwrap();
        assert_eq!(hits[0].score, 0.0);
    }

    #[test]
    fn test_top_k_larger_than_store_returns_everything() {
        let store = seeded_store();
        let hits = store.search(&[1.0, 0.0], 10).unwrap();
        assert_eq!(hits.len(), 2);
    }
}
