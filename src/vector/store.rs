//! Embedding store keyed by node id.

use indexmap::IndexMap;

use super::search;
use super::{SearchHit, VectorResult};

/// Mapping from node id to its embedding vector.
///
/// Empty at construction; populated wholesale by a `fit` pass or by
/// `set_all` for seeding and tests. The store never persists itself;
/// round-tripping embeddings to storage belongs to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddingStore {
    embeddings: IndexMap<String, Vec<f32>>,
}

impl EmbeddingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Embedding for a node, if present.
    pub fn get(&self, node_id: &str) -> Option<&[f32]> {
        self.embeddings.get(node_id).map(Vec::as_slice)
    }

    /// Insert or replace one embedding.
    pub fn set(&mut self, node_id: impl Into<String>, embedding: Vec<f32>) {
        self.embeddings.insert(node_id.into(), embedding);
    }

    /// Remove one embedding, returning it if present.
    pub fn remove(&mut self, node_id: &str) -> Option<Vec<f32>> {
        self.embeddings.shift_remove(node_id)
    }

    /// All embeddings, in insertion order.
    pub fn get_all(&self) -> &IndexMap<String, Vec<f32>> {
        &self.embeddings
    }

    /// Replace the whole mapping at once.
    pub fn set_all(&mut self, embeddings: IndexMap<String, Vec<f32>>) {
        self.embeddings = embeddings;
    }

    /// Number of stored embeddings.
    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    /// Drop every embedding.
    pub fn clear(&mut self) {
        self.embeddings.clear();
    }

    /// Exact cosine top-k over the stored vectors. See [`search::top_k`].
    pub fn search(&self, query: &[f32], top_k: usize) -> VectorResult<Vec<SearchHit>> {
        search::top_k(self, query, top_k)
    }
}
