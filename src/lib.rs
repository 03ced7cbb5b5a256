//! SkillGraph Embedding Engine
//!
//! Deterministic Node2Vec graph embeddings with in-memory vector storage
//! and exact cosine top-k search.
//!
//! # Architecture
//!
//! - [`graph`]: adjacency snapshots and the [`GraphSource`] adapter seam;
//!   the engine pulls one snapshot per preprocess/fit and owns nothing
//!   about where graphs live.
//! - [`node2vec`]: the core pipeline: alias-method sampling, second-order
//!   transition tables biased by the return parameter `p` and the in-out
//!   parameter `q`, biased walk generation, and skip-gram training with
//!   negative sampling.
//! - [`vector`]: the embedding store and exact cosine search with a
//!   fully specified result ordering.
//!
//! All randomness flows through one seeded generator per engine instance,
//! so a fixed (graph, config, seed) triple reproduces embeddings exactly.
//!
//! # Example Usage
//!
//! ```rust
//! use indexmap::IndexMap;
//! use skillgraph::{InMemoryGraphSource, Node2Vec, Node2VecConfig};
//!
//! let mut adjacency = IndexMap::new();
//! adjacency.insert("1".to_string(), vec!["2".to_string(), "3".to_string()]);
//! adjacency.insert("2".to_string(), vec!["1".to_string(), "3".to_string(), "4".to_string()]);
//! adjacency.insert("3".to_string(), vec!["1".to_string(), "2".to_string(), "4".to_string()]);
//! adjacency.insert("4".to_string(), vec!["2".to_string(), "3".to_string()]);
//!
//! let mut config = Node2VecConfig::default();
//! config.model.dimension = 16;
//! config.training.walk_length = 10;
//! config.training.num_walks = 2;
//! config.training.epochs = 1;
//!
//! let mut engine = Node2Vec::new(InMemoryGraphSource::new(adjacency), config).unwrap();
//! engine.fit().unwrap();
//!
//! let query = engine.get_embedding("1").unwrap().to_vec();
//! let hits = engine.search(&query, 2).unwrap();
//! assert_eq!(hits[0].node_id, "1");
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod node2vec;
pub mod vector;

// Re-export main types for convenience
pub use config::{ModelConfig, Node2VecConfig, TrainingConfig};

pub use graph::{Adjacency, GraphSnapshot, GraphSource, InMemoryGraphSource, SourceError};

pub use node2vec::{
    AliasTable, Node2Vec, Node2VecError, Node2VecResult, TransitionTables, DEFAULT_SEED,
};

pub use vector::{EmbeddingStore, SearchHit, VectorError, VectorResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
