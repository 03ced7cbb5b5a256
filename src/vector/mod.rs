//! In-memory embedding storage and similarity search.

pub mod search;
pub mod store;

pub use search::SearchHit;
pub use store::EmbeddingStore;

use thiserror::Error;

/// Vector storage and search errors
#[derive(Error, Debug, PartialEq)]
pub enum VectorError {
    /// `top_k` must be a positive integer
    #[error("top_k must be positive, got {0}")]
    InvalidTopK(usize),

    /// A stored vector does not match the query dimension
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

pub type VectorResult<T> = Result<T, VectorError>;
