//! Engine configuration.
//!
//! Immutable value objects grouping model geometry and training
//! parameters, with the defaults the algorithm is usually run with.
//! Validation fails fast, before any computation touches the graph.

use serde::{Deserialize, Serialize};

use crate::node2vec::{Node2VecError, Node2VecResult};

/// Model parameters: embedding geometry and walk bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Embedding dimension.
    pub dimension: usize,
    /// Return parameter; higher values discourage immediately revisiting
    /// the previous node.
    pub p: f64,
    /// In-out parameter; higher values keep walks local.
    pub q: f64,
    /// Treat the source adjacency as directed. When false, every arc is
    /// symmetrized during preprocessing.
    pub directed: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dimension: 128,
            p: 1.0,
            q: 1.0,
            directed: false,
        }
    }
}

/// Training parameters for the skip-gram pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Maximum walk length in nodes.
    pub walk_length: usize,
    /// Walks started per node per round.
    pub num_walks: usize,
    /// Context window radius around each center position.
    pub window_size: usize,
    /// Negative draws per center position.
    pub num_neg_samples: usize,
    /// Gradient step size.
    pub learning_rate: f64,
    /// Full passes over all walks.
    pub epochs: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            walk_length: 80,
            num_walks: 10,
            window_size: 5,
            num_neg_samples: 5,
            learning_rate: 0.025,
            epochs: 5,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node2VecConfig {
    pub model: ModelConfig,
    pub training: TrainingConfig,
}

impl Node2VecConfig {
    /// Reject parameter combinations the pipeline cannot run with.
    pub fn validate(&self) -> Node2VecResult<()> {
        if self.model.dimension == 0 {
            return Err(invalid("dimension must be positive"));
        }
        if !(self.model.p.is_finite() && self.model.p > 0.0) {
            return Err(invalid("p must be a positive finite number"));
        }
        if !(self.model.q.is_finite() && self.model.q > 0.0) {
            return Err(invalid("q must be a positive finite number"));
        }
        if self.training.walk_length == 0 {
            return Err(invalid("walk_length must be positive"));
        }
        if self.training.num_walks == 0 {
            return Err(invalid("num_walks must be positive"));
        }
        if self.training.window_size == 0 {
            return Err(invalid("window_size must be positive"));
        }
        if !(self.training.learning_rate.is_finite() && self.training.learning_rate > 0.0) {
            return Err(invalid("learning_rate must be a positive finite number"));
        }
        if self.training.epochs == 0 {
            return Err(invalid("epochs must be positive"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> Node2VecError {
    Node2VecError::InvalidArgument(message.to_string())
}
