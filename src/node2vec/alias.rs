//! Walker alias-method sampling.
//!
//! O(K) construction, O(1) per draw. Both the per-node first-hop tables
//! and the per-arc second-order tables are alias tables, so walk stepping
//! never scans a neighbor list.

use rand::Rng;

use super::{Node2VecError, Node2VecResult};

/// Precomputed alias table for a discrete distribution over `K` outcomes.
///
/// Construction scales the probabilities by `K`, partitions them into
/// "small" (< 1) and "large" (>= 1) stacks, and repeatedly donates surplus
/// mass from a large entry to a small one until both stacks drain.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<u32>,
}

impl AliasTable {
    /// Build a table from outcome weights.
    ///
    /// Weights are normalized internally, so callers may pass raw
    /// transition weights or probabilities with floating drift. Fails with
    /// [`Node2VecError::InvalidDistribution`] when the input is empty,
    /// contains a negative or non-finite weight, or sums to zero.
    pub fn new(probs: &[f64]) -> Node2VecResult<Self> {
        if probs.is_empty() {
            return Err(Node2VecError::InvalidDistribution(
                "empty probability vector".to_string(),
            ));
        }
        let mut sum = 0.0;
        for &p in probs {
            if !p.is_finite() || p < 0.0 {
                return Err(Node2VecError::InvalidDistribution(format!(
                    "invalid probability {p}"
                )));
            }
            sum += p;
        }
        if sum <= 0.0 {
            return Err(Node2VecError::InvalidDistribution(
                "probabilities sum to zero".to_string(),
            ));
        }

        let k = probs.len();
        let mut prob = vec![0.0f64; k];
        let mut alias = vec![0u32; k];

        let mut smaller: Vec<usize> = Vec::with_capacity(k);
        let mut larger: Vec<usize> = Vec::with_capacity(k);
        for (i, &p) in probs.iter().enumerate() {
            prob[i] = k as f64 * p / sum;
            if prob[i] < 1.0 {
                smaller.push(i);
            } else {
                larger.push(i);
            }
        }

        while let (Some(small), Some(large)) = (smaller.pop(), larger.pop()) {
            alias[small] = large as u32;
            prob[large] = prob[large] + prob[small] - 1.0;
            if prob[large] < 1.0 {
                smaller.push(large);
            } else {
                larger.push(large);
            }
        }

        Ok(Self { prob, alias })
    }

    /// Draw an outcome index in `[0, len)`.
    ///
    /// One uniform column index plus one uniform float: the outcome is the
    /// column itself if the float falls under its retained mass, otherwise
    /// its alias. Deterministic for a seeded `rng`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let i = rng.gen_range(0..self.prob.len());
        if rng.gen::<f64>() < self.prob[i] {
            i
        } else {
            self.alias[i] as usize
        }
    }

    /// Number of outcomes in the table.
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    /// True when the table has no outcomes (never constructible via `new`).
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }
}
