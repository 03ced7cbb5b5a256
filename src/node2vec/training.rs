//! Skip-gram training with negative sampling over generated walks.
//!
//! There is no separate output matrix: both vectors of a trained pair are
//! updated symmetrically and renormalized, so the embedding space stays on
//! the unit sphere throughout training.

use rand::Rng;
use rand_distr::StandardNormal;
use rustc_hash::FxHashSet;

use crate::config::TrainingConfig;

/// Rejection-sampling bound for one negative draw. On pathological graphs
/// where nearly every node sits in the exclusion set, the draw is skipped
/// rather than looping unbounded.
const MAX_NEGATIVE_ATTEMPTS: usize = 64;

/// Assign each node a random unit vector: `dimension` standard-normal
/// draws, L2-normalized.
pub(crate) fn init_embeddings<R: Rng + ?Sized>(
    node_count: usize,
    dimension: usize,
    rng: &mut R,
) -> Vec<Vec<f32>> {
    (0..node_count)
        .map(|_| {
            let mut vector: Vec<f32> = (0..dimension)
                .map(|_| rng.sample::<f64, _>(StandardNormal) as f32)
                .collect();
            normalize(&mut vector);
            vector
        })
        .collect()
}

/// Run `epochs` full passes of skip-gram training over the walks.
///
/// Per center position: pull every in-window context vector toward the
/// center (label 1), then push `num_neg_samples` uniform draws away from
/// it (label 0), excluding the center and the current context from the
/// draws. Touched vectors are renormalized after every update.
pub(crate) fn train<R: Rng + ?Sized>(
    embeddings: &mut [Vec<f32>],
    walks: &[Vec<usize>],
    config: &TrainingConfig,
    rng: &mut R,
) {
    let node_count = embeddings.len();
    if node_count == 0 {
        return;
    }
    let learning_rate = config.learning_rate as f32;

    for _ in 0..config.epochs {
        for walk in walks {
            for center_idx in 0..walk.len() {
                let center = walk[center_idx];
                let (start, end) = context_bounds(center_idx, config.window_size, walk.len());

                for pos in start..end {
                    if pos != center_idx {
                        update_pair(embeddings, center, walk[pos], 1.0, learning_rate);
                    }
                }

                // Exclusion set: the center plus its current context.
                let excluded: FxHashSet<usize> = walk[start..end].iter().copied().collect();
                if excluded.len() >= node_count {
                    continue;
                }
                for _ in 0..config.num_neg_samples {
                    if let Some(negative) = draw_negative(node_count, &excluded, rng) {
                        update_pair(embeddings, center, negative, 0.0, learning_rate);
                    }
                }
            }
        }
    }
}

/// Context window bounds around a center position, clipped to the walk.
/// The center itself sits inside the returned range and is excluded by
/// the callers.
fn context_bounds(center_idx: usize, window_size: usize, walk_len: usize) -> (usize, usize) {
    let start = center_idx.saturating_sub(window_size);
    let end = (center_idx + window_size + 1).min(walk_len);
    (start, end)
}

fn draw_negative<R: Rng + ?Sized>(
    node_count: usize,
    excluded: &FxHashSet<usize>,
    rng: &mut R,
) -> Option<usize> {
    for _ in 0..MAX_NEGATIVE_ATTEMPTS {
        let candidate = rng.gen_range(0..node_count);
        if !excluded.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// One symmetric logistic update on a node pair.
///
/// Gradients for both sides are computed from the pre-update vectors. An
/// index without an initialized vector is skipped silently; training is
/// best-effort per step.
fn update_pair(embeddings: &mut [Vec<f32>], a: usize, b: usize, label: f32, learning_rate: f32) {
    if a == b || a >= embeddings.len() || b >= embeddings.len() {
        return;
    }
    let (first, second) = pair_mut(embeddings, a, b);
    if first.len() != second.len() || first.is_empty() {
        return;
    }

    let score: f32 = first.iter().zip(second.iter()).map(|(x, y)| x * y).sum();
    let grad = learning_rate * (label - sigmoid(score));

    for i in 0..first.len() {
        let old = first[i];
        first[i] += grad * second[i];
        second[i] += grad * old;
    }
    normalize(first);
    normalize(second);
}

/// Two disjoint mutable views into the embedding table. `a != b` must hold.
fn pair_mut(embeddings: &mut [Vec<f32>], a: usize, b: usize) -> (&mut [f32], &mut [f32]) {
    if a < b {
        let (lo, hi) = embeddings.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = embeddings.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Scale a vector to unit L2 norm; zero vectors are left untouched.
pub(crate) fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector {
            *x /= norm;
        }
    }
}
