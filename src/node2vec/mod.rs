//! Node2Vec embedding engine.
//!
//! Second-order biased random walks (Grover & Leskovec 2016) feed a
//! skip-gram trainer with negative sampling; the resulting unit vectors
//! land in an [`EmbeddingStore`] served by cosine top-k search.
//!
//! One engine instance owns its configuration, its graph source, one
//! seeded RNG, and its embedding state. There is no process-wide shared
//! instance; callers that want sharing inject the same engine explicitly.
//! A fixed (graph, config, seed) triple reproduces embeddings exactly.

pub mod alias;
pub mod training;
pub mod transition;
pub mod walk;

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Node2VecConfig;
use crate::graph::{GraphSnapshot, GraphSource, SourceError};
use crate::vector::{EmbeddingStore, SearchHit, VectorError};

pub use alias::AliasTable;
pub use transition::TransitionTables;

/// Default RNG seed. Every engine is reproducible unless reseeded.
pub const DEFAULT_SEED: u64 = 42;

/// Errors surfaced by the embedding engine
#[derive(Error, Debug)]
pub enum Node2VecError {
    /// Alias setup over an empty, negative, or zero-sum distribution
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    /// Bad configuration or call parameter, rejected before computation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Store or search failure
    #[error(transparent)]
    Vector(#[from] VectorError),

    /// Upstream graph source failure, propagated unchanged
    #[error("graph source error: {0}")]
    Source(#[source] SourceError),
}

pub type Node2VecResult<T> = Result<T, Node2VecError>;

/// The embedding engine: transition preprocessing, walk generation,
/// skip-gram training, and embedding storage behind one type.
///
/// `preprocess` is idempotent for an unchanged graph; `fit` always
/// retrains from scratch and swaps the freshly trained embeddings into
/// the store only on success, so a failed fit leaves the previous state
/// observable.
pub struct Node2Vec<S: GraphSource> {
    config: Node2VecConfig,
    source: S,
    rng: StdRng,
    snapshot: Option<GraphSnapshot>,
    tables: Option<TransitionTables>,
    preprocessed: bool,
    store: EmbeddingStore,
}

impl<S: GraphSource> Node2Vec<S> {
    /// Create an engine with the default seed.
    pub fn new(source: S, config: Node2VecConfig) -> Node2VecResult<Self> {
        Self::with_seed(source, config, DEFAULT_SEED)
    }

    /// Create an engine with an explicit seed.
    pub fn with_seed(source: S, config: Node2VecConfig, seed: u64) -> Node2VecResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            rng: StdRng::seed_from_u64(seed),
            snapshot: None,
            tables: None,
            preprocessed: false,
            store: EmbeddingStore::new(),
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &Node2VecConfig {
        &self.config
    }

    /// True once transition tables exist for the current snapshot.
    pub fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }

    /// The current transition tables, if preprocessing has run.
    pub fn transition_tables(&self) -> Option<&TransitionTables> {
        self.tables.as_ref()
    }

    /// Force the next `preprocess` to recompute even for an unchanged
    /// graph.
    pub fn invalidate(&mut self) {
        self.preprocessed = false;
    }

    /// Pull a snapshot from the source and (re)build transition tables.
    ///
    /// Recomputation is skipped when the pulled snapshot equals the one
    /// already preprocessed; any change resets and rebuilds. Source
    /// failures propagate unchanged.
    pub fn preprocess(&mut self) -> Node2VecResult<()> {
        let adjacency = self.source.get_graph().map_err(Node2VecError::Source)?;
        let snapshot = GraphSnapshot::from_adjacency(&adjacency, self.config.model.directed);

        if self.preprocessed && self.snapshot.as_ref() == Some(&snapshot) {
            debug!("graph snapshot unchanged, keeping transition tables");
            return Ok(());
        }

        info!(
            nodes = snapshot.node_count(),
            "preprocessing transition probabilities"
        );
        let tables = TransitionTables::build(&snapshot, self.config.model.p, self.config.model.q)?;
        debug!(edge_tables = tables.edge_table_count(), "tables built");

        self.snapshot = Some(snapshot);
        self.tables = Some(tables);
        self.preprocessed = true;
        Ok(())
    }

    /// Full training pipeline: preprocess (if needed), initialize
    /// embeddings, generate walks, train, renormalize, then swap the new
    /// embeddings into the store.
    ///
    /// An empty graph is a no-op boundary, not an error: the call
    /// succeeds and the store ends up empty.
    pub fn fit(&mut self) -> Node2VecResult<()> {
        self.preprocess()?;

        let (snapshot, tables) = match (self.snapshot.as_ref(), self.tables.as_ref()) {
            (Some(snapshot), Some(tables)) => (snapshot, tables),
            _ => return Ok(()),
        };

        if snapshot.is_empty() {
            info!("graph is empty, clearing embedding store");
            self.store.set_all(IndexMap::new());
            return Ok(());
        }

        let node_count = snapshot.node_count();
        let dimension = self.config.model.dimension;
        let train_cfg = &self.config.training;

        info!(nodes = node_count, "generating random walks");
        let walks = walk::generate_walks(
            snapshot,
            tables,
            train_cfg.num_walks,
            train_cfg.walk_length,
            &mut self.rng,
        );
        debug!(walks = walks.len(), "walks generated");

        info!(dimension, epochs = train_cfg.epochs, "training embeddings");
        let mut embeddings = training::init_embeddings(node_count, dimension, &mut self.rng);
        training::train(&mut embeddings, &walks, train_cfg, &mut self.rng);
        for vector in &mut embeddings {
            training::normalize(vector);
        }

        let mut trained = IndexMap::with_capacity(node_count);
        for (index, vector) in embeddings.into_iter().enumerate() {
            trained.insert(snapshot.node_id(index).to_string(), vector);
        }
        self.store.set_all(trained);
        info!(embeddings = self.store.len(), "training complete");
        Ok(())
    }

    /// Embedding for a node, if present.
    pub fn get_embedding(&self, node_id: &str) -> Option<&[f32]> {
        self.store.get(node_id)
    }

    /// Insert or replace one embedding.
    pub fn set_embedding(&mut self, node_id: impl Into<String>, embedding: Vec<f32>) {
        self.store.set(node_id, embedding);
    }

    /// All embeddings, keyed by node id.
    pub fn get_all_embeddings(&self) -> &IndexMap<String, Vec<f32>> {
        self.store.get_all()
    }

    /// Replace the whole embedding mapping; used for seeding and for
    /// persistence round-trips owned by the caller.
    pub fn set_all_embeddings(&mut self, embeddings: IndexMap<String, Vec<f32>>) {
        self.store.set_all(embeddings);
    }

    /// Read-only view of the embedding store.
    pub fn store(&self) -> &EmbeddingStore {
        &self.store
    }

    /// Cosine top-k over the stored embeddings.
    ///
    /// An empty store triggers a full `fit` first (lazy materialization),
    /// trading first-query latency for avoiding unconditional eager
    /// computation.
    pub fn search(&mut self, query: &[f32], top_k: usize) -> Node2VecResult<Vec<SearchHit>> {
        if top_k == 0 {
            return Err(VectorError::InvalidTopK(top_k).into());
        }
        if self.store.is_empty() {
            info!("embedding store empty, fitting before first search");
            self.fit()?;
        }
        Ok(self.store.search(query, top_k)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Adjacency, InMemoryGraphSource};

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = Node2VecConfig::default();
        config.model.dimension = 0;
        let result = Node2Vec::new(InMemoryGraphSource::default(), config);
        assert!(matches!(result, Err(Node2VecError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalidate_resets_preprocessed_flag() {
        let mut adjacency = Adjacency::new();
        adjacency.insert("a".to_string(), vec!["b".to_string()]);
        adjacency.insert("b".to_string(), vec!["a".to_string()]);

        let mut engine = Node2Vec::new(
            InMemoryGraphSource::new(adjacency),
            Node2VecConfig::default(),
        )
        .unwrap();

        engine.preprocess().unwrap();
        assert!(engine.is_preprocessed());
        engine.invalidate();
        assert!(!engine.is_preprocessed());
    }
}
