//! Graph source adapter seam.
//!
//! The engine never owns graph persistence; it pulls one adjacency
//! snapshot per preprocess/fit through this trait and treats failures as
//! opaque upstream errors.

use super::snapshot::Adjacency;

/// Boxed error produced by a graph source adapter.
///
/// Adapter failures propagate to the engine caller unchanged; retry
/// policy, if any, belongs to the adapter or its caller.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Read-only access to a snapshot of directed adjacency.
pub trait GraphSource {
    /// Return the current graph as a node-id to neighbor-ids mapping.
    fn get_graph(&self) -> Result<Adjacency, SourceError>;
}

/// Adapter over an adjacency map already in memory.
///
/// Useful for tests, seeding, and callers that materialize the graph
/// themselves before handing it to the engine.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGraphSource {
    adjacency: Adjacency,
}

impl InMemoryGraphSource {
    /// Wrap an adjacency mapping.
    pub fn new(adjacency: Adjacency) -> Self {
        Self { adjacency }
    }
}

impl GraphSource for InMemoryGraphSource {
    fn get_graph(&self) -> Result<Adjacency, SourceError> {
        Ok(self.adjacency.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_source_round_trip() {
        let mut adjacency = Adjacency::new();
        adjacency.insert("a".to_string(), vec!["b".to_string()]);
        adjacency.insert("b".to_string(), vec![]);

        let source = InMemoryGraphSource::new(adjacency.clone());
        assert_eq!(source.get_graph().unwrap(), adjacency);
    }
}
