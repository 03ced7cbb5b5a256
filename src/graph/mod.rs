//! Graph snapshot and source adapter.
//!
//! The engine consumes graphs through [`GraphSource`], a thin seam over
//! whatever store actually holds the data, and densifies each snapshot
//! into a [`GraphSnapshot`] for the walk and training hot paths.

pub mod snapshot;
pub mod source;

pub use snapshot::{Adjacency, GraphSnapshot};
pub use source::{GraphSource, InMemoryGraphSource, SourceError};
