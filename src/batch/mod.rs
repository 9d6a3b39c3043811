//! Batch lists of generated projects.

/// PTGui `.ptgbatch` writer.
pub mod ptgbatch;
/// Manifest type and the batch sink trait.
pub mod sink;
