//! Transform scripts and the engine that expands them into stepped snapshots.

/// Step expansion and per-step mutations.
pub mod engine;
/// Script model and JSON parsing.
pub mod spec;
