//! Project descriptor access.
//!
//! The transform engine only talks to descriptors through [`accessor::ProjectAccessor`].

/// Accessor trait and the in-memory project.
pub mod accessor;
/// PTGui `.pts` JSON projects.
pub mod ptgui;
