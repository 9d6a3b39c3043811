/// Convenience result type used across ptanim.
pub type PtanimResult<T> = Result<T, PtanimError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PtanimError {
    /// Invalid user-provided script or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A transform names an action outside the supported set.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// A stepped range with distinct bounds but a zero step.
    #[error("degenerate range: step is zero for bounds {begin}..{end}")]
    DegenerateRange {
        /// Truncated range start.
        begin: i64,
        /// Truncated range end (exclusive).
        end: i64,
    },

    /// A rotation produced a non-finite orientation.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    /// Failure reported by the project descriptor accessor.
    #[error("project error: {0}")]
    Project(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PtanimError {
    /// Build a [`PtanimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PtanimError::UnknownAction`] value.
    pub fn unknown_action(action: impl Into<String>) -> Self {
        Self::UnknownAction(action.into())
    }

    /// Build a [`PtanimError::NumericDomain`] value.
    pub fn numeric_domain(msg: impl Into<String>) -> Self {
        Self::NumericDomain(msg.into())
    }

    /// Build a [`PtanimError::Project`] value.
    pub fn project(msg: impl Into<String>) -> Self {
        Self::Project(msg.into())
    }

    /// Build a [`PtanimError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
