//! Orientation math shared by rotation transforms.

/// Quaternion type and Euler conversions.
pub mod quaternion;
