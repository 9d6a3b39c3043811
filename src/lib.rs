//! ptanim turns a PTGui panorama project into a sequence of edited projects that, stitched in
//! order, form an animation.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: transform script JSON -> [`TransformScript`]; each entry becomes a closed
//!    [`TransformAction`] right before it runs
//! 2. **Expand**: each transform -> [`StepRange`] plus a fixed per-action step plan
//! 3. **Mutate**: per step, edit the project through [`ProjectAccessor`] (fov or rotation)
//! 4. **Persist**: write `<name>_<index>.pts` snapshots and hand the [`OutputManifest`] to a
//!    [`BatchSink`] (by default a PTGui `.ptgbatch` list)
//!
//! Rotations are composed as quaternions ([`Quaternion`]) so each step's delta is applied on top
//! of the orientation left by the previous step.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Batch lists of generated projects.
pub mod batch;
/// Project descriptor access.
pub mod project;
/// Orientation math.
pub mod rotation;
/// Stepped ranges.
pub mod steps;
/// Transform scripts and the transform engine.
pub mod transform;

pub use batch::ptgbatch::{BATCH_EXTENSION, PtgBatchWriter, render_batch_list};
pub use batch::sink::{BatchSink, InMemoryBatchSink, OutputManifest};
pub use foundation::core::{EulerAngles, FieldOfView, Resolution};
pub use foundation::error::{PtanimError, PtanimResult};
pub use project::accessor::{ImageOrientation, InMemoryProject, ProjectAccessor, ProjectSnapshot};
pub use project::ptgui::PtguiProject;
pub use rotation::quaternion::{Quaternion, rotate_orientation};
pub use steps::range::{StepIter, StepRange};
pub use transform::engine::{
    DEFAULT_EXTENSION, FovMode, RunConfig, TransformEngine, fov_for_step, snapshot_name,
};
pub use transform::spec::{TransformAction, TransformDef, TransformScript, TransformSpec};
