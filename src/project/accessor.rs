use crate::foundation::core::{EulerAngles, FieldOfView, Resolution};
use crate::foundation::error::{PtanimError, PtanimResult};

/// Orientation pair stored for one image group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageOrientation {
    /// The image's own orientation.
    pub primary: EulerAngles,
    /// Orientation of the paired linkable position.
    pub linkable: EulerAngles,
}

impl ImageOrientation {
    /// Create a pair from primary and linkable orientations.
    pub const fn new(primary: EulerAngles, linkable: EulerAngles) -> Self {
        Self { primary, linkable }
    }
}

/// Access contract the transform engine uses to read and mutate a project descriptor.
///
/// Errors from implementations are propagated unchanged by the engine.
pub trait ProjectAccessor {
    /// Current panorama field of view.
    fn field_of_view(&self) -> PtanimResult<FieldOfView>;
    /// Replace the panorama field of view.
    fn set_field_of_view(&mut self, fov: FieldOfView) -> PtanimResult<()>;
    /// Replace the projection type.
    fn set_projection(&mut self, projection: &str) -> PtanimResult<()>;
    /// Orientations of every image group, in document order.
    fn image_orientations(&self) -> PtanimResult<Vec<ImageOrientation>>;
    /// Write orientations back, in the order returned by [`Self::image_orientations`].
    fn set_image_orientations(&mut self, orientations: &[ImageOrientation]) -> PtanimResult<()>;
    /// Update the output size so the panorama fits `res` at its current field of view.
    fn apply_output_resolution(&mut self, res: Resolution) -> PtanimResult<()>;
    /// Persist the current state under `name` and return the identifier for batch lists.
    fn persist_snapshot(&mut self, name: &str) -> PtanimResult<String>;
}

/// Snapshot captured by [`InMemoryProject::persist_snapshot`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectSnapshot {
    /// Name the snapshot was persisted under.
    pub name: String,
    /// Field of view at persist time.
    pub fov: FieldOfView,
    /// Projection at persist time.
    pub projection: String,
    /// Output pixel count at persist time, if any resolution was applied.
    pub output_pixels: Option<f64>,
    /// Image orientations at persist time.
    pub orientations: Vec<ImageOrientation>,
}

/// In-memory project for tests and debugging.
#[derive(Clone, Debug)]
pub struct InMemoryProject {
    fov: FieldOfView,
    projection: String,
    output_pixels: Option<f64>,
    orientations: Vec<ImageOrientation>,
    snapshots: Vec<ProjectSnapshot>,
}

impl InMemoryProject {
    /// Create a project with the given field of view and image orientations.
    pub fn new(fov: FieldOfView, orientations: Vec<ImageOrientation>) -> Self {
        Self {
            fov,
            projection: String::from("equirectangular"),
            output_pixels: None,
            orientations,
            snapshots: Vec::new(),
        }
    }

    /// Current projection type.
    pub fn projection(&self) -> &str {
        &self.projection
    }

    /// Last computed output pixel count.
    pub fn output_pixels(&self) -> Option<f64> {
        self.output_pixels
    }

    /// Borrow the captured snapshots in persist order.
    pub fn snapshots(&self) -> &[ProjectSnapshot] {
        &self.snapshots
    }
}

impl ProjectAccessor for InMemoryProject {
    fn field_of_view(&self) -> PtanimResult<FieldOfView> {
        Ok(self.fov)
    }

    fn set_field_of_view(&mut self, fov: FieldOfView) -> PtanimResult<()> {
        self.fov = fov;
        Ok(())
    }

    fn set_projection(&mut self, projection: &str) -> PtanimResult<()> {
        self.projection = projection.to_owned();
        Ok(())
    }

    fn image_orientations(&self) -> PtanimResult<Vec<ImageOrientation>> {
        Ok(self.orientations.clone())
    }

    fn set_image_orientations(&mut self, orientations: &[ImageOrientation]) -> PtanimResult<()> {
        if orientations.len() != self.orientations.len() {
            return Err(PtanimError::project(format!(
                "expected {} image orientations, got {}",
                self.orientations.len(),
                orientations.len()
            )));
        }
        self.orientations.copy_from_slice(orientations);
        Ok(())
    }

    fn apply_output_resolution(&mut self, res: Resolution) -> PtanimResult<()> {
        self.output_pixels = Some(res.fitted_pixels(self.fov).round());
        Ok(())
    }

    fn persist_snapshot(&mut self, name: &str) -> PtanimResult<String> {
        self.snapshots.push(ProjectSnapshot {
            name: name.to_owned(),
            fov: self.fov,
            projection: self.projection.clone(),
            output_pixels: self.output_pixels,
            orientations: self.orientations.clone(),
        });
        Ok(name.to_owned())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/accessor.rs"]
mod tests;
