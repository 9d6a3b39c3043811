use crate::batch::sink::{BatchSink, OutputManifest};
use crate::foundation::core::{EulerAngles, FieldOfView, Resolution};
use crate::foundation::error::{PtanimError, PtanimResult};
use crate::project::accessor::ProjectAccessor;
use crate::rotation::quaternion::{Quaternion, rotate_orientation};
use crate::steps::range::StepRange;
use crate::transform::spec::{TransformAction, TransformScript, TransformSpec};

/// Default snapshot file extension (PTGui project).
pub const DEFAULT_EXTENSION: &str = "pts";

/// Settings shared by every transform of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Output resolution re-applied after every step; `None` leaves the output size alone.
    pub resolution: Option<Resolution>,
    /// Snapshot file extension, without the dot.
    pub extension: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            resolution: None,
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}

/// How a field-of-view step maps the stepped value onto both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FovMode {
    /// Value is the vertical fov; horizontal follows the starting aspect ratio.
    VerticalKeepAspect,
    /// Value is the horizontal fov; vertical follows the starting aspect ratio.
    HorizontalKeepAspect,
    /// Value is the vertical fov; horizontal keeps its starting value.
    VerticalOnly,
    /// Value is the horizontal fov; vertical keeps its starting value.
    HorizontalOnly,
}

/// Field of view for one step, given the fov captured when the action started.
pub fn fov_for_step(mode: FovMode, start: FieldOfView, value: f64) -> FieldOfView {
    match mode {
        FovMode::VerticalKeepAspect => FieldOfView::new(value * start.hfov / start.vfov, value),
        FovMode::HorizontalKeepAspect => FieldOfView::new(value, value * start.vfov / start.hfov),
        FovMode::VerticalOnly => FieldOfView::new(start.hfov, value),
        FovMode::HorizontalOnly => FieldOfView::new(value, start.vfov),
    }
}

/// Per-action state, fixed before the first step runs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum StepPlan {
    Fov { mode: FovMode, start: FieldOfView },
    Rotate { delta: Quaternion },
}

impl StepPlan {
    fn apply<P>(&self, project: &mut P, value: i64) -> PtanimResult<()>
    where
        P: ProjectAccessor + ?Sized,
    {
        match *self {
            Self::Fov { mode, start } => {
                project.set_field_of_view(fov_for_step(mode, start, value as f64))
            }
            // The stepped value only sets how many times the same delta is applied.
            Self::Rotate { delta } => {
                let mut orientations = project.image_orientations()?;
                for (i, o) in orientations.iter_mut().enumerate() {
                    o.primary = rotate_checked(delta, o.primary, i)?;
                    o.linkable = rotate_checked(delta, o.linkable, i)?;
                }
                project.set_image_orientations(&orientations)
            }
        }
    }
}

fn rotate_checked(
    delta: Quaternion,
    current: EulerAngles,
    group: usize,
) -> PtanimResult<EulerAngles> {
    let next = rotate_orientation(delta, current);
    if !next.is_finite() {
        return Err(PtanimError::numeric_domain(format!(
            "image group {group}: rotating {current:?} gave non-finite angles {next:?}"
        )));
    }
    Ok(next)
}

/// File name of snapshot `index` of the transform called `name`.
pub fn snapshot_name(name: &str, index: usize, extension: &str) -> String {
    if extension.is_empty() {
        format!("{name}_{index}")
    } else {
        format!("{name}_{index}.{extension}")
    }
}

/// Expands transforms into stepped project snapshots.
#[derive(Clone, Debug, Default)]
pub struct TransformEngine {
    cfg: RunConfig,
}

impl TransformEngine {
    /// Create an engine with the given run configuration.
    pub fn new(cfg: RunConfig) -> Self {
        Self { cfg }
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.cfg
    }

    /// Run one transform against `project`.
    ///
    /// Each step mutates the project, re-applies the output resolution if configured, and
    /// persists a snapshot named `<name>_<index>.<ext>`. The manifest of persisted identifiers is
    /// handed to `batch` and returned. `projection` mutates once, writes nothing and returns an
    /// empty manifest.
    ///
    /// The range is built before the project is touched, so a degenerate range leaves it
    /// unchanged. Steps run strictly in order; rotations compose onto the orientation left by
    /// the previous step.
    #[tracing::instrument(
        skip(self, spec, project, batch),
        fields(name = %spec.name, action = spec.action.label())
    )]
    pub fn execute<P, B>(
        &self,
        spec: &TransformSpec,
        project: &mut P,
        batch: &mut B,
    ) -> PtanimResult<OutputManifest>
    where
        P: ProjectAccessor + ?Sized,
        B: BatchSink + ?Sized,
    {
        let (range, plan) = match &spec.action {
            TransformAction::Projection { value } => {
                project.set_projection(value)?;
                tracing::info!(projection = %value, "set projection");
                return Ok(OutputManifest::new());
            }
            TransformAction::SetVfov { target, step } => {
                let start = project.field_of_view()?;
                fov_plan(start, start.vfov, *target, *step, FovMode::VerticalKeepAspect)?
            }
            TransformAction::SetHfov { target, step } => {
                let start = project.field_of_view()?;
                fov_plan(start, start.hfov, *target, *step, FovMode::HorizontalKeepAspect)?
            }
            TransformAction::ChangeVfov { target, step } => {
                let start = project.field_of_view()?;
                fov_plan(start, start.vfov, *target, *step, FovMode::VerticalOnly)?
            }
            TransformAction::ChangeHfov { target, step } => {
                let start = project.field_of_view()?;
                fov_plan(start, start.hfov, *target, *step, FovMode::HorizontalOnly)?
            }
            TransformAction::Rotate {
                angle,
                begin,
                end,
                step,
            } => (
                StepRange::new(*begin, *end, *step)?,
                StepPlan::Rotate {
                    delta: Quaternion::from_euler(*angle),
                },
            ),
        };

        tracing::info!(
            steps = range.len(),
            begin = range.begin(),
            end = range.end(),
            step = range.step(),
            "running transform"
        );

        let mut manifest = OutputManifest::new();
        for (index, value) in range.iter().enumerate() {
            plan.apply(project, value)?;
            if let Some(res) = self.cfg.resolution {
                project.apply_output_resolution(res)?;
            }
            let file = snapshot_name(&spec.name, index, &self.cfg.extension);
            let id = project.persist_snapshot(&file)?;
            tracing::debug!(index, value, id = %id, "step done");
            manifest.push(id);
        }

        batch.write_batch(&spec.name, &manifest)?;
        Ok(manifest)
    }

    /// Run every transform of `script` in order, stopping at the first error.
    ///
    /// Each entry is checked just before it runs. Output written by earlier transforms stays on
    /// disk when a later entry names an unknown action or lacks a parameter.
    pub fn run_script<P, B>(
        &self,
        script: &TransformScript,
        project: &mut P,
        batch: &mut B,
    ) -> PtanimResult<Vec<OutputManifest>>
    where
        P: ProjectAccessor + ?Sized,
        B: BatchSink + ?Sized,
    {
        tracing::info!(script = %script.name, transforms = script.transforms.len(), "transforming");
        let mut manifests = Vec::with_capacity(script.transforms.len());
        for def in &script.transforms {
            let spec = def.to_spec()?;
            manifests.push(self.execute(&spec, project, batch)?);
        }
        Ok(manifests)
    }
}

fn fov_plan(
    start: FieldOfView,
    current: f64,
    target: f64,
    step: f64,
    mode: FovMode,
) -> PtanimResult<(StepRange, StepPlan)> {
    let range = StepRange::new(current, target, step)?;
    Ok((range, StepPlan::Fov { mode, start }))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/engine.rs"]
mod tests;
