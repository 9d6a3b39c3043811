use crate::foundation::core::{EulerAngles, FieldOfView, Resolution};
use crate::foundation::error::{PtanimError, PtanimResult};
use crate::project::accessor::{ImageOrientation, ProjectAccessor};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

const PANORAMA_PARAMS: &str = "/project/panoramaparams";
const IMAGE_GROUPS: &str = "/project/imagegroups";
const OUTPUT_SIZE: &str = "/project/outputsize";
const BLEND: &str = "/project/blend";

/// PTGui project file (`.pts`) held as a JSON document.
///
/// Only the fields the transforms touch are interpreted. Everything else is carried through to
/// written snapshots untouched.
#[derive(Debug, Clone)]
pub struct PtguiProject {
    doc: Value,
    out_dir: PathBuf,
}

impl PtguiProject {
    /// Wrap an already parsed document. Snapshots go to the current directory.
    pub fn from_value(doc: Value) -> Self {
        Self {
            doc,
            out_dir: PathBuf::from("."),
        }
    }

    /// Parse a project from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PtanimResult<Self> {
        let doc: Value = serde_json::from_reader(r)
            .map_err(|e| PtanimError::serde(format!("parse PTGui project JSON: {e}")))?;
        Ok(Self::from_value(doc))
    }

    /// Parse a project from a `.pts` file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PtanimResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PtanimError::project(format!("open PTGui project '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write snapshots into `dir` instead of the current directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Directory snapshots are written to.
    pub fn output_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Borrow the underlying document.
    pub fn value(&self) -> &Value {
        &self.doc
    }

    /// Current projection type, if present.
    pub fn projection(&self) -> Option<&str> {
        self.doc
            .pointer(&format!("{PANORAMA_PARAMS}/projection"))
            .and_then(Value::as_str)
    }

    /// Enable or disable seam finding. Disabling it keeps seams stable between frames.
    pub fn set_seam_blend(&mut self, enabled: bool) -> PtanimResult<()> {
        self.set_field(BLEND, "seamfinding", Value::Bool(enabled))
    }

    /// Write the document as indented JSON to `path`.
    pub fn write_to(&self, path: &Path) -> PtanimResult<()> {
        ensure_parent_dir(path)?;
        let f = File::create(path).map_err(|e| {
            PtanimError::project(format!("create project file '{}': {e}", path.display()))
        })?;
        let mut w = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut w, &self.doc)
            .map_err(|e| PtanimError::serde(format!("serialize PTGui project: {e}")))?;
        w.flush().map_err(|e| {
            PtanimError::project(format!("write project file '{}': {e}", path.display()))
        })
    }

    fn number(&self, pointer: &str) -> PtanimResult<f64> {
        self.doc
            .pointer(pointer)
            .and_then(Value::as_f64)
            .ok_or_else(|| PtanimError::project(format!("missing numeric field '{pointer}'")))
    }

    fn object_mut(&mut self, pointer: &str) -> PtanimResult<&mut Map<String, Value>> {
        self.doc
            .pointer_mut(pointer)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| PtanimError::project(format!("missing object '{pointer}'")))
    }

    fn set_field(&mut self, parent: &str, key: &str, value: Value) -> PtanimResult<()> {
        self.object_mut(parent)?.insert(key.to_owned(), value);
        Ok(())
    }

    fn groups(&self) -> PtanimResult<&Vec<Value>> {
        self.doc
            .pointer(IMAGE_GROUPS)
            .and_then(Value::as_array)
            .ok_or_else(|| PtanimError::project(format!("missing array '{IMAGE_GROUPS}'")))
    }

    fn groups_mut(&mut self) -> PtanimResult<&mut Vec<Value>> {
        self.doc
            .pointer_mut(IMAGE_GROUPS)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| PtanimError::project(format!("missing array '{IMAGE_GROUPS}'")))
    }
}

fn read_angles(group: &Value, index: usize, params: &str) -> PtanimResult<EulerAngles> {
    let field = |name: &str| {
        group
            .pointer(&format!("{params}/{name}"))
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                PtanimError::project(format!(
                    "image group {index}: missing numeric field '{params}/{name}'"
                ))
            })
    };
    Ok(EulerAngles::new(field("yaw")?, field("pitch")?, field("roll")?))
}

fn write_angles(
    group: &mut Value,
    index: usize,
    params: &str,
    angles: EulerAngles,
) -> PtanimResult<()> {
    let obj = group
        .pointer_mut(params)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| {
            PtanimError::project(format!("image group {index}: missing object '{params}'"))
        })?;
    obj.insert("yaw".to_owned(), Value::from(angles.yaw));
    obj.insert("pitch".to_owned(), Value::from(angles.pitch));
    obj.insert("roll".to_owned(), Value::from(angles.roll));
    Ok(())
}

const PRIMARY_PARAMS: &str = "/position/params";
const LINKABLE_PARAMS: &str = "/linkable/position/params";

impl ProjectAccessor for PtguiProject {
    fn field_of_view(&self) -> PtanimResult<FieldOfView> {
        Ok(FieldOfView::new(
            self.number(&format!("{PANORAMA_PARAMS}/hfov"))?,
            self.number(&format!("{PANORAMA_PARAMS}/vfov"))?,
        ))
    }

    fn set_field_of_view(&mut self, fov: FieldOfView) -> PtanimResult<()> {
        let params = self.object_mut(PANORAMA_PARAMS)?;
        params.insert("hfov".to_owned(), Value::from(fov.hfov));
        params.insert("vfov".to_owned(), Value::from(fov.vfov));
        Ok(())
    }

    fn set_projection(&mut self, projection: &str) -> PtanimResult<()> {
        self.set_field(PANORAMA_PARAMS, "projection", Value::from(projection))
    }

    fn image_orientations(&self) -> PtanimResult<Vec<ImageOrientation>> {
        self.groups()?
            .iter()
            .enumerate()
            .map(|(i, g)| -> PtanimResult<ImageOrientation> {
                Ok(ImageOrientation::new(
                    read_angles(g, i, PRIMARY_PARAMS)?,
                    read_angles(g, i, LINKABLE_PARAMS)?,
                ))
            })
            .collect()
    }

    fn set_image_orientations(&mut self, orientations: &[ImageOrientation]) -> PtanimResult<()> {
        let groups = self.groups_mut()?;
        if groups.len() != orientations.len() {
            return Err(PtanimError::project(format!(
                "expected {} image orientations, got {}",
                groups.len(),
                orientations.len()
            )));
        }
        for (i, (g, o)) in groups.iter_mut().zip(orientations).enumerate() {
            write_angles(g, i, PRIMARY_PARAMS, o.primary)?;
            write_angles(g, i, LINKABLE_PARAMS, o.linkable)?;
        }
        Ok(())
    }

    fn apply_output_resolution(&mut self, res: Resolution) -> PtanimResult<()> {
        let fov = self.field_of_view()?;
        let pixels = res.fitted_pixels(fov).round();
        if !pixels.is_finite() {
            return Err(PtanimError::project(format!(
                "cannot fit field of view {}x{} into {}x{}",
                fov.hfov, fov.vfov, res.width, res.height
            )));
        }
        self.set_field(OUTPUT_SIZE, "pixels", Value::from(pixels as u64))
    }

    fn persist_snapshot(&mut self, name: &str) -> PtanimResult<String> {
        let path = self.out_dir.join(name);
        self.write_to(&path)?;
        tracing::debug!(path = %path.display(), "wrote project snapshot");
        Ok(name.to_owned())
    }
}

/// Create the parent directory of `path` if needed.
pub(crate) fn ensure_parent_dir(path: &Path) -> PtanimResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            PtanimError::project(format!(
                "create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/project/ptgui.rs"]
mod tests;
