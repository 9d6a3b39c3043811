use crate::foundation::core::EulerAngles;
use crate::foundation::error::{PtanimError, PtanimResult};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One transform of a script: a named action.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformSpec {
    /// Base name for the snapshots and batch list this transform writes.
    pub name: String,
    /// What to do.
    pub action: TransformAction,
}

/// The supported actions.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformAction {
    /// Step vertical fov from its current value to `target`, keeping the aspect ratio.
    SetVfov {
        /// Exclusive end value in degrees.
        target: f64,
        /// Step magnitude in degrees.
        step: f64,
    },
    /// Step horizontal fov from its current value to `target`, keeping the aspect ratio.
    SetHfov {
        /// Exclusive end value in degrees.
        target: f64,
        /// Step magnitude in degrees.
        step: f64,
    },
    /// Step vertical fov only; horizontal fov stays as it was.
    ChangeVfov {
        /// Exclusive end value in degrees.
        target: f64,
        /// Step magnitude in degrees.
        step: f64,
    },
    /// Step horizontal fov only; vertical fov stays as it was.
    ChangeHfov {
        /// Exclusive end value in degrees.
        target: f64,
        /// Step magnitude in degrees.
        step: f64,
    },
    /// Rotate every image by `angle` once per step of `[begin, end)`.
    Rotate {
        /// Incremental rotation applied each step.
        angle: EulerAngles,
        /// Range start.
        begin: f64,
        /// Exclusive range end.
        end: f64,
        /// Range stride.
        step: f64,
    },
    /// Set the projection type. Writes no snapshots.
    Projection {
        /// PTGui projection name.
        value: String,
    },
}

impl TransformAction {
    /// Action name as written in scripts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SetVfov { .. } => "set_vfov",
            Self::SetHfov { .. } => "set_hfov",
            Self::ChangeVfov { .. } => "change_vfov",
            Self::ChangeHfov { .. } => "change_hfov",
            Self::Rotate { .. } => "rotate",
            Self::Projection { .. } => "projection",
        }
    }
}

/// An ordered list of transforms applied to one project.
///
/// Entries are kept as written and only checked when they are about to run, so an unknown
/// action stops a run after the transforms before it have written their output.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformScript {
    /// Script name, used for logging.
    pub name: String,
    /// Transforms in execution order.
    pub transforms: Vec<TransformDef>,
}

/// A script entry as written: an action name plus its raw parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TransformDef {
    action: String,
    name: String,
    #[serde(default)]
    range: Option<Vec<f64>>,
    #[serde(default)]
    angle: Option<EulerAngles>,
    #[serde(default)]
    value: Option<String>,
}

impl TransformDef {
    /// Parse a single entry from JSON without checking the action.
    pub fn from_json(s: &str) -> PtanimResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PtanimError::serde(format!("parse transform JSON: {e}")))
    }

    /// Transform name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Action name as written.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Check the entry and turn it into a runnable [`TransformSpec`].
    pub fn to_spec(&self) -> PtanimResult<TransformSpec> {
        self.clone().try_into()
    }
}

impl From<TransformSpec> for TransformDef {
    fn from(spec: TransformSpec) -> Self {
        let mut def = Self {
            action: spec.action.label().to_owned(),
            name: spec.name,
            range: None,
            angle: None,
            value: None,
        };
        match spec.action {
            TransformAction::SetVfov { target, step }
            | TransformAction::SetHfov { target, step }
            | TransformAction::ChangeVfov { target, step }
            | TransformAction::ChangeHfov { target, step } => {
                def.range = Some(vec![target, step]);
            }
            TransformAction::Rotate {
                angle,
                begin,
                end,
                step,
            } => {
                def.angle = Some(angle);
                def.range = Some(vec![begin, end, step]);
            }
            TransformAction::Projection { value } => def.value = Some(value),
        }
        def
    }
}

#[derive(Debug, Deserialize)]
struct ScriptDef {
    name: String,
    transforms: Vec<TransformDef>,
}

impl TryFrom<TransformDef> for TransformSpec {
    type Error = PtanimError;

    fn try_from(def: TransformDef) -> PtanimResult<Self> {
        let TransformDef {
            action,
            name,
            range,
            angle,
            value,
        } = def;

        let target_step = |range: Option<Vec<f64>>| match range.as_deref() {
            Some(&[target, step]) => Ok((target, step)),
            _ => Err(PtanimError::validation(format!(
                "transform '{name}': {action} needs \"range\": [target, step]"
            ))),
        };

        let action = match action.as_str() {
            "set_vfov" => {
                let (target, step) = target_step(range)?;
                TransformAction::SetVfov { target, step }
            }
            "set_hfov" => {
                let (target, step) = target_step(range)?;
                TransformAction::SetHfov { target, step }
            }
            "change_vfov" => {
                let (target, step) = target_step(range)?;
                TransformAction::ChangeVfov { target, step }
            }
            "change_hfov" => {
                let (target, step) = target_step(range)?;
                TransformAction::ChangeHfov { target, step }
            }
            "rotate" => {
                let angle = angle.ok_or_else(|| {
                    PtanimError::validation(format!(
                        "transform '{name}': rotate needs \"angle\": [yaw, pitch, roll]"
                    ))
                })?;
                let Some(&[begin, end, step]) = range.as_deref() else {
                    return Err(PtanimError::validation(format!(
                        "transform '{name}': rotate needs \"range\": [begin, end, step]"
                    )));
                };
                TransformAction::Rotate {
                    angle,
                    begin,
                    end,
                    step,
                }
            }
            "projection" => {
                let value = value.ok_or_else(|| {
                    PtanimError::validation(format!(
                        "transform '{name}': projection needs \"value\""
                    ))
                })?;
                TransformAction::Projection { value }
            }
            other => return Err(PtanimError::unknown_action(other)),
        };

        Ok(Self { name, action })
    }
}

impl TransformSpec {
    /// Parse a single transform from JSON.
    pub fn from_json(s: &str) -> PtanimResult<Self> {
        TransformDef::from_json(s)?.try_into()
    }
}

impl TransformScript {
    /// Build a script from already checked transforms.
    pub fn new(name: impl Into<String>, specs: impl IntoIterator<Item = TransformSpec>) -> Self {
        Self {
            name: name.into(),
            transforms: specs.into_iter().map(TransformDef::from).collect(),
        }
    }

    /// Parse a script from a JSON reader. Only the JSON shape is checked here.
    pub fn from_reader<R: std::io::Read>(r: R) -> PtanimResult<Self> {
        let def: ScriptDef = serde_json::from_reader(r)
            .map_err(|e| PtanimError::serde(format!("parse transform script JSON: {e}")))?;
        Ok(Self {
            name: def.name,
            transforms: def.transforms,
        })
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PtanimResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PtanimError::validation(format!(
                "open transform script '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/spec.rs"]
mod tests;
