use crate::batch::sink::{BatchSink, OutputManifest};
use crate::foundation::error::{PtanimError, PtanimResult};
use crate::project::ptgui::ensure_parent_dir;
use std::path::{Path, PathBuf};

/// File extension of PTGui batch lists.
pub const BATCH_EXTENSION: &str = "ptgbatch";

/// Writes `<name>.ptgbatch` batch lists that PTGui's batch stitcher can load.
///
/// Projects are listed disabled so the list can be reviewed before stitching.
#[derive(Clone, Debug)]
pub struct PtgBatchWriter {
    out_dir: PathBuf,
}

impl PtgBatchWriter {
    /// Create a writer that places batch lists in `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Path the batch list for `name` is written to.
    pub fn batch_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(format!("{name}.{BATCH_EXTENSION}"))
    }
}

/// Render a manifest as PTGui batch-list XML.
pub fn render_batch_list(manifest: &OutputManifest) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<PTGuiBatchList>\n");
    for id in manifest {
        out.push_str(&format!(
            "  <Project FileName=\"{}\" Enabled=\"false\" DeleteWhenDone=\"false\"/>\n",
            escape_attr(id)
        ));
    }
    out.push_str("</PTGuiBatchList>\n");
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn write_file(path: &Path, contents: &str) -> PtanimResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents).map_err(|e| {
        PtanimError::project(format!("write batch list '{}': {e}", path.display()))
    })
}

impl BatchSink for PtgBatchWriter {
    fn write_batch(&mut self, name: &str, manifest: &OutputManifest) -> PtanimResult<()> {
        let path = self.batch_path(name);
        write_file(&path, &render_batch_list(manifest))?;
        tracing::info!(path = %path.display(), projects = manifest.len(), "wrote batch list");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/ptgbatch.rs"]
mod tests;
