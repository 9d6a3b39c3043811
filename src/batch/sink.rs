use crate::foundation::error::PtanimResult;
use std::collections::BTreeMap;

/// Ordered identifiers of the snapshots written for one transform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputManifest {
    entries: Vec<String>,
}

impl OutputManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one identifier.
    pub fn push(&mut self, id: impl Into<String>) {
        self.entries.push(id.into());
    }

    /// Identifiers in step order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no snapshot was written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a OutputManifest {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Consumer of finished manifests, called once per stepping transform.
pub trait BatchSink {
    /// Record the manifest produced by the transform called `name`.
    fn write_batch(&mut self, name: &str, manifest: &OutputManifest) -> PtanimResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryBatchSink {
    batches: BTreeMap<String, OutputManifest>,
    order: Vec<String>,
}

impl InMemoryBatchSink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manifest recorded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&OutputManifest> {
        self.batches.get(name)
    }

    /// Transform names in the order their batches were written.
    pub fn order(&self) -> &[String] {
        &self.order
    }
}

impl BatchSink for InMemoryBatchSink {
    fn write_batch(&mut self, name: &str, manifest: &OutputManifest) -> PtanimResult<()> {
        self.order.push(name.to_owned());
        self.batches.insert(name.to_owned(), manifest.clone());
        Ok(())
    }
}
