//! Build input

use std::path::{Path, PathBuf};

/// Input of a single block asset build
///
/// Immutable for the duration of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Absolute path of the entry point
    pub entry: PathBuf,

    /// Asset id
    pub id: String,

    /// Ids of the atoms (components) this block demonstrates
    pub ref_atom_ids: Vec<String>,

    /// Literal entry code used instead of the file contents on disk
    pub entry_point_code: Option<String>,
}

impl BuildContext {
    pub fn new(entry: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            id: id.into(),
            ref_atom_ids: Vec::new(),
            entry_point_code: None,
        }
    }

    pub fn with_ref_atom_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ref_atom_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_entry_point_code(mut self, code: impl Into<String>) -> Self {
        self.entry_point_code = Some(code.into());
        self
    }

    /// Directory the entry lives in; relative dependency keys are based here
    pub fn entry_dir(&self) -> &Path {
        self.entry.parent().unwrap_or_else(|| Path::new("/"))
    }
}
