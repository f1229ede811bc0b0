//! Per-build accumulator
//!
//! Created when a build starts, handed by `&mut` to every resolve and load
//! handler, and consumed into the result when the traversal finishes. A failed
//! build simply drops it.

use std::path::{Path, PathBuf};

use crate::domain::{BlockAsset, BuildContext, Dependency, ParsedBlockAsset, SourcesMap};
use crate::frontmatter::Frontmatter;

/// Mutable state owned by exactly one traversal
#[derive(Debug)]
pub struct BuildState<'a> {
    context: &'a BuildContext,
    entry: PathBuf,
    entry_dir: PathBuf,
    asset: BlockAsset,
    sources: SourcesMap,
    frontmatter: Option<Frontmatter>,
}

impl<'a> BuildState<'a> {
    /// Start a build; `entry` is the absolute, normalized entry path
    pub fn new(context: &'a BuildContext, entry: PathBuf) -> Self {
        let entry_dir = entry
            .parent()
            .map_or_else(|| PathBuf::from("/"), Path::to_path_buf);

        Self {
            context,
            entry,
            entry_dir,
            asset: BlockAsset::new(context.id.clone(), context.ref_atom_ids.clone()),
            sources: SourcesMap::new(),
            frontmatter: None,
        }
    }

    pub fn context(&self) -> &BuildContext {
        self.context
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    /// Base directory for relative dependency keys
    pub fn entry_dir(&self) -> &Path {
        &self.entry_dir
    }

    pub fn asset(&self) -> &BlockAsset {
        &self.asset
    }

    pub fn sources(&self) -> &SourcesMap {
        &self.sources
    }

    pub fn frontmatter(&self) -> Option<&Frontmatter> {
        self.frontmatter.as_ref()
    }

    /// Record an external package at `version`
    pub fn register_npm(&mut self, specifier: &str, version: &str) {
        self.asset.dependencies.insert(
            specifier.to_string(),
            Dependency::Npm(version.to_string()),
        );
    }

    /// Record an inlined file
    pub fn register_file(&mut self, key: &str, content: String) {
        self.asset
            .dependencies
            .insert(key.to_string(), Dependency::File(content));
    }

    /// Remember where a collected file lives on disk
    pub fn record_source(&mut self, key: &str, path: &Path) {
        self.sources.insert(key.to_string(), path.to_path_buf());
    }

    /// Store the entry's frontmatter and mirror its recognized keys onto the asset
    pub fn set_frontmatter(&mut self, frontmatter: Frontmatter) {
        self.asset.apply_frontmatter(&frontmatter);
        self.frontmatter = Some(frontmatter);
    }

    /// Finish the build
    pub fn into_parsed(self) -> ParsedBlockAsset {
        ParsedBlockAsset {
            asset: self.asset,
            sources: self.sources,
            frontmatter: self.frontmatter,
        }
    }
}
