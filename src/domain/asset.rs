//! Block asset domain types
//!
//! Contains the record returned by a build: the asset itself, the sources map
//! and the frontmatter extracted from the entry point.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::frontmatter::Frontmatter;

/// Map of dependency key to the absolute path it was read from
pub type SourcesMap = BTreeMap<String, PathBuf>;

/// Asset type tag, always `BLOCK` for collected snippets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    #[default]
    #[serde(rename = "BLOCK")]
    Block,
}

/// A single entry of `BlockAsset::dependencies`
///
/// Serializes as `{ "type": "NPM", "value": "<version>" }` or
/// `{ "type": "FILE", "value": "<source text>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Dependency {
    /// External package, recorded by manifest version
    #[serde(rename = "NPM")]
    Npm(String),

    /// Local file, inlined as raw text
    #[serde(rename = "FILE")]
    File(String),
}

impl Dependency {
    /// The wire `value` field: version for packages, content for files
    pub fn value(&self) -> &str {
        match self {
            Dependency::Npm(version) => version,
            Dependency::File(content) => content,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Dependency::File(_))
    }

    pub fn is_npm(&self) -> bool {
        matches!(self, Dependency::Npm(_))
    }
}

/// Asset metadata for one code block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAsset {
    #[serde(rename = "type")]
    pub kind: AssetKind,

    pub id: String,

    pub ref_atom_ids: Vec<String>,

    /// Dependency key -> package version or inlined file
    pub dependencies: BTreeMap<String, Dependency>,

    // Mirrored from frontmatter; kept as raw values so nothing is lost in the copy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Value>,
}

impl BlockAsset {
    /// Create an empty block asset
    pub fn new(id: impl Into<String>, ref_atom_ids: Vec<String>) -> Self {
        Self {
            kind: AssetKind::Block,
            id: id.into(),
            ref_atom_ids,
            ..Self::default()
        }
    }

    /// Copy the recognized metadata keys from frontmatter onto the asset
    ///
    /// Keys missing from `frontmatter` leave the matching field untouched.
    pub fn apply_frontmatter(&mut self, frontmatter: &Frontmatter) {
        let fields = [
            ("description", &mut self.description),
            ("title", &mut self.title),
            ("snapshot", &mut self.snapshot),
            ("keywords", &mut self.keywords),
        ];

        for (key, field) in fields {
            if let Some(value) = frontmatter.get(key) {
                *field = Some(value.clone());
            }
        }
    }

    /// Title as a string, if the frontmatter provided one
    pub fn title_str(&self) -> Option<&str> {
        self.title.as_ref().and_then(Value::as_str)
    }
}

/// Result of building a block asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedBlockAsset {
    pub asset: BlockAsset,

    /// Absolute paths of collected files, for lazy re-reading downstream
    pub sources: SourcesMap,

    /// Parsed entry frontmatter, `None` when the entry carried none
    pub frontmatter: Option<Frontmatter>,
}
