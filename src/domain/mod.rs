//! Domain models for blockdeps
//!
//! This module contains pure domain objects: the block asset record produced by a
//! build, the build input, and the file classification table.

pub mod asset;
pub mod context;
pub mod file_kind;

pub use asset::{AssetKind, BlockAsset, Dependency, ParsedBlockAsset, SourcesMap};
pub use context::BuildContext;
pub use file_kind::FileKind;
