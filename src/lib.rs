//! blockdeps - static dependency collector for code blocks
//!
//! Builds a self-contained description of a demo snippet: every local file it
//! reaches through relative imports (with source text), every installed package
//! it imports (with version), and metadata parsed from a leading doc comment.

pub mod builder;
pub mod collector;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod frontmatter;
pub mod path_utils;
pub mod resolver;
pub mod scanner;

pub use builder::{AssetBuilder, BuildState, HookSet, build_block_asset};
pub use domain::{AssetKind, BlockAsset, BuildContext, Dependency, FileKind, ParsedBlockAsset};
pub use error::{BlockError, Result};
pub use frontmatter::{ExtractedFrontmatter, Frontmatter, parse_code_frontmatter};
