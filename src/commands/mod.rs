//! Command implementations for the blockdeps CLI

pub mod batch;
pub mod completions;
pub mod extract;
pub mod parse;
pub mod version;
