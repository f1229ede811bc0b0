//! Configuration file handling for blockdeps
//!
//! This module contains data structures for:
//! - `blockdeps.yaml` - Module resolution settings

pub mod resolve;

// Re-export commonly used types
pub use resolve::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, ResolveConfig};
