//! Configuration errors

use super::BlockError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> BlockError {
    BlockError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BlockError {
    BlockError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
