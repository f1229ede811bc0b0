//! File system errors

use super::BlockError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BlockError {
    BlockError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a walk failed error
pub fn walk_failed(path: impl Into<String>, reason: impl Into<String>) -> BlockError {
    BlockError::WalkFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> BlockError {
    BlockError::IoError {
        message: message.into(),
    }
}
