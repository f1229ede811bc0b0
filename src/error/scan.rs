//! Import scanning errors

use super::BlockError;

/// Creates a syntax error for a module that failed to parse
pub fn syntax_error(path: impl Into<String>, reason: impl Into<String>) -> BlockError {
    BlockError::SyntaxError {
        path: path.into(),
        reason: reason.into(),
    }
}
