//! Content extraction errors

use super::BlockError;

/// Creates an invalid pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> BlockError {
    BlockError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates a pattern not matched error
pub fn not_matched(pattern: impl Into<String>, file: impl Into<String>) -> BlockError {
    BlockError::PatternNotMatched {
        pattern: pattern.into(),
        file: file.into(),
    }
}

/// Creates an invalid range error
pub fn invalid_range(range: impl Into<String>) -> BlockError {
    BlockError::InvalidRange {
        range: range.into(),
    }
}
