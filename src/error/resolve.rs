//! Entry and module resolution errors

use super::BlockError;

/// Creates an entry not found error
pub fn entry_not_found(path: impl Into<String>) -> BlockError {
    BlockError::EntryNotFound { path: path.into() }
}

/// Creates an unsupported entry error
pub fn unsupported_entry(path: impl Into<String>) -> BlockError {
    BlockError::UnsupportedEntry { path: path.into() }
}

/// Creates a module not found error
pub fn module_not_found(specifier: impl Into<String>, importer: impl Into<String>) -> BlockError {
    BlockError::ModuleNotFound {
        specifier: specifier.into(),
        importer: importer.into(),
    }
}
