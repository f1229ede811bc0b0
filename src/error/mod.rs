//! Error types and handling for blockdeps
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`resolve`]: Entry and module resolution errors
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors
//! - [`scan`]: Import scanning errors
//! - [`extract`]: Content extraction errors

pub mod config;
pub mod extract;
pub mod fs;
pub mod resolve;
pub mod scan;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for blockdeps operations
#[derive(Error, Diagnostic, Debug)]
pub enum BlockError {
    // Resolution errors
    #[error("Entry point not found: {path}")]
    #[diagnostic(
        code(blockdeps::resolve::entry_not_found),
        help("Pass an existing file, or supply the entry code explicitly")
    )]
    EntryNotFound { path: String },

    #[error("Unsupported entry point extension: {path}")]
    #[diagnostic(
        code(blockdeps::resolve::unsupported_entry),
        help("Entry points must be .js, .jsx, .ts, .tsx, or a plain-text asset")
    )]
    UnsupportedEntry { path: String },

    #[error("Could not resolve '{specifier}' from {importer}")]
    #[diagnostic(
        code(blockdeps::resolve::module_not_found),
        help("Check the import path, or install the package into node_modules")
    )]
    ModuleNotFound { specifier: String, importer: String },

    // Scan errors
    #[error("Failed to parse module {path}: {reason}")]
    #[diagnostic(
        code(blockdeps::scan::syntax_error),
        help("Imports are discovered from a full parse, so the module must be valid JS/TS")
    )]
    SyntaxError { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(blockdeps::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to walk directory: {path}")]
    #[diagnostic(code(blockdeps::fs::walk_failed))]
    WalkFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(blockdeps::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(blockdeps::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(blockdeps::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Extraction errors
    #[error("Invalid regular expression '{pattern}': {reason}")]
    #[diagnostic(
        code(blockdeps::extract::invalid_pattern),
        help("Patterns use Rust regex syntax, optionally wrapped as /body/flags")
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error("No match for '{pattern}' in {file}")]
    #[diagnostic(code(blockdeps::extract::no_match))]
    PatternNotMatched { pattern: String, file: String },

    #[error("Invalid line range: {range}")]
    #[diagnostic(
        code(blockdeps::extract::invalid_range),
        help("Ranges look like L3 or L3-L10")
    )]
    InvalidRange { range: String },

    // Batch errors
    #[error("{failed} of {total} entries failed to build")]
    #[diagnostic(code(blockdeps::batch::failed))]
    BatchFailed { failed: usize, total: usize },
}

impl From<std::io::Error> for BlockError {
    fn from(err: std::io::Error) -> Self {
        BlockError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BlockError {
    fn from(err: serde_yaml::Error) -> Self {
        BlockError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BlockError {
    fn from(err: serde_json::Error) -> Self {
        BlockError::IoError {
            message: format!("JSON serialization failed: {}", err),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BlockError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = BlockError::ModuleNotFound {
            specifier: "./missing".to_string(),
            importer: "/demo/index.tsx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not resolve './missing' from /demo/index.tsx"
        );
    }

    #[test]
    fn test_error_code() {
        let err = BlockError::EntryNotFound {
            path: "/demo/index.tsx".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("blockdeps::resolve::entry_not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BlockError = io_err.into();
        assert!(matches!(err, BlockError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: yaml: content: [unclosed";
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(yaml_str);
        let yaml_err = parse_result.unwrap_err();
        let err: BlockError = yaml_err.into();
        assert!(matches!(err, BlockError::ConfigParseFailed { .. }));
    }

    test_error_contains!(
        test_unsupported_entry_error,
        resolve::unsupported_entry("/demo/readme.md"),
        "Unsupported entry point",
        "readme.md"
    );

    test_error_contains!(
        test_module_not_found_error,
        resolve::module_not_found("some-pkg", "/demo/index.ts"),
        "some-pkg",
        "/demo/index.ts"
    );

    test_error_contains!(
        test_syntax_error,
        scan::syntax_error("/demo/index.tsx", "Unexpected token"),
        "Failed to parse module",
        "Unexpected token"
    );

    test_error_contains!(
        test_file_read_failed_error,
        fs::read_failed("/demo/a.ts", "permission denied"),
        "Failed to read file"
    );

    test_error_contains!(
        test_config_parse_failed_error,
        config::parse_failed("blockdeps.yaml", "unknown field `foo`"),
        "blockdeps.yaml",
        "unknown field"
    );

    test_error_contains!(
        test_invalid_pattern_error,
        extract::invalid_pattern("(", "unclosed group"),
        "Invalid regular expression"
    );

    test_error_contains!(
        test_invalid_range_error,
        extract::invalid_range("X1"),
        "Invalid line range: X1"
    );
}
