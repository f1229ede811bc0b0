//! File classification by extension

use std::path::Path;

/// Extensions loaded as module code and scanned for imports
pub const MODULE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Extensions inlined as plain text but never scanned
pub const PLAIN_TEXT_EXTENSIONS: &[&str] = &["css", "less", "sass", "scss", "styl", "json"];

/// How a loaded file takes part in the traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Script or markup source; recorded and scanned for nested imports
    Module,
    /// Style sheet or data file; recorded as an inert leaf
    PlainText,
    /// Anything else (images, fonts, ...); never recorded
    Unsupported,
}

impl FileKind {
    /// Classify a path by its extension (case-sensitive)
    pub fn classify(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return FileKind::Unsupported;
        };

        if MODULE_EXTENSIONS.contains(&ext) {
            FileKind::Module
        } else if PLAIN_TEXT_EXTENSIONS.contains(&ext) {
            FileKind::PlainText
        } else {
            FileKind::Unsupported
        }
    }
}
