//! Dependency collection for loaded files
//!
//! Called once for every internal file the traversal reaches. Decides whether
//! the file is recorded, under which key, with what content, and whether the
//! traversal should keep scanning it for imports.

use std::path::Path;

use crate::builder::BuildState;
use crate::domain::FileKind;
use crate::error::{Result, fs};
use crate::frontmatter::parse_code_frontmatter;
use crate::path_utils::relative_key;
use crate::resolver::ImportKind;

/// One load request from the traversal
#[derive(Debug, Clone, Copy)]
pub struct LoadArgs<'a> {
    /// Absolute path of the file
    pub path: &'a Path,
    pub kind: ImportKind,
}

/// What the traversal gets back from a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Module code to scan for nested imports
    Module(String),
    /// Plain text, recorded but never scanned
    Text(String),
    /// Not recorded anywhere; a dead end for the traversal
    Unsupported,
}

/// Key a file is recorded under
///
/// The entry is always `index.<ext>`; everything else is its path relative to
/// the entry directory, with forward slashes.
pub fn dependency_key(entry_dir: &Path, path: &Path, kind: ImportKind) -> String {
    match kind {
        ImportKind::Entry => {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
            format!("index.{}", ext)
        }
        ImportKind::Import => relative_key(entry_dir, path),
    }
}

/// Record a loaded file into the build state
///
/// # Errors
///
/// Returns `FileReadFailed` when a supported file cannot be read. Invalid
/// UTF-8 is replaced rather than rejected.
pub fn load(state: &mut BuildState<'_>, args: &LoadArgs<'_>) -> Result<LoadOutcome> {
    let file_kind = FileKind::classify(args.path);
    if file_kind == FileKind::Unsupported {
        log::debug!("Skipping unsupported file {}", args.path.display());
        return Ok(LoadOutcome::Unsupported);
    }

    let is_entry = args.kind == ImportKind::Entry;
    let key = dependency_key(state.entry_dir(), args.path, args.kind);
    let override_code = if is_entry {
        state.context().entry_point_code.clone()
    } else {
        None
    };

    let mut content = match &override_code {
        Some(code) => code.clone(),
        None => read_source(args.path)?,
    };

    if is_entry {
        let extracted = parse_code_frontmatter(&content);
        if let Some(frontmatter) = extracted.frontmatter {
            content = extracted.code;
            state.set_frontmatter(frontmatter);
        }
    }

    log::debug!("Collected {} as '{}'", args.path.display(), key);
    state.register_file(&key, content.clone());

    // Override code has no file behind it worth re-reading
    if !is_entry || override_code.is_none() {
        state.record_source(&key, args.path);
    }

    Ok(match file_kind {
        FileKind::Module => LoadOutcome::Module(content),
        _ => LoadOutcome::Text(content),
    })
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
