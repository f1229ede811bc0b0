//! Module resolution for block assets
//!
//! This module handles:
//! - Deciding whether an import stays inside the local tree (internal) or not (external)
//! - Resolving internal specifiers to absolute file paths
//! - Looking up the installed version of external packages

pub mod manifest;
pub mod node;

use std::path::{Path, PathBuf};

use crate::config::ResolveConfig;
use crate::error::{Result, resolve};
use crate::path_utils::join_normalized;

/// How a specifier was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// The build's root file
    Entry,
    /// Any import statement, `require` or dynamic `import()`
    Import,
}

/// One resolve request from the traversal
#[derive(Debug, Clone, Copy)]
pub struct ResolveArgs<'a> {
    pub specifier: &'a str,
    pub kind: ImportKind,
    /// Directory relative specifiers are resolved against
    pub resolve_dir: &'a Path,
    /// File containing the import, for diagnostics
    pub importer: &'a Path,
}

/// Outcome of resolving one specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A file in the local tree; the traversal loads it next
    Internal { path: PathBuf, kind: ImportKind },

    /// A package (or built-in) the traversal never descends into
    ///
    /// `version` is `None` when no manifest with a version was found.
    External {
        specifier: String,
        version: Option<String>,
    },
}

/// Whether a specifier is written relative to its importer
///
/// Any leading `.` counts, which covers `./`, `../` and bare `.`.
pub fn is_relative(specifier: &str) -> bool {
    specifier.starts_with('.')
}

/// Resolves import specifiers against the file system
#[derive(Debug, Clone, Default)]
pub struct ModuleResolver {
    config: ResolveConfig,
}

impl ModuleResolver {
    pub fn new(config: ResolveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Resolve one specifier
    ///
    /// # Errors
    ///
    /// Returns `ModuleNotFound` if the specifier matches no file or package.
    pub fn resolve(&self, args: &ResolveArgs<'_>) -> Result<Resolution> {
        match args.kind {
            // Entry existence is checked by the loader, which may use override code
            ImportKind::Entry => Ok(Resolution::Internal {
                path: join_normalized(args.resolve_dir, args.specifier),
                kind: ImportKind::Entry,
            }),
            ImportKind::Import if is_relative(args.specifier) => self.resolve_internal(args),
            ImportKind::Import => self.resolve_external(args),
        }
    }

    fn resolve_internal(&self, args: &ResolveArgs<'_>) -> Result<Resolution> {
        let candidate = join_normalized(args.resolve_dir, args.specifier);
        let path = node::resolve_file_or_dir(&candidate, &self.config).ok_or_else(|| {
            resolve::module_not_found(args.specifier, args.importer.display().to_string())
        })?;

        log::debug!("Resolved '{}' to {}", args.specifier, path.display());
        Ok(Resolution::Internal {
            path,
            kind: ImportKind::Import,
        })
    }

    fn resolve_external(&self, args: &ResolveArgs<'_>) -> Result<Resolution> {
        if self.config.is_builtin(args.specifier) {
            log::debug!("Skipping built-in module '{}'", args.specifier);
            return Ok(Resolution::External {
                specifier: args.specifier.to_string(),
                version: None,
            });
        }

        let location = node::resolve_package(args.specifier, args.resolve_dir, &self.config)
            .ok_or_else(|| {
                resolve::module_not_found(args.specifier, args.importer.display().to_string())
            })?;

        let version = lookup_version(&location);
        match &version {
            Some(v) => log::debug!("External '{}' at version {}", args.specifier, v),
            None => log::debug!("External '{}' has no versioned manifest", args.specifier),
        }

        Ok(Resolution::External {
            specifier: args.specifier.to_string(),
            version,
        })
    }
}

/// Version of the package owning a resolved module
fn lookup_version(location: &Path) -> Option<String> {
    manifest::find_package_version(location.parent().unwrap_or(location))
}
