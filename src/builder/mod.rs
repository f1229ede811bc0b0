//! Block asset building
//!
//! Runs one static traversal of the import graph rooted at an entry file. The
//! traversal never writes anything and never executes collected code; it only
//! asks the hook pipeline how to resolve each specifier and load each file.
//!
//! ```rust,no_run
//! use blockdeps::{BuildContext, build_block_asset};
//!
//! let ctx = BuildContext::new("/project/demos/basic.tsx", "button-basic")
//!     .with_ref_atom_ids(["Button"]);
//! let parsed = build_block_asset(&ctx)?;
//! println!("{}", parsed.asset.dependencies.len());
//! # Ok::<(), blockdeps::BlockError>(())
//! ```

pub mod hooks;
pub mod state;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::collector::{LoadArgs, LoadOutcome};
use crate::config::ResolveConfig;
use crate::domain::{BuildContext, FileKind, ParsedBlockAsset};
use crate::error::{Result, fs, resolve};
use crate::path_utils::absolutize;
use crate::resolver::{ImportKind, ModuleResolver, Resolution, ResolveArgs};
use crate::scanner::scan_imports;

pub use hooks::HookSet;
pub use state::BuildState;

/// Builds block assets; holds only immutable configuration, so one builder can
/// serve any number of concurrent builds
#[derive(Debug, Clone)]
pub struct AssetBuilder {
    resolver: ModuleResolver,
    hooks: HookSet,
}

impl Default for AssetBuilder {
    fn default() -> Self {
        Self::new(ResolveConfig::default())
    }
}

impl AssetBuilder {
    /// Builder with the dependency-collecting pipeline
    pub fn new(config: ResolveConfig) -> Self {
        Self::with_hooks(config, HookSet::collect_dependencies())
    }

    /// Builder with a custom hook pipeline
    pub fn with_hooks(config: ResolveConfig, hooks: HookSet) -> Self {
        Self {
            resolver: ModuleResolver::new(config),
            hooks,
        }
    }

    pub fn config(&self) -> &ResolveConfig {
        self.resolver.config()
    }

    /// Build the block asset for `context`
    ///
    /// # Errors
    ///
    /// Fails as a whole, with no partial result, when the entry is missing or
    /// unsupported, when any specifier cannot be resolved, or when a collected
    /// file cannot be read.
    pub fn build(&self, context: &BuildContext) -> Result<ParsedBlockAsset> {
        let entry = absolutize(&context.entry).map_err(|e| {
            fs::read_failed(context.entry.display().to_string(), e.to_string())
        })?;
        check_entry(&entry, context)?;

        let mut state = BuildState::new(context, entry);
        self.traverse(&mut state)?;

        let parsed = state.into_parsed();
        log::debug!(
            "Built block '{}' with {} dependencies",
            parsed.asset.id,
            parsed.asset.dependencies.len()
        );
        Ok(parsed)
    }

    fn traverse(&self, state: &mut BuildState<'_>) -> Result<()> {
        let entry = state.entry().to_path_buf();
        let entry_dir = state.entry_dir().to_path_buf();
        let entry_name = entry
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| resolve::entry_not_found(entry.display().to_string()))?;

        let root = self.hooks.dispatch_resolve(
            state,
            &self.resolver,
            &ResolveArgs {
                specifier: &entry_name,
                kind: ImportKind::Entry,
                resolve_dir: &entry_dir,
                importer: &entry,
            },
        )?;

        let mut pending: Vec<(PathBuf, ImportKind)> = Vec::new();
        if let Resolution::Internal { path, kind } = root {
            pending.push((path, kind));
        }

        let mut visited: HashSet<PathBuf> = HashSet::new();
        while let Some((path, kind)) = pending.pop() {
            if !visited.insert(path.clone()) {
                continue;
            }

            let outcome = self
                .hooks
                .dispatch_load(state, &LoadArgs { path: &path, kind })?;

            let code = match outcome {
                LoadOutcome::Module(code) => code,
                LoadOutcome::Text(_) | LoadOutcome::Unsupported => continue,
            };

            let resolve_dir = path.parent().unwrap_or_else(|| Path::new("/"));
            let mut discovered = Vec::new();
            for specifier in scan_imports(&code, &path)? {
                let resolution = self.hooks.dispatch_resolve(
                    state,
                    &self.resolver,
                    &ResolveArgs {
                        specifier: &specifier,
                        kind: ImportKind::Import,
                        resolve_dir,
                        importer: &path,
                    },
                )?;

                if let Resolution::Internal { path, kind } = resolution {
                    discovered.push((path, kind));
                }
            }

            // Reversed so that imports are visited in source order
            pending.extend(discovered.into_iter().rev());
        }

        Ok(())
    }
}

fn check_entry(entry: &Path, context: &BuildContext) -> Result<()> {
    if FileKind::classify(entry) == FileKind::Unsupported {
        return Err(resolve::unsupported_entry(entry.display().to_string()));
    }
    if context.entry_point_code.is_none() && !entry.is_file() {
        return Err(resolve::entry_not_found(entry.display().to_string()));
    }
    Ok(())
}

/// Build a block asset with default resolution settings
///
/// # Errors
///
/// See [`AssetBuilder::build`].
pub fn build_block_asset(context: &BuildContext) -> Result<ParsedBlockAsset> {
    AssetBuilder::default().build(context)
}
