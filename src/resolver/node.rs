//! Node-style module resolution
//!
//! Finds the file a specifier refers to on disk:
//! - exact file, then the file with each configured extension appended
//! - directory: `package.json` main field, then `index.<ext>`
//! - bare specifiers: `node_modules` directories walked upward, honouring `exports`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::ResolveConfig;
use crate::path_utils::join_normalized;

use super::manifest::{MANIFEST_FILE_NAME, PackageManifest};

/// Resolve `path` as a file or a directory
pub fn resolve_file_or_dir(path: &Path, config: &ResolveConfig) -> Option<PathBuf> {
    resolve_as_file(path, config).or_else(|| resolve_as_directory(path, config))
}

fn resolve_as_file(path: &Path, config: &ResolveConfig) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    config
        .extensions
        .iter()
        .map(|ext| append_extension(path, ext))
        .find(|candidate| candidate.is_file())
}

fn resolve_as_directory(dir: &Path, config: &ResolveConfig) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }

    if let Some(manifest) = PackageManifest::load(&dir.join(MANIFEST_FILE_NAME)) {
        if let Some(main) = manifest.main_entry(&config.main_fields) {
            let target = join_normalized(dir, main);
            let found = resolve_as_file(&target, config).or_else(|| resolve_index(&target, config));
            if found.is_some() {
                return found;
            }
        }
    }

    resolve_index(dir, config)
}

fn resolve_index(dir: &Path, config: &ResolveConfig) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }
    resolve_as_file(&dir.join("index"), config)
}

// `a.module` + `.css` must stay `a.module.css`, so no `with_extension` here
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(ext);
    PathBuf::from(raw)
}

/// Split a bare specifier into package name and optional subpath
///
/// `@scope/name/sub/path` → (`@scope/name`, `Some("sub/path")`)
pub fn split_package_specifier(specifier: &str) -> Option<(&str, Option<&str>)> {
    let name_len = if specifier.starts_with('@') {
        let scope_end = specifier.find('/')?;
        let rest = &specifier[scope_end + 1..];
        if rest.is_empty() {
            return None;
        }
        scope_end + 1 + rest.find('/').unwrap_or(rest.len())
    } else {
        specifier.find('/').unwrap_or(specifier.len())
    };

    if name_len == 0 {
        return None;
    }

    let name = &specifier[..name_len];
    let subpath = specifier[name_len..]
        .strip_prefix('/')
        .filter(|sub| !sub.is_empty());
    Some((name, subpath))
}

/// Resolve a non-relative specifier from `resolve_dir`
///
/// Returns the on-disk location of the module, or `None` when nothing matches.
pub fn resolve_package(
    specifier: &str,
    resolve_dir: &Path,
    config: &ResolveConfig,
) -> Option<PathBuf> {
    let as_path = Path::new(specifier);
    if as_path.is_absolute() {
        return resolve_file_or_dir(as_path, config);
    }

    let (name, subpath) = split_package_specifier(specifier)?;

    for dir in resolve_dir.ancestors() {
        if dir.file_name().is_some_and(|n| n == "node_modules") {
            continue;
        }

        let package_dir = dir.join("node_modules").join(name);
        let found = match subpath {
            Some(sub) => resolve_package_subpath(&package_dir, sub, config),
            None => resolve_package_root(&package_dir, config),
        };

        if found.is_some() {
            return found;
        }
    }

    None
}

fn resolve_package_root(package_dir: &Path, config: &ResolveConfig) -> Option<PathBuf> {
    if let Some(found) = resolve_exports(package_dir, ".", config) {
        return Some(found);
    }
    resolve_file_or_dir(package_dir, config)
}

fn resolve_package_subpath(
    package_dir: &Path,
    subpath: &str,
    config: &ResolveConfig,
) -> Option<PathBuf> {
    if let Some(found) = resolve_exports(package_dir, &format!("./{}", subpath), config) {
        return Some(found);
    }
    resolve_file_or_dir(&join_normalized(package_dir, subpath), config)
}

fn resolve_exports(package_dir: &Path, subpath: &str, config: &ResolveConfig) -> Option<PathBuf> {
    let manifest = PackageManifest::load(&package_dir.join(MANIFEST_FILE_NAME))?;
    let target = manifest.exports_entry(subpath, &config.conditions)?;
    let candidate = join_normalized(package_dir, target);
    candidate.is_file().then_some(candidate)
}
