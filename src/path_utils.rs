//! Path normalization utilities
//!
//! Dependency keys must look the same on every host, so everything that turns a
//! path into a key goes through here.

use std::path::{Component, Path, PathBuf};

/// Convert a path to its forward-slash string representation
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `.` and `..` components without touching the file system
///
/// `..` past the root is dropped, matching how `path.join` behaves.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match out.components().next_back() {
                    Some(Component::Normal(_)) => out.pop(),
                    Some(Component::RootDir | Component::Prefix(_)) => true,
                    _ => false,
                };
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Make `path` absolute against the current directory and normalize it
///
/// Symlinks are left alone so that reported source paths stay the ones the
/// caller handed in.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(dunce::simplified(&normalize_lexically(&absolute)).to_path_buf())
}

/// Join a specifier onto a directory the way `path.join` would
pub fn join_normalized(dir: &Path, specifier: &str) -> PathBuf {
    normalize_lexically(&dir.join(specifier))
}

/// Key for a file relative to the entry directory, always forward-slashed
pub fn relative_key(base_dir: &Path, path: &Path) -> String {
    let relative = pathdiff::diff_paths(path, base_dir).unwrap_or_else(|| path.to_path_buf());
    to_forward_slashes(&relative)
}
