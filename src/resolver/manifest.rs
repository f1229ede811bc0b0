//! `package.json` lookup and field access

use std::path::Path;

use serde_json::{Map, Value};

/// Manifest file name searched for when walking up from a module
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// A parsed `package.json`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Parse a manifest from JSON text; `None` unless it is a JSON object
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(fields)) => Some(Self { fields }),
            Ok(_) => None,
            Err(e) => {
                log::debug!("Ignoring unparseable manifest: {}", e);
                None
            }
        }
    }

    /// Read and parse a manifest file; unreadable or malformed files yield `None`
    pub fn load(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let manifest = Self::from_json(&content);
        if manifest.is_none() {
            log::debug!("Manifest {} is not a JSON object", path.display());
        }
        manifest
    }

    pub fn version(&self) -> Option<&str> {
        self.fields.get("version").and_then(Value::as_str)
    }

    /// First of `main_fields` holding a non-empty string
    pub fn main_entry(&self, main_fields: &[String]) -> Option<&str> {
        main_fields
            .iter()
            .filter_map(|field| self.fields.get(field).and_then(Value::as_str))
            .find(|entry| !entry.is_empty())
    }

    /// Target of `exports` for `subpath` (`"."` or `"./feature"`)
    pub fn exports_entry(&self, subpath: &str, conditions: &[String]) -> Option<&str> {
        let exports = self.fields.get("exports")?;

        match exports {
            Value::Object(map) if map.keys().any(|k| k.starts_with('.')) => {
                pick_condition(map.get(subpath)?, conditions)
            }
            // Sugar: a string, array or condition object stands for "."
            other if subpath == "." => pick_condition(other, conditions),
            _ => None,
        }
    }
}

fn pick_condition<'a>(target: &'a Value, conditions: &[String]) -> Option<&'a str> {
    match target {
        Value::String(path) => Some(path),
        Value::Array(items) => items.iter().find_map(|item| pick_condition(item, conditions)),
        // Conditions are tried in configured priority order
        Value::Object(map) => conditions
            .iter()
            .filter_map(|condition| map.get(condition))
            .find_map(|value| pick_condition(value, conditions)),
        _ => None,
    }
}

/// Version of the package containing `start`
///
/// Walks upward and returns the first manifest `version` found. Manifests
/// without one (such as `{"type":"module"}` markers inside a package) are
/// skipped. The walk ends at the package root: a directory directly under
/// `node_modules`, or under a `node_modules/@scope` directory.
pub fn find_package_version(start: &Path) -> Option<String> {
    for dir in start.ancestors() {
        if dir.file_name().is_some_and(|name| name == "node_modules") {
            return None;
        }

        let version = PackageManifest::load(&dir.join(MANIFEST_FILE_NAME))
            .and_then(|manifest| manifest.version().map(ToString::to_string));
        if version.is_some() || is_package_root(dir) {
            return version;
        }
    }
    None
}

fn is_package_root(dir: &Path) -> bool {
    let Some(parent) = dir.parent() else {
        return false;
    };
    if parent.file_name().is_some_and(|name| name == "node_modules") {
        return true;
    }

    let scoped = parent
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('@'));
    scoped
        && parent
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name == "node_modules")
}
