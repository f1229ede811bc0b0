//! Module resolution settings (`blockdeps.yaml`)
//!
//! ```yaml
//! extensions: [.tsx, .ts, .js]
//! main_fields: [module, main]
//! conditions: [import, default]
//! builtins: [electron]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Config file looked up next to the entry point
pub const CONFIG_FILE_NAME: &str = "blockdeps.yaml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "BLOCKDEPS_CONFIG";

/// Settings for turning import specifiers into files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveConfig {
    /// Extensions probed, in order, when a specifier names no existing file
    pub extensions: Vec<String>,

    /// `package.json` fields consulted for a package's entry file
    pub main_fields: Vec<String>,

    /// `exports` conditions accepted, in priority order
    pub conditions: Vec<String>,

    /// Extra specifiers treated like node built-ins (external, never registered)
    pub builtins: Vec<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extensions: [".js", ".json", ".node", ".mjs", ".cjs", ".ts", ".tsx", ".jsx"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            main_fields: vec!["main".to_string()],
            conditions: ["require", "node", "default"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            builtins: Vec::new(),
        }
    }
}

impl ResolveConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), reason_of(e)))
    }

    /// Locate and load configuration for a build rooted in `entry_dir`
    ///
    /// Precedence: `explicit`, then `BLOCKDEPS_CONFIG`, then `blockdeps.yaml`
    /// in `entry_dir`. Falls back to defaults when none exist.
    pub fn discover(explicit: Option<&Path>, entry_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            return Self::from_file(&path);
        }

        let local = entry_dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            log::debug!("Using config {}", local.display());
            return Self::from_file(&local);
        }

        Ok(Self::default())
    }

    /// Whether `specifier` names a node built-in module
    pub fn is_builtin(&self, specifier: &str) -> bool {
        if specifier.starts_with("node:") {
            return true;
        }
        let name = specifier.split('/').next().unwrap_or(specifier);
        NODE_BUILTINS.contains(&name) || self.builtins.iter().any(|b| b == specifier || b == name)
    }
}

fn reason_of(err: crate::error::BlockError) -> String {
    match err {
        crate::error::BlockError::ConfigParseFailed { reason, .. } => reason,
        other => other.to_string(),
    }
}

const NODE_BUILTINS: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];
