//! Common test utilities for blockdeps integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary project tree for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, returning its absolute path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Install a fake package into `node_modules` at the workspace root
    pub fn install_package(&self, name: &str, version: &str) {
        self.write_file(
            &format!("node_modules/{}/package.json", name),
            &format!(r#"{{"name":"{}","version":"{}","main":"index.js"}}"#, name, version),
        );
        self.write_file(
            &format!("node_modules/{}/index.js", name),
            "module.exports = {};\n",
        );
    }

    /// Absolute path of a workspace-relative path
    pub fn file(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }

    /// Get path to blockdeps binary
    pub fn blockdeps_bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_blockdeps"))
    }
}
