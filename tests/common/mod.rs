//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory acting as the repository root and runs the
/// stagegen binary inside it.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run stagegen with `args` against the given release API
    pub fn run(&self, api_url: &str, envs: &[(&str, &str)], args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stagegen"));
        cmd.current_dir(self.path());
        cmd.env("STAGEGEN_API_URL", api_url);
        cmd.env_remove("GITHUB_TOKEN");
        cmd.env_remove("RUST_LOG");
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.args(args);
        cmd.output().expect("Failed to execute stagegen")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// API URL nothing listens on; any lookup against it fails
#[allow(dead_code)]
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

/// Two-project chain: a remote library and the main project using it
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"
[libfoo]
owner = "acme"
dependencies = []
flags = []

[app]
owner = "acme"
dependencies = ["libfoo"]
main = true
tests = false
"#;

/// Configuration with only the main project
#[allow(dead_code)]
pub const MAIN_ONLY_CONFIG: &str = r#"
[app]
owner = "acme"
main = true
flags = ["-DBUILD_PYTHON_INTERFACE=ON"]
"#;

/// Configuration whose dependency is declared after its dependent
#[allow(dead_code)]
pub const FORWARD_REFERENCE_CONFIG: &str = r#"
[app]
owner = "acme"
dependencies = ["libfoo"]
main = true

[libfoo]
owner = "acme"
"#;
