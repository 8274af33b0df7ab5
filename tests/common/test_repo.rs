//! TestRepo builder for CLI integration tests
//!
//! Creates a temporary workspace, fills it with source files and runs the
//! compiled `force-semicolon` binary inside it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Temporary workspace for one test
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the workspace root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a workspace file
    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Add a source file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Read a workspace file back
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file(relative_path)).expect("Failed to read file")
    }

    /// Write a `.force-semicolon.toml` into the workspace root
    pub fn with_config(&self, toml: &str) -> &Self {
        self.add_file(".force-semicolon.toml", toml)
    }

    /// Run the CLI in the workspace and return its output
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_force-semicolon"))
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect failure, return (exit code, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (i32, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }

    // ========================================================================
    // PRE-BUILT WORKSPACES
    // ========================================================================

    /// A small project mixing clean files and files with each diagnostic kind
    pub fn with_mixed_project(&self) -> &Self {
        self.add_file(
            "src/clean.ts",
            "import { run } from \"./run\";\n\nexport function main(): void {\n    run();\n}\n",
        )
        .add_file("src/missing.js", "const a = 1\nconsole.log(a)\n")
        .add_file("src/unnecessary.ts", "function f() {};\nclass C {};\n")
        .add_file("src/extra.mjs", "let x = 1;;\n")
        .add_file("node_modules/dep/index.js", "module.exports = 1\n")
        .add_file("README.md", "# project\n")
    }
}
