//! Isolated test environment for CLI invocations.
//!
//! ```no_run
//! use robocat_testing::{TestWorld, fixtures};
//!
//! let world = TestWorld::new().with_catalog(&fixtures::sample_catalog());
//! let result = world.run(&["products", "--format", "json"]).unwrap();
//! assert!(result.success());
//! ```

use anyhow::{Context, Result};
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestWorld {
    temp_dir: TempDir,
    catalog_path: Option<PathBuf>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
            catalog_path: None,
        }
    }

    /// Write a catalog JSON file into the environment; subsequent `run`
    /// calls pass it via `--data`.
    pub fn with_catalog(mut self, catalog: &Value) -> Self {
        let path = self.temp_dir.path().join("catalog.json");
        std::fs::write(&path, catalog.to_string()).expect("Failed to write catalog fixture");
        self.catalog_path = Some(path);
        self
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    /// Absolute path inside the environment, for export destinations.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Run the robocat binary with the world's catalog wired in.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("robocat")
            .map_err(|e| anyhow::anyhow!("Failed to find robocat binary: {}", e))?;

        // Keep the user's real config out of test runs
        cmd.env_remove("ROBOCAT_CATALOG");

        if let Some(path) = &self.catalog_path {
            cmd.arg("--data").arg(path);
        }
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as the JSON emitted under `--format json`.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not valid JSON:\n{}", self.stdout))
    }
}
