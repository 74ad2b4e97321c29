//! Test environment management
//!
//! Provides isolated test environments with automatic cleanup using RAII.
//! Environment variables are process-global, so tests using this should be
//! marked `#[serial]`.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Configuration for test environment
#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    /// Custom prefix for test directories
    pub prefix: Option<String>,
}

/// Isolated `SPECTRUM_HOME` with automatic cleanup
pub struct TestEnvironment {
    _temp_dir: TempDir,
    root_path: PathBuf,
    /// Saved environment variables for restoration
    saved_env: HashMap<String, Option<String>>,
}

impl TestEnvironment {
    /// Create a new test environment with default config
    pub fn new() -> Result<Self> {
        Self::with_config(TestConfig::default())
    }

    /// Create a new test environment with custom config
    pub fn with_config(config: TestConfig) -> Result<Self> {
        let prefix = config.prefix.as_deref().unwrap_or("spectrum-test");
        let temp_dir = TempDir::with_prefix(prefix).context("Failed to create temporary directory")?;

        let root_path = temp_dir.path().to_path_buf();
        std::fs::create_dir_all(root_path.join("data"))?;

        let mut env = Self {
            _temp_dir: temp_dir,
            root_path,
            saved_env: HashMap::new(),
        };

        env.setup_environment();
        Ok(env)
    }

    fn setup_environment(&mut self) {
        let home_path = self.root_path.to_string_lossy().to_string();
        let data_path = self.data_dir().to_string_lossy().to_string();
        let config_path = self.config_path().to_string_lossy().to_string();

        let vars = [
            ("SPECTRUM_HOME", home_path),
            ("SPECTRUM_DATA_DIR", data_path),
            ("SPECTRUM_CONFIG", config_path),
        ];

        for (key, value) in vars {
            self.saved_env.insert(key.to_string(), std::env::var(key).ok());
            std::env::set_var(key, value);
        }
    }

    /// Get the root path of the test environment
    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Directory exported as `SPECTRUM_DATA_DIR`
    pub fn data_dir(&self) -> PathBuf {
        self.root_path.join("data")
    }

    /// Path exported as `SPECTRUM_CONFIG` (not created)
    pub fn config_path(&self) -> PathBuf {
        self.root_path.join("config.toml")
    }

    /// Write a file in the test environment
    pub fn write_file(&self, path: impl AsRef<Path>, content: &[u8]) -> Result<PathBuf> {
        let full_path = self.root_path.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, content)?;
        Ok(full_path)
    }

    /// Read a file from the test environment
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let full_path = self.root_path.join(path);
        Ok(std::fs::read(full_path)?)
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        for (key, value) in &self.saved_env {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
