#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use spectrum_core::Dataset;
use spectrum_test::{TestConfig, TestEnvironment};
use std::fs;
use std::path::{Path, PathBuf};

/// Helper to run spectrum CLI command inside an isolated environment
pub fn spectrum_cmd(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("spectrum").unwrap();
    cmd.env("SPECTRUM_HOME", env.root())
        .env("SPECTRUM_DATA_DIR", env.data_dir())
        .env("SPECTRUM_CONFIG", env.config_path())
        .env_remove("SPECTRUM_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Parse a canonical dataset file
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Shared test environment plus input and output directories.
///
/// Exports `SPECTRUM_*` variables for the whole process, so tests using it
/// must be `#[serial]`.
pub struct CliEnvironment {
    pub env: TestEnvironment,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl CliEnvironment {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::with_config(TestConfig {
            prefix: Some("spectrum-cli".to_string()),
        })?;
        let input_dir = env.root().join("input");
        let output_dir = env.root().join("output");

        fs::create_dir_all(&input_dir)?;
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            env,
            input_dir,
            output_dir,
        })
    }

    pub fn home(&self) -> &Path {
        self.env.root()
    }

    pub fn cmd(&self) -> Command {
        spectrum_cmd(&self.env)
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        self.env.write_file(Path::new("input").join(name), content.as_bytes())
    }

    /// Write the config file picked up without `--config`
    pub fn write_default_config(&self, content: &str) -> Result<PathBuf> {
        self.env.write_file("config.toml", content.as_bytes())
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    /// Read a dataset relative to the environment root
    pub fn read_dataset(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let content = self.env.read_file(path)?;
        Ok(serde_json::from_slice(&content)?)
    }
}
