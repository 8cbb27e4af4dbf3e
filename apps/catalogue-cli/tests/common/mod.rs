//! Common test utilities for converter integration tests.

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use catalogue_cli::config::Config;
use catalogue_core::ParseOptions;
use tempfile::TempDir;

/// Scratch data and output directories with a matching config.
pub struct TestContext {
    _dir: TempDir,
    pub config: Config,
}

impl TestContext {
    pub fn new(languages: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config {
            data_dir: dir.path().join("data"),
            output_dir: dir.path().join("out"),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            year: 2024,
            options: ParseOptions::default(),
        };
        fs::create_dir_all(&config.data_dir).expect("Failed to create data dir");

        Self { _dir: dir, config }
    }

    /// Write both source files for `language`.
    pub fn write_sources(&self, language: &str, catalogue: &str, keys: &str) {
        fs::write(self.config.catalogue_path(language), catalogue).expect("Failed to write catalogue");
        fs::write(self.config.key_path(language), keys).expect("Failed to write keys");
    }

    pub fn output_path(&self, language: &str) -> PathBuf {
        self.config.output_path(language)
    }

    pub fn read_output(&self, language: &str) -> serde_json::Value {
        let content = fs::read_to_string(self.output_path(language)).expect("Missing output file");
        serde_json::from_str(&content).expect("Output is not valid JSON")
    }
}
