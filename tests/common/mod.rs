//! Shared testing utilities for pipeline CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness emulating the Kratix container layout in a temp dir.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    input_dir: PathBuf,
    output_dir: PathBuf,
    metadata_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create input/output/metadata directories under a fresh temp root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let input_dir = root.path().join("input");
        let output_dir = root.path().join("output");
        let metadata_dir = root.path().join("metadata");
        for dir in [&input_dir, &output_dir, &metadata_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        Self { root, input_dir, output_dir, metadata_dir }
    }

    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join("object.yaml")
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn metadata_dir(&self) -> &Path {
        &self.metadata_dir
    }

    /// Write the resource request document the pipeline will read.
    pub fn write_request(&self, content: &str) {
        fs::write(self.input_path(), content).expect("Failed to write test request");
    }

    /// Build a request document from spec fields, omitting empty ones.
    pub fn write_stack(&self, name: &str, tier: &str, environment: &str, cluster_name: &str) {
        let mut doc = format!(
            "apiVersion: platform.kratix.io/v1alpha1\nkind: DatadogStack\nmetadata:\n  name: {}\nspec:\n",
            name
        );
        if !tier.is_empty() {
            doc.push_str(&format!("  tier: {}\n", tier));
        }
        if !environment.is_empty() {
            doc.push_str(&format!("  environment: {}\n", environment));
        }
        if !cluster_name.is_empty() {
            doc.push_str(&format!("  clusterName: {}\n", cluster_name));
        }
        self.write_request(&doc);
    }

    /// Build a command for invoking the compiled binary against this layout.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("datadog-configure").expect("binary should build");
        cmd.arg("--input")
            .arg(self.input_path())
            .arg("--output-dir")
            .arg(self.output_dir())
            .arg("--metadata-dir")
            .arg(self.metadata_dir());
        cmd
    }

    /// Read a rendered manifest from the output directory.
    pub fn read_output(&self, filename: &str) -> String {
        fs::read_to_string(self.output_dir.join(filename))
            .unwrap_or_else(|_| panic!("Expected output file {}", filename))
    }

    pub fn output_exists(&self, filename: &str) -> bool {
        self.output_dir.join(filename).exists()
    }

    /// Read the status note from the metadata directory.
    pub fn read_status(&self) -> String {
        fs::read_to_string(self.metadata_dir.join("status.yaml")).expect("Expected status.yaml")
    }
}
