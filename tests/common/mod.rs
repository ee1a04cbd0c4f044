//! Common test utilities for devup integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory for integration tests
#[allow(dead_code)]
pub struct TestDir {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the directory root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDir {
    /// Create a new scratch directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file, creating parents
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(rel);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Create a directory, returning its path
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let dir = self.path.join(rel);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Write a manifest with a single git-clone target pointed at `dest`
    pub fn clone_target_manifest(&self, dest: &std::path::Path) -> PathBuf {
        let yaml = format!(
            "manifests:\n  - name: tools\n    title: Tools\n    targets:\n      - name: some-tool\n        manager: git-clone\n        url: https://example.invalid/some-tool.git\n        dest: {}\n",
            dest.display()
        );
        self.write_file("manifest.yaml", &yaml)
    }
}
