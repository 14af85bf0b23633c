//! [`TestReport`] builder for report directory scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary report directory.
///
/// # Example
///
/// ```rust,no_run
/// use kyso_test_utils::TestReport;
///
/// let report = TestReport::new();
/// report.write_json_config("acme", "data", "Quarterly numbers");
/// report.write("index.md", "# Q1");
/// report.assert_file_exists("kyso.json");
/// ```
pub struct TestReport {
    temp_dir: TempDir,
}

impl Default for TestReport {
    fn default() -> Self {
        Self::new()
    }
}

impl TestReport {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the report.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a minimal `kyso.json`.
    pub fn write_json_config(&self, organization: &str, team: &str, title: &str) -> PathBuf {
        self.write(
            "kyso.json",
            &format!(
                "{{\n  \"organization\": \"{organization}\",\n  \"team\": \"{team}\",\n  \"title\": \"{title}\",\n  \"main\": \"index.md\"\n}}\n"
            ),
        )
    }

    /// Write a minimal `kyso.yaml` under `dir` (use `""` for the root).
    pub fn write_yaml_config(&self, dir: &str, organization: &str, team: &str, title: &str) -> PathBuf {
        let relative = if dir.is_empty() {
            "kyso.yaml".to_string()
        } else {
            format!("{dir}/kyso.yaml")
        };
        self.write(
            &relative,
            &format!("organization: {organization}\nteam: {team}\ntitle: {title}\nmain: index.md\n"),
        )
    }

    /// Assert that a file exists relative to the report root.
    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.path(relative).exists(),
            "Expected {relative} to exist in {}",
            self.root().display()
        );
    }

    /// Assert that a file's content equals `expected`.
    pub fn assert_file_content(&self, relative: &str, expected: &str) {
        let actual = fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"));
        assert_eq!(actual, expected, "Content mismatch for {relative}");
    }
}
