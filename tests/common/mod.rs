//! Common test utilities for tsql-to-pg tests

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempDir};

/// Helper to create a temp SQL file with content
pub fn create_sql_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".sql").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Path to a fixture directory under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Test context with temporary directory for isolated test execution
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub work_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context by copying a fixture's files to a temp directory
    pub fn with_fixture(fixture_name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().to_path_buf();

        for entry in fs::read_dir(fixture_path(fixture_name)).expect("Fixture not found") {
            let entry = entry.unwrap();
            fs::copy(entry.path(), work_dir.join(entry.file_name()))
                .expect("Failed to copy fixture file");
        }

        Self {
            _temp_dir: temp_dir,
            work_dir,
        }
    }

    /// Path to the fixture's input script
    pub fn script_path(&self) -> PathBuf {
        self.work_dir.join("script.sql")
    }

    /// Path where converted DDL is written
    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join("output.sql")
    }

    /// Expected DDL shipped with the fixture
    pub fn expected(&self) -> String {
        read_text(&self.work_dir.join("expected.sql"))
    }

    /// Convert the fixture script, writing to `output_path`
    pub fn convert(&self) -> anyhow::Result<String> {
        tsql_to_pg::convert_file(&tsql_to_pg::ConvertOptions {
            input_path: self.script_path(),
            output_path: Some(self.output_path()),
            verbose: false,
        })
    }
}

/// Read a text file, panicking with the path on failure
pub fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
