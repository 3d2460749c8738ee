//! Shared helpers for engine tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary source directory that cleans itself up on drop.
pub fn create_test_source_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Writes `content` to `name` under the test dir, creating parent folders
/// as needed, and returns the full path.
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dirs");
    }
    std::fs::write(&path, content).expect("failed to write test file");
    path
}
