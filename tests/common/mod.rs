/*!
 * Common test utilities for the colingo test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

use colingo::translation::TranslationRequest;

// Re-export the mock providers module
pub mod mock_providers;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample CSV file for testing
pub fn create_test_csv(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = "id,title,notes\n\
                   1,Hello world,First row\n\
                   2,Good morning,Second row\n\
                   3,,Third row has an empty title\n";
    create_test_file(dir, filename, content)
}

/// A translation request with zero delay so tests run fast
pub fn fast_request(target_language: &str) -> TranslationRequest {
    TranslationRequest::new(target_language).delay(Duration::ZERO)
}
