/*!
 * Common test utilities for the kirinuki test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use kirinuki::subtitle_processor::SubtitleEntry;

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

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_srt())
}

/// Canned SRT content with three entries; the middle one contains "keyword"
pub fn sample_srt() -> &'static str {
    r#"1
00:00:01,000 --> 00:00:02,000
This is a test subtitle.

2
00:00:03,000 --> 00:00:04,500
It contains the keyword here.

3
00:00:06,000 --> 00:00:07,000
For testing purposes.
"#
}

/// Entries matching `sample_srt`, for tests that work in memory
pub fn sample_entries() -> Vec<SubtitleEntry> {
    vec![
        SubtitleEntry::new(1, 1_000, 2_000, "This is a test subtitle.".to_string()),
        SubtitleEntry::new(2, 3_000, 4_500, "It contains the keyword here.".to_string()),
        SubtitleEntry::new(3, 6_000, 7_000, "For testing purposes.".to_string()),
    ]
}
