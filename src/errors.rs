/*!
 * Error types for the kirinuki application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting a clip
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No video file sits next to the subtitle file
    #[error("No corresponding video file found for subtitle file: {0}")]
    VideoNotFound(PathBuf),

    /// The external transcoder exited non-zero
    #[error("Transcoder failed: {0}")]
    TranscoderFailure(String),

    /// A user-supplied selection index is outside the discovered-matches range
    #[error("Selection index {index} is out of range (found {count} matches)")]
    SelectionOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of discovered matches
        count: usize,
    },
}

/// Errors that can occur during subtitle processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The SRT content yielded no usable entries
    #[error("No valid subtitle entries: {0}")]
    Empty(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from clip extraction
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
