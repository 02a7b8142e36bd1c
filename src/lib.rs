/*!
 * # kirinuki - Subtitle keyword search and clip extractor
 *
 * A Rust library and CLI for cutting keyword-matched moments out of a media
 * library, with the matching subtitle excerpt re-timestamped and burned in.
 *
 * ## Features
 *
 * - Search every SRT file under a folder for cues containing a keyword
 * - Interactive selection of which matches to extract
 * - Time-window resolution with configurable lookback/lookahead cue counts
 * - Re-timestamped SRT excerpt aligned to the extracted clip
 * - ffmpeg transcoding with the excerpt rendered onto padded black bars
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: SRT parsing, formatting and writing
 * - `clip_window`: Window resolution and cue re-timestamping
 * - `search`: Keyword search across a subtitle library
 * - `video_locator`: Subtitle-to-video file resolution
 * - `transcoder`: ffmpeg invocation and overlay padding
 * - `file_utils`: File system operations and clip naming
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod clip_window;
pub mod errors;
pub mod file_utils;
pub mod search;
pub mod subtitle_processor;
pub mod transcoder;
pub mod video_locator;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use clip_window::{ClipWindow, resolve_window, reshift};
pub use search::KeywordMatch;
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use errors::{AppError, ExtractionError, SubtitleError};
