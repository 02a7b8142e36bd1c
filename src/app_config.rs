use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Clip extraction settings
    #[serde(default)]
    pub clip: ClipConfig,

    /// Video extensions probed when locating the video next to a subtitle,
    /// tried in order
    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Clip extraction configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClipConfig {
    /// Number of cues to include before the keyword match
    #[serde(default = "default_prev_count")]
    pub prev_count: usize,

    /// Number of cues to include after the keyword match
    #[serde(default = "default_next_count")]
    pub next_count: usize,

    /// Pixel height of one rendered subtitle line in the overlay padding
    #[serde(default = "default_line_height")]
    pub line_height: u32,

    /// Pixel spacing between rendered subtitle lines
    #[serde(default = "default_line_spacing")]
    pub line_spacing: u32,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            prev_count: default_prev_count(),
            next_count: default_next_count(),
            line_height: default_line_height(),
            line_spacing: default_line_spacing(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_prev_count() -> usize {
    2
}

fn default_next_count() -> usize {
    2
}

fn default_line_height() -> u32 {
    40
}

fn default_line_spacing() -> u32 {
    10
}

fn default_video_extensions() -> Vec<String> {
    ["mp4", "mkv", "avi", "mov", "flv"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.clip.line_height == 0 {
            return Err(anyhow!("clip.line_height must be greater than zero"));
        }

        if self.video_extensions.is_empty() {
            return Err(anyhow!("video_extensions must not be empty"));
        }

        for ext in &self.video_extensions {
            if ext.starts_with('.') {
                return Err(anyhow!(
                    "video_extensions entries must not include the leading dot: {}",
                    ext
                ));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clip: ClipConfig::default(),
            video_extensions: default_video_extensions(),
            log_level: LogLevel::default(),
        }
    }
}
