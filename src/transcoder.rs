use anyhow::{Result, anyhow};
use log::{debug, error};
use std::path::Path;
use tokio::process::Command;

use crate::clip_window::ClipWindow;
use crate::errors::ExtractionError;

// @module: ffmpeg invocation for clip extraction

/// Format a millisecond offset as an ffmpeg time (HH:MM:SS.mmm)
pub fn format_ffmpeg_time(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Vertical padding in pixels for the subtitle overlay.
///
/// `max_lines` is the largest run of consecutive non-blank lines in the
/// overlay SRT text (see `SubtitleCollection::max_block_lines`). Zero lines
/// means no padding at all.
pub fn padding_height(max_lines: usize, line_height: u32, line_spacing: u32) -> u32 {
    let max_lines = max_lines as u32;
    max_lines * line_height + max_lines.saturating_sub(1) * line_spacing
}

/// Cut `window` out of `video_path` into `output_clip`, burning in the
/// subtitle overlay from `overlay_srt` above `padding` pixels of black.
///
/// Blocking from the caller's point of view: the ffmpeg child runs to
/// completion before this returns. A non-zero exit becomes
/// `ExtractionError::TranscoderFailure` carrying the meaningful part of
/// ffmpeg's stderr.
pub async fn extract_clip(
    video_path: &Path,
    window: &ClipWindow,
    output_clip: &Path,
    overlay_srt: &Path,
    padding: u32,
) -> Result<()> {
    let vf_filter = format!(
        "[0:v]pad=iw:ih+{}:0:0:black[sub];[sub]subtitles={}:force_style='Alignment=2'",
        padding,
        escape_filter_value(overlay_srt)
    );

    let start = format_ffmpeg_time(window.start_ms);
    let duration = format_ffmpeg_time(window.duration_ms());

    debug!(
        "Running ffmpeg: seek {} duration {} on {}",
        start,
        duration,
        video_path.display()
    );

    let output = Command::new("ffmpeg")
        .args([
            "-y",
            "-ss", &start,
            "-i", video_path.to_str().unwrap_or_default(),
            "-ss", "0",
            "-to", &duration,
            "-vf", &vf_filter,
            "-c:v", "libx264",
            "-c:a", "aac",
            output_clip.to_str().unwrap_or_default(),
        ])
        .output()
        .await
        .map_err(|e| anyhow!("Failed to execute ffmpeg: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let filtered = filter_ffmpeg_stderr(&stderr);
        error!("Clip extraction failed: {}", filtered);
        return Err(ExtractionError::TranscoderFailure(filtered).into());
    }

    Ok(())
}

/// Quote a path for use as a filtergraph option value.
///
/// The filtergraph parser splits filter options on `:`, so a path containing
/// colons has to be quoted. Inside single quotes everything is literal except
/// the quote itself, which has to leave the quoted region (`'\''`).
pub fn escape_filter_value(path: &Path) -> String {
    let raw = path.to_string_lossy();
    format!("'{}'", raw.replace('\'', r"'\''"))
}

/// Filter ffmpeg stderr to only show meaningful error lines, stripping the
/// version banner, build configuration, and stream metadata noise.
fn filter_ffmpeg_stderr(stderr: &str) -> String {
    let dominated_prefixes = [
        "ffmpeg version",
        "  built with",
        "  configuration:",
        "  lib",
        "Input #",
        "  Metadata:",
        "  Duration:",
        "  Chapter",
        "    Chapter",
        "  Stream #",
        "      Metadata:",
        "        title",
        "        BPS",
        "        DURATION",
        "        NUMBER_OF",
        "        _STATISTICS",
        "Output #",
        "Stream mapping:",
        "Press [q]",
    ];

    let meaningful: Vec<&str> = stderr
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return false;
            }
            !dominated_prefixes.iter().any(|p| line.starts_with(p))
        })
        .collect();

    if meaningful.is_empty() {
        "unknown ffmpeg error (stderr was empty after filtering)".to_string()
    } else {
        meaningful.join("\n")
    }
}
