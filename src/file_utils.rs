use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use log::info;

// @module: File and directory utilities, clip naming

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Move a file into place, ensuring the target directory exists
    pub fn move_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();

        if !from.exists() {
            return Err(anyhow::anyhow!("Source file does not exist: {:?}", from));
        }

        if let Some(parent) = to.parent() {
            Self::ensure_dir(parent)?;
        }

        // rename only works within one filesystem; fall back to copy+remove
        if fs::rename(from, to).is_err() {
            fs::copy(from, to)
                .with_context(|| format!("Failed to copy {:?} to {:?}", from, to))?;
            fs::remove_file(from)?;
        }

        Ok(())
    }

    /// Delete every file under `clips_dir` whose name contains `「keyword」`
    pub fn delete_matching_clips<P: AsRef<Path>>(clips_dir: P, keyword: &str) -> Result<()> {
        let marker = format!("「{}」", keyword);

        for entry in WalkDir::new(clips_dir.as_ref()).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
            if name.contains(&marker) {
                fs::remove_file(path)
                    .with_context(|| format!("Failed to delete existing clip: {:?}", path))?;
                info!("Deleted existing file: {}", path.display());
            }
        }

        Ok(())
    }
}

/// Format a millisecond offset as a filename-safe clock time (HH-MM-SS)
pub fn format_clock_time(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;

    format!("{:02}-{:02}-{:02}", hours, minutes, seconds)
}

/// Label for a video file built from its parent directory name and file stem,
/// e.g. `Season 1-episode03`
pub fn video_label<P: AsRef<Path>>(video_path: P) -> String {
    let video_path = video_path.as_ref();

    let parent = video_path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let stem = video_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    format!("{}-{}", parent, stem)
}

/// Deterministic output paths for the clip and its subtitle excerpt.
///
/// Pure function of its inputs: the same arguments always produce the same
/// pair of paths.
pub fn clip_output_paths(
    clips_dir: &Path,
    keyword: &str,
    video_label: &str,
    start_clock: &str,
    end_clock: &str,
) -> (PathBuf, PathBuf) {
    let stem = format!(
        "「{}」_[{}]_[{}]_to_[{}]",
        keyword, video_label, start_clock, end_clock
    );

    let output_clip = clips_dir.join(format!("{}.mp4", stem));
    let output_srt = clips_dir.join(format!("{}.srt", stem));

    (output_clip, output_srt)
}
