use std::path::{Path, PathBuf};

// @module: Subtitle-to-video file resolution

/// Find the video file that belongs to a subtitle file.
///
/// Swaps the subtitle extension for each candidate extension in order and
/// returns the first path that exists on disk. Extensions are given without
/// the leading dot, e.g. `["mp4", "mkv"]`.
pub fn find_video<P: AsRef<Path>>(subtitle_path: P, extensions: &[String]) -> Option<PathBuf> {
    let subtitle_path = subtitle_path.as_ref();

    for ext in extensions {
        let candidate = subtitle_path.with_extension(ext);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}
