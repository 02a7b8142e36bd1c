use anyhow::Result;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::subtitle_processor::SubtitleCollection;

// @module: Keyword search across a subtitle library

/// One cue that contains the searched keyword
#[derive(Debug, Clone)]
pub struct KeywordMatch {
    // @field: Subtitle file the cue lives in
    pub subtitle_path: PathBuf,

    // @field: Position of the cue in the parsed entry sequence
    pub entry_index: usize,

    // @field: Cue text, for display
    pub text: String,
}

impl KeywordMatch {
    /// Path of the subtitle file relative to a base folder, for display
    pub fn relative_to(&self, base: &Path) -> PathBuf {
        self.subtitle_path
            .strip_prefix(base)
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|_| self.subtitle_path.clone())
    }
}

/// Search every `.srt` file under `base` for cues containing `keyword`.
///
/// Directories are walked depth-first; `should_descend` decides per directory
/// name whether the walker enters it, which is how the caller keeps the
/// output `clips` folder out of the search. Subtitle files that fail to parse
/// are logged and skipped, they never abort the search.
pub fn search_subtitles<P, F>(base: P, keyword: &str, mut should_descend: F) -> Result<Vec<KeywordMatch>>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> bool,
{
    let base = base.as_ref();
    let mut matches = Vec::new();

    let walker = WalkDir::new(base)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .map(&mut should_descend)
                .unwrap_or(true)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_srt = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("srt"))
            .unwrap_or(false);
        if !is_srt {
            continue;
        }

        let collection = match SubtitleCollection::open(path) {
            Ok(collection) => collection,
            Err(e) => {
                warn!("Skipping subtitle file {}: {}", path.display(), e);
                continue;
            }
        };

        for (i, subtitle_entry) in collection.entries.iter().enumerate() {
            if subtitle_entry.text.contains(keyword) {
                matches.push(KeywordMatch {
                    subtitle_path: path.to_path_buf(),
                    entry_index: i,
                    text: subtitle_entry.text.clone(),
                });
            }
        }
    }

    debug!("Found {} matching cue(s) for keyword '{}'", matches.len(), keyword);

    Ok(matches)
}
