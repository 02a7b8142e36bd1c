use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};
use tempfile::TempDir;

use crate::app_config::Config;
use crate::clip_window::{resolve_window, reshift};
use crate::errors::ExtractionError;
use crate::file_utils::{self, FileManager};
use crate::search::{self, KeywordMatch};
use crate::subtitle_processor::SubtitleCollection;
use crate::transcoder;
use crate::video_locator;

// @module: Application controller for clip extraction

/// Name of the output folder under the base folder; the search never
/// descends into it
const CLIPS_DIR_NAME: &str = "clips";

/// Main application controller for the search/extract workflow
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Phase one: find every cue under `base_folder` containing `keyword`.
    ///
    /// The `clips` output folder is excluded from the walk so previously
    /// extracted excerpts never match themselves.
    pub fn search(&self, base_folder: &Path, keyword: &str) -> Result<Vec<KeywordMatch>> {
        if !FileManager::dir_exists(base_folder) {
            return Err(anyhow::anyhow!(
                "Base folder does not exist: {:?}",
                base_folder
            ));
        }

        search::search_subtitles(base_folder, keyword, |dir_name| dir_name != CLIPS_DIR_NAME)
    }

    /// Phase two: extract clips for a subset of previously found matches.
    ///
    /// Every selected index is validated against `matches` up front; a single
    /// bad index aborts the run before any extraction starts. Per-item
    /// failures after that point are reported and the batch continues.
    pub async fn extract(
        &self,
        base_folder: &Path,
        keyword: &str,
        matches: &[KeywordMatch],
        selected: &[usize],
        overwrite: bool,
    ) -> Result<()> {
        for &index in selected {
            if index >= matches.len() {
                return Err(ExtractionError::SelectionOutOfRange {
                    index,
                    count: matches.len(),
                }
                .into());
            }
        }

        let clips_dir = base_folder.join(CLIPS_DIR_NAME);
        FileManager::ensure_dir(&clips_dir)?;

        if overwrite {
            FileManager::delete_matching_clips(&clips_dir, keyword)?;
        }

        let progress = ProgressBar::new(selected.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        for &index in selected {
            let keyword_match = &matches[index];
            progress.set_message(
                keyword_match
                    .relative_to(base_folder)
                    .to_string_lossy()
                    .to_string(),
            );

            if let Err(e) = self
                .extract_one(keyword, keyword_match, &clips_dir)
                .await
            {
                error!(
                    "Error extracting clip for {}: {}",
                    keyword_match.subtitle_path.display(),
                    e
                );
            }

            progress.inc(1);
        }

        progress.finish_and_clear();

        Ok(())
    }

    /// Extract a single clip: resolve the window, reshift the cues, run the
    /// transcoder inside a scoped temp dir and move the results into place.
    async fn extract_one(
        &self,
        keyword: &str,
        keyword_match: &KeywordMatch,
        clips_dir: &Path,
    ) -> Result<()> {
        let collection = SubtitleCollection::open(&keyword_match.subtitle_path)?;

        // The file may have changed since the search phase
        if keyword_match.entry_index >= collection.entries.len() {
            warn!(
                "Subtitle file changed since search, skipping: {}",
                keyword_match.subtitle_path.display()
            );
            return Ok(());
        }

        let window = resolve_window(
            &collection.entries,
            keyword_match.entry_index,
            self.config.clip.prev_count,
            self.config.clip.next_count,
        );

        let video_path = video_locator::find_video(
            &keyword_match.subtitle_path,
            &self.config.video_extensions,
        )
        .ok_or_else(|| {
            ExtractionError::VideoNotFound(keyword_match.subtitle_path.clone())
        })?;

        debug!(
            "Extracting {} -> {} from {}",
            transcoder::format_ffmpeg_time(window.start_ms),
            transcoder::format_ffmpeg_time(window.end_ms),
            video_path.display()
        );

        // Scoped temp dir inside the clips folder; cleaned up on every exit
        // path, and renames into the final names stay on one filesystem.
        let temp_dir = TempDir::new_in(clips_dir)
            .context("Failed to create temporary directory for extraction")?;
        let temp_clip = temp_dir.path().join("clip.mp4");
        let temp_srt = temp_dir.path().join("clip.srt");

        let shifted = reshift(&collection.entries, &window);
        let excerpt =
            SubtitleCollection::from_entries(temp_srt.clone(), shifted);

        let srt_text = excerpt.to_srt_string();
        excerpt.write_to_srt(&temp_srt)?;

        let max_lines = SubtitleCollection::max_block_lines(&srt_text);
        let padding = transcoder::padding_height(
            max_lines,
            self.config.clip.line_height,
            self.config.clip.line_spacing,
        );

        transcoder::extract_clip(&video_path, &window, &temp_clip, &temp_srt, padding).await?;

        let label = file_utils::video_label(&video_path);
        let (output_clip, output_srt) = file_utils::clip_output_paths(
            clips_dir,
            keyword,
            &label,
            &file_utils::format_clock_time(window.start_ms),
            &file_utils::format_clock_time(window.end_ms),
        );

        FileManager::move_file(&temp_clip, &output_clip)?;
        FileManager::move_file(&temp_srt, &output_srt)?;

        info!("Extracted clip: {}", output_clip.display());
        info!("Saved SRT: {}", output_srt.display());

        Ok(())
    }
}
