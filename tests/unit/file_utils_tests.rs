/*!
 * Tests for file naming and filesystem helpers
 */

use anyhow::Result;
use std::path::Path;
use kirinuki::file_utils::{self, FileManager};
use crate::common;

/// Test clock-time formatting for filenames
#[test]
fn test_format_clock_time_withVariousOffsets_shouldZeroPad() {
    assert_eq!(file_utils::format_clock_time(0), "00-00-00");
    assert_eq!(file_utils::format_clock_time(61_000), "00-01-01");
    assert_eq!(file_utils::format_clock_time(3_661_999), "01-01-01");
}

/// Test the video label built from parent directory and file stem
#[test]
fn test_video_label_withNestedPath_shouldJoinParentAndStem() {
    let label = file_utils::video_label(Path::new("/media/Season 1/episode03.mkv"));
    assert_eq!(label, "Season 1-episode03");
}

/// Test the output path construction
#[test]
fn test_clip_output_paths_withTypicalInputs_shouldMatchPattern() {
    let (clip, srt) = file_utils::clip_output_paths(
        Path::new("/media/clips"),
        "頑張る",
        "Season 1-episode03",
        "00-01-01",
        "00-01-09",
    );

    assert_eq!(
        clip,
        Path::new("/media/clips/「頑張る」_[Season 1-episode03]_[00-01-01]_to_[00-01-09].mp4")
    );
    assert_eq!(
        srt,
        Path::new("/media/clips/「頑張る」_[Season 1-episode03]_[00-01-01]_to_[00-01-09].srt")
    );
}

/// Test that output naming is a pure function of its inputs
#[test]
fn test_clip_output_paths_withIdenticalInputs_shouldBeIdempotent() {
    let args = (
        Path::new("/media/clips"),
        "hello",
        "dir-file",
        "00-00-01",
        "00-00-07",
    );

    let first = file_utils::clip_output_paths(args.0, args.1, args.2, args.3, args.4);
    let second = file_utils::clip_output_paths(args.0, args.1, args.2, args.3, args.4);

    assert_eq!(first, second);
}

/// Test ensure_dir and move_file together
#[test]
fn test_move_file_withExistingSource_shouldMoveIntoNewDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let base = temp_dir.path();

    let source = common::create_test_file(base, "a.txt", "payload")?;
    let target = base.join("sub").join("b.txt");

    FileManager::move_file(&source, &target)?;

    assert!(!source.exists());
    assert_eq!(FileManager::read_to_string(&target)?, "payload");

    Ok(())
}

/// Test keyword-scoped clip deletion
#[test]
fn test_delete_matching_clips_withMixedFiles_shouldOnlyDeleteKeyword() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let clips = temp_dir.path();

    let matching = common::create_test_file(clips, "「hello」_[x]_[a]_to_[b].mp4", "x")?;
    let matching_srt = common::create_test_file(clips, "「hello」_[x]_[a]_to_[b].srt", "x")?;
    let other = common::create_test_file(clips, "「bye」_[x]_[a]_to_[b].mp4", "x")?;

    FileManager::delete_matching_clips(clips, "hello")?;

    assert!(!matching.exists());
    assert!(!matching_srt.exists());
    assert!(other.exists());

    Ok(())
}

/// Test that a keyword substring without brackets is not enough to delete
#[test]
fn test_delete_matching_clips_withUnbracketedName_shouldKeepFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let clips = temp_dir.path();

    let plain = common::create_test_file(clips, "hello_notes.txt", "x")?;

    FileManager::delete_matching_clips(clips, "hello")?;

    assert!(plain.exists());
    Ok(())
}
