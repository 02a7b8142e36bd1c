/*!
 * Tests for subtitle processing functionality
 */

use std::fmt::Write;
use anyhow::Result;
use kirinuki::errors::SubtitleError;
use kirinuki::subtitle_processor::{SubtitleEntry, SubtitleCollection};
use crate::common;

/// Test timestamp parsing and formatting
#[test]
fn test_timestamp_parsing_withValidTimestamp_shouldParseAndFormat() {
    let ts = "01:23:45,678";
    let ms = SubtitleEntry::parse_timestamp(ts).unwrap();
    assert_eq!(ms, 5025678);

    let formatted = SubtitleEntry::format_timestamp(ms);
    assert_eq!(formatted, ts);
}

/// Test subtitle entry display formatting
#[test]
fn test_subtitle_entry_display_withValidEntry_shouldFormatCorrectly() {
    let entry = SubtitleEntry::new(1, 5000, 10000, "Test subtitle".to_string());
    let mut output = String::new();
    write!(output, "{}", entry).unwrap();

    assert!(output.contains("1"));
    assert!(output.contains("00:00:05,000"));
    assert!(output.contains("00:00:10,000"));
    assert!(output.contains("Test subtitle"));
}

/// Test parsing canned SRT content
#[test]
fn test_parse_srt_string_withValidContent_shouldParseAllEntries() -> Result<()> {
    let entries = SubtitleCollection::parse_srt_string(common::sample_srt())?;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].start_time_ms, 1_000);
    assert_eq!(entries[1].text, "It contains the keyword here.");
    assert_eq!(entries[2].end_time_ms, 7_000);

    // Entries are renumbered sequentially after parsing
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.seq_num, i + 1);
    }

    Ok(())
}

/// Test that multi-line cue text is joined with newlines
#[test]
fn test_parse_srt_string_withMultiLineCue_shouldJoinText() -> Result<()> {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nFirst line\nSecond line\n";
    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "First line\nSecond line");

    Ok(())
}

/// Test that content without valid entries is rejected with the typed error
#[test]
fn test_parse_srt_string_withGarbage_shouldFailWithEmptyError() {
    let result = SubtitleCollection::parse_srt_string("not a subtitle file at all");

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SubtitleError>(),
        Some(SubtitleError::Empty(_))
    ));
}

/// Test that backwards time ranges are skipped but valid entries survive
#[test]
fn test_parse_srt_string_withBackwardsRange_shouldSkipEntry() -> Result<()> {
    let content = "1\n00:00:05,000 --> 00:00:01,000\nBackwards.\n\n2\n00:00:06,000 --> 00:00:07,000\nFine.\n";
    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Fine.");

    Ok(())
}

/// Test that a zero-duration cue (start == end) is retained
#[test]
fn test_parse_srt_string_withZeroDurationCue_shouldRetainIt() -> Result<()> {
    let content = "1\n00:00:01,000 --> 00:00:01,000\nBlink and you miss it.\n\n2\n00:00:02,000 --> 00:00:03,000\nNormal cue.\n";
    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].start_time_ms, 1_000);
    assert_eq!(entries[0].end_time_ms, 1_000);
    assert_eq!(entries[0].text, "Blink and you miss it.");

    Ok(())
}

/// Test that new_validated accepts equal start and end times
#[test]
fn test_new_validated_withZeroDuration_shouldAccept() -> Result<()> {
    let entry = SubtitleEntry::new_validated(1, 5_000, 5_000, "Instant.".to_string())?;
    assert_eq!(entry.start_time_ms, entry.end_time_ms);

    assert!(SubtitleEntry::new_validated(1, 5_000, 4_999, "Backwards.".to_string()).is_err());

    Ok(())
}

/// Test writing a collection and reading it back
#[test]
fn test_write_to_srt_withEntries_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.srt");

    let collection = SubtitleCollection::from_entries(path.clone(), common::sample_entries());
    collection.write_to_srt(&path)?;

    let reparsed = SubtitleCollection::open(&path)?;
    assert_eq!(reparsed.entries.len(), 3);
    assert_eq!(reparsed.entries[1].start_time_ms, 3_000);
    assert_eq!(reparsed.entries[1].end_time_ms, 4_500);

    Ok(())
}

/// Test rendering to an SRT string
#[test]
fn test_to_srt_string_withEntries_shouldContainTimestampLines() {
    let collection =
        SubtitleCollection::from_entries("mem.srt".into(), common::sample_entries());
    let text = collection.to_srt_string();

    assert!(text.contains("00:00:01,000 --> 00:00:02,000"));
    assert!(text.contains("00:00:06,000 --> 00:00:07,000"));
}

/// Test the raw-text line block scan used for overlay padding
#[test]
fn test_max_block_lines_withSampleSrt_shouldCountSeqAndTimestampLines() {
    // Each block is seq + timestamp + one text line
    assert_eq!(SubtitleCollection::max_block_lines(common::sample_srt()), 3);
}

/// Test the block scan against a two-line cue and trailing block
#[test]
fn test_max_block_lines_withMultiLineCue_shouldTrackLargestBlock() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nOne\nTwo\n\n2\n00:00:03,000 --> 00:00:04,000\nShort";
    assert_eq!(SubtitleCollection::max_block_lines(content), 4);
}

/// Test the block scan against empty input
#[test]
fn test_max_block_lines_withEmptyText_shouldBeZero() {
    assert_eq!(SubtitleCollection::max_block_lines(""), 0);
    assert_eq!(SubtitleCollection::max_block_lines("\n\n\n"), 0);
}
