use crate::subtitle_processor::SubtitleEntry;

// @module: Time-window selection and cue re-timestamping for clip extraction

/// Inclusive time range selected for extraction, in milliseconds on the
/// subtitle file's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    // @field: Window start in ms
    pub start_ms: u64,

    // @field: Window end in ms
    pub end_ms: u64,
}

impl ClipWindow {
    /// Duration of the window in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// Resolve the extraction window around a matched cue.
///
/// Walks `lookback` cues backward and `lookahead` cues forward from the
/// target. If either walk leaves the sequence, that side of the window falls
/// back to the TARGET cue's own boundary rather than clamping to the first or
/// last cue. Callers must pass a `target_index` within the sequence; an
/// out-of-range index is a contract violation and panics.
pub fn resolve_window(
    entries: &[SubtitleEntry],
    target_index: usize,
    lookback: usize,
    lookahead: usize,
) -> ClipWindow {
    let target = &entries[target_index];

    let start_ms = match target_index.checked_sub(lookback) {
        Some(lo) => entries[lo].start_time_ms,
        None => target.start_time_ms,
    };

    let hi = target_index + lookahead;
    let end_ms = if hi < entries.len() {
        entries[hi].end_time_ms
    } else {
        target.end_time_ms
    };

    ClipWindow { start_ms, end_ms }
}

/// Re-timestamp cues for an extracted excerpt so the window start becomes
/// time zero.
///
/// A cue is retained when its original start lies inside the window,
/// inclusive on both ends: a cue starting exactly at `window.end_ms` is kept,
/// a cue starting strictly after is dropped even if it would partially
/// overlap. Sequence numbers and text are copied unchanged and the output
/// keeps the input order.
pub fn reshift(entries: &[SubtitleEntry], window: &ClipWindow) -> Vec<SubtitleEntry> {
    entries
        .iter()
        .filter(|entry| {
            window.start_ms <= entry.start_time_ms && entry.start_time_ms <= window.end_ms
        })
        .map(|entry| {
            // The inclusion filter guarantees start >= window start, so both
            // subtractions stay non-negative.
            SubtitleEntry::new(
                entry.seq_num,
                entry.start_time_ms - window.start_ms,
                entry.end_time_ms - window.start_ms,
                entry.text.clone(),
            )
        })
        .collect()
}
