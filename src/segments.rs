use serde::{Deserialize, Serialize};
use tracing::debug;

/// A detected silence interval with the detector's confidence score.
///
/// This is the wire triple an external silence detector produces: `start` and
/// `end` in seconds, `confidence` in `[0, 1]`. The confidence range is the
/// detector's contract; the planner only ever uses it as a filter threshold
/// and never as an ordering key, so it is not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SilenceSegment {
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
}

impl SilenceSegment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Sort segments by start time, ascending.
///
/// Detector output is usually sorted already, but the planner never assumes
/// so; it sorts defensively before merging.
pub fn sort_by_start(segments: &mut [SilenceSegment]) {
    segments.sort_by(|a, b| a.start.total_cmp(&b.start));
}

/// Keep only segments the detector scored at or above `min_confidence`.
pub fn filter_by_confidence(
    segments: &[SilenceSegment],
    min_confidence: f64,
) -> Vec<SilenceSegment> {
    let kept: Vec<SilenceSegment> = segments
        .iter()
        .copied()
        .filter(|seg| seg.confidence >= min_confidence)
        .collect();
    debug!(
        dropped = segments.len() - kept.len(),
        min_confidence, "confidence filter applied"
    );
    kept
}

/// Keep only segments at least `min_duration_secs` long.
///
/// Dropping short silences here lets callers tighten the floor when
/// re-planning without re-running detection.
pub fn filter_by_min_duration(
    segments: &[SilenceSegment],
    min_duration_secs: f64,
) -> Vec<SilenceSegment> {
    let kept: Vec<SilenceSegment> = segments
        .iter()
        .copied()
        .filter(|seg| seg.duration() >= min_duration_secs)
        .collect();
    debug!(
        dropped = segments.len() - kept.len(),
        min_duration_secs, "duration filter applied"
    );
    kept
}
