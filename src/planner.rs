//! The edit planner: silence segments in, ordered edit plan out.
//!
//! Current behavior:
//! - Validate every segment against the sequence snapshot.
//! - Widen segments by the configured padding (clamped to the timeline).
//! - Sort and merge the padded intervals into a non-overlapping silence set.
//! - Resolve the track scope, then emit razor cuts and clip removals per
//!   track, latest-first.
//!
//! Why this design:
//! - Merging *after* padding is the only behavior consistent with the
//!   non-overlap invariant: padding can re-introduce overlap between segments
//!   that were disjoint when detected.
//! - Emitting latest-first means an applier that replays the plan never has
//!   an earlier edit shift the coordinates of a later one.
//!
//! Planning is a pure function: the same inputs always produce the same plan,
//! and no call performs I/O or keeps state behind the caller's back. Callers
//! may invoke it concurrently from multiple threads on different inputs.

use tracing::debug;

use crate::error::{Error, Result};
use crate::interval::TimeInterval;
use crate::opts::{PaddingSpec, PlanOpts};
use crate::plan::{CutOperation, EditPlan, RemovalOperation};
use crate::segments::{self, SilenceSegment};
use crate::sequence::{Sequence, Track, TrackScope};

/// Build the edit plan for `sequence` from detected silence segments.
///
/// Fails with [`Error::EmptySequence`], [`Error::InvalidSegment`], or
/// [`Error::UnknownTrack`] before emitting anything; there is no partial-plan
/// state. An empty segment list is valid and yields an empty plan.
pub fn build_edit_plan(
    sequence: &Sequence,
    silence_segments: &[SilenceSegment],
    padding: PaddingSpec,
    track_scope: TrackScope,
) -> Result<EditPlan> {
    sequence.validate()?;

    let silence = pad_and_merge(silence_segments, padding, sequence.duration)?;
    let tracks = track_scope.resolve(sequence)?;

    let mut cuts = Vec::new();
    let mut removals = Vec::new();
    for track in tracks {
        emit_track_ops(track, &silence, &mut cuts, &mut removals);
    }

    debug!(
        regions = silence.len(),
        cuts = cuts.len(),
        removals = removals.len(),
        "edit plan built"
    );

    Ok(EditPlan { cuts, removals })
}

/// Like [`build_edit_plan`], with the optional segment filters from
/// [`PlanOpts`] applied first.
pub fn build_edit_plan_with_opts(
    sequence: &Sequence,
    silence_segments: &[SilenceSegment],
    opts: &PlanOpts,
) -> Result<EditPlan> {
    let kept = opts.apply_filters(silence_segments);
    build_edit_plan(sequence, &kept, opts.padding, opts.track_scope)
}

/// Validate, pad, sort, and merge silence segments into the non-overlapping
/// silence set that every further operation is based on.
///
/// Exposed so report surfaces (markers, summaries) can share the exact merged
/// basis the plan was built from.
pub fn pad_and_merge(
    silence_segments: &[SilenceSegment],
    padding: PaddingSpec,
    sequence_duration: f64,
) -> Result<Vec<TimeInterval>> {
    // Validate before padding: clamping must never hide a malformed segment.
    let mut padded = Vec::with_capacity(silence_segments.len());
    let mut sorted = silence_segments.to_vec();
    segments::sort_by_start(&mut sorted);

    for seg in &sorted {
        validate_segment(seg, sequence_duration)?;
        let start = (seg.start - padding.secs()).max(0.0);
        let end = (seg.end + padding.secs()).min(sequence_duration);
        padded.push(TimeInterval::new(start, end)?);
    }

    // Collapse overlapping *or touching* neighbors. A chain of overlaps merges
    // transitively because each interval extends the last merged one.
    let mut merged: Vec<TimeInterval> = Vec::with_capacity(padded.len());
    for interval in padded {
        match merged.last_mut() {
            Some(last) if interval.start() <= last.end() => {
                *last = last.merged_with(&interval);
            }
            _ => merged.push(interval),
        }
    }

    debug!(
        input = silence_segments.len(),
        merged = merged.len(),
        padding_secs = padding.secs(),
        "silence set merged"
    );

    Ok(merged)
}

fn validate_segment(seg: &SilenceSegment, sequence_duration: f64) -> Result<()> {
    // NaN bounds fail every comparison below, so they are rejected too.
    if !(seg.end > seg.start) {
        return Err(Error::InvalidSegment {
            start: seg.start,
            end: seg.end,
            reason: "end is not after start",
        });
    }
    if !(seg.start >= 0.0) {
        return Err(Error::InvalidSegment {
            start: seg.start,
            end: seg.end,
            reason: "start is negative",
        });
    }
    if seg.end > sequence_duration {
        return Err(Error::InvalidSegment {
            start: seg.start,
            end: seg.end,
            reason: "end is past the sequence duration",
        });
    }
    Ok(())
}

/// Emit the cuts and removals one track needs, latest-first.
fn emit_track_ops(
    track: &Track,
    silence: &[TimeInterval],
    cuts: &mut Vec<CutOperation>,
    removals: &mut Vec<RemovalOperation>,
) {
    let mut track_cuts = Vec::new();
    let mut track_removals = Vec::new();

    for region in silence {
        for bound in [region.start(), region.end()] {
            // A cut exactly on an existing clip boundary, or in a gap, has
            // nothing to split; skipping it keeps the plan minimal and
            // idempotent under re-application.
            if track.clips.iter().any(|clip| clip.strictly_contains(bound)) {
                track_cuts.push(CutOperation {
                    track_index: track.index,
                    at_time: bound,
                });
            }
        }

        for clip in &track.clips {
            // The removable range is the clip's overlap with the silence
            // region: the whole clip when fully enclosed, otherwise the
            // fragment the region's two cuts leave inside it. Either way it
            // never crosses a clip boundary.
            let start = clip.start.max(region.start());
            let end = clip.end.min(region.end());
            if start < end {
                track_removals.push(RemovalOperation {
                    track_index: track.index,
                    start,
                    end,
                });
            }
        }
    }

    // Latest-first, so sequential application never invalidates the
    // coordinates of a not-yet-applied operation on the same track.
    track_cuts.sort_by(|a, b| b.at_time.total_cmp(&a.at_time));
    track_removals.sort_by(|a, b| b.start.total_cmp(&a.start));

    cuts.append(&mut track_cuts);
    removals.append(&mut track_removals);
}
