use std::fmt::Write as _;

use serde::Serialize;

use crate::interval::TimeInterval;
use crate::plan::EditPlan;
use crate::sequence::Sequence;
use crate::timecode::format_timestamp;

/// Aggregate statistics for one planning run: how many silence regions were
/// found, how much silence there is, and how much timeline the edit saves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub sequence_name: Option<String>,
    pub original_duration: f64,
    pub silence_regions: usize,
    pub total_silence_duration: f64,
    pub time_saved: f64,
    pub cut_count: usize,
    pub removal_count: usize,
}

impl PlanSummary {
    /// Compute a summary from the planner's inputs and output.
    ///
    /// `silence` must be the merged silence set the plan was built from (see
    /// [`crate::planner::pad_and_merge`]); `time_saved` is the material the
    /// plan actually removes, which can be less than the total silence when
    /// regions fall into gaps or off the targeted tracks.
    pub fn compute(sequence: &Sequence, silence: &[TimeInterval], plan: &EditPlan) -> Self {
        Self {
            sequence_name: sequence.name.clone(),
            original_duration: sequence.duration,
            silence_regions: silence.len(),
            total_silence_duration: silence.iter().map(TimeInterval::duration).sum(),
            time_saved: plan.removed_secs(),
            cut_count: plan.cuts.len(),
            removal_count: plan.removals.len(),
        }
    }

    /// Render the summary as human-readable lines.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if let Some(name) = &self.sequence_name {
            let _ = writeln!(out, "Sequence:        {name}");
        }
        let _ = writeln!(
            out,
            "Duration:        {}",
            format_timestamp(self.original_duration)
        );
        let _ = writeln!(out, "Silence regions: {}", self.silence_regions);
        let _ = writeln!(out, "Total silence:   {:.2}s", self.total_silence_duration);
        let _ = writeln!(out, "Time saved:      {:.2}s", self.time_saved);
        let _ = writeln!(
            out,
            "Operations:      {} cuts, {} removals",
            self.cut_count, self.removal_count
        );
        out
    }
}
