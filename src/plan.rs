use serde::{Deserialize, Serialize};

/// A razor cut: split whatever clip spans `at_time` on the given track.
///
/// Cuts are only emitted for points strictly inside an existing clip. A cut at
/// a clip boundary has nothing to split, so emitting it would make the plan
/// non-minimal and break idempotence under re-application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutOperation {
    pub track_index: usize,
    pub at_time: f64,
}

/// Removal of one clip, or clip fragment, that lies entirely inside a merged
/// silence interval on the given track.
///
/// The range never partially overlaps a clip: it is either a whole clip or the
/// fragment the interval's two cuts leave behind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalOperation {
    pub track_index: usize,
    pub start: f64,
    pub end: f64,
}

impl RemovalOperation {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// The planner's output: every edit needed to trim silence from the targeted
/// tracks.
///
/// Application contract for the external applier: execute every cut before any
/// removal, each array in the order given (descending time per track), so
/// sequential application never shifts the coordinates of a pending operation.
/// A plan is a fresh, disposable value; building one has no side effects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditPlan {
    pub cuts: Vec<CutOperation>,
    pub removals: Vec<RemovalOperation>,
}

impl EditPlan {
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty() && self.removals.is_empty()
    }

    pub fn cuts_for_track(&self, track_index: usize) -> impl Iterator<Item = &CutOperation> {
        self.cuts
            .iter()
            .filter(move |cut| cut.track_index == track_index)
    }

    pub fn removals_for_track(
        &self,
        track_index: usize,
    ) -> impl Iterator<Item = &RemovalOperation> {
        self.removals
            .iter()
            .filter(move |removal| removal.track_index == track_index)
    }

    /// Total duration of material the plan removes, in seconds.
    pub fn removed_secs(&self) -> f64 {
        self.removals.iter().map(RemovalOperation::duration).sum()
    }
}
