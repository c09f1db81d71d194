use crate::segments::{self, SilenceSegment};
use crate::sequence::TrackScope;

/// Margin applied around each silence segment before planning, in seconds.
///
/// Padding widens a detected segment on both sides so cuts never land tight
/// against speech: `padded_start = start - padding`, `padded_end = end +
/// padding`, clamped into `[0, sequence duration]`. It is applied once per
/// segment, never cumulatively across overlapping segments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddingSpec {
    secs: f64,
}

impl PaddingSpec {
    /// No padding.
    pub const ZERO: PaddingSpec = PaddingSpec { secs: 0.0 };

    /// Build a padding spec from seconds.
    ///
    /// Padding is a widening margin and never shrinks a segment, so negative
    /// or non-finite input collapses to zero.
    pub fn from_secs(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self { secs }
        } else {
            Self::ZERO
        }
    }

    pub fn secs(&self) -> f64 {
        self.secs
    }
}

/// Options that control how an edit plan is built.
///
/// This struct represents *library-level configuration*, not CLI flags
/// directly. The CLI is responsible for mapping user input into this type so
/// that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (panels, tests, batch jobs) can construct options
///   programmatically
#[derive(Debug, Clone, Default)]
pub struct PlanOpts {
    /// Margin applied around every silence segment before merging.
    pub padding: PaddingSpec,

    /// Which audio tracks the plan targets.
    pub track_scope: TrackScope,

    /// Drop segments the detector scored below this confidence, when set.
    pub min_confidence: Option<f64>,

    /// Drop segments shorter than this many seconds, when set.
    pub min_duration_secs: Option<f64>,
}

impl PlanOpts {
    /// Apply the optional confidence and duration filters.
    ///
    /// Filtering happens before validation on purpose: a segment the caller
    /// asked to ignore should not be able to fail the planning call.
    pub fn apply_filters(&self, silence_segments: &[SilenceSegment]) -> Vec<SilenceSegment> {
        let mut kept = silence_segments.to_vec();
        if let Some(min_confidence) = self.min_confidence {
            kept = segments::filter_by_confidence(&kept, min_confidence);
        }
        if let Some(min_duration) = self.min_duration_secs {
            kept = segments::filter_by_min_duration(&kept, min_duration);
        }
        kept
    }
}
