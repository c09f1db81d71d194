use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::segments::SilenceSegment;
use crate::sequence::Sequence;

/// The record a silence-detector service hands back after analyzing a
/// sequence's audio.
///
/// Only `silenceSegments` and `originalDuration` are required; the aggregate
/// figures are advisory detector output. The planner always validates
/// segments against the *sequence* snapshot, not against this report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub silence_segments: Vec<SilenceSegment>,
    pub original_duration: f64,
    #[serde(default)]
    pub total_silence_duration: Option<f64>,
    #[serde(default)]
    pub time_saved: Option<f64>,
    /// Detection method tag (e.g. amplitude threshold vs. speech-gap
    /// inference). Informational only.
    #[serde(default)]
    pub method: Option<String>,
}

impl AnalysisReport {
    /// Warn when the detector analyzed a different duration than the sequence
    /// snapshot reports.
    ///
    /// A drift here usually means the analysis ran against a stale export of
    /// the sequence. It is not fatal: segment validation against the snapshot
    /// still catches anything out of bounds.
    pub fn check_against_sequence(&self, sequence: &Sequence) {
        const TOLERANCE_SECS: f64 = 0.5;
        let drift = (self.original_duration - sequence.duration).abs();
        if !(drift <= TOLERANCE_SECS) {
            warn!(
                report_duration = self.original_duration,
                sequence_duration = sequence.duration,
                "analysis duration disagrees with the sequence snapshot"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_detector_response() -> anyhow::Result<()> {
        let json = r#"{
            "silenceSegments": [
                {"start": 4.0, "end": 6.0, "confidence": 0.9},
                {"start": 10.0, "end": 11.0, "confidence": 0.8}
            ],
            "originalDuration": 60.0,
            "totalSilenceDuration": 3.0,
            "timeSaved": 3.0,
            "method": "whisper_enhanced"
        }"#;
        let report: AnalysisReport = serde_json::from_str(json)?;
        assert_eq!(report.silence_segments.len(), 2);
        assert_eq!(report.original_duration, 60.0);
        assert_eq!(report.method.as_deref(), Some("whisper_enhanced"));
        Ok(())
    }

    #[test]
    fn aggregate_fields_are_optional() -> anyhow::Result<()> {
        let json = r#"{"silenceSegments": [], "originalDuration": 12.0}"#;
        let report: AnalysisReport = serde_json::from_str(json)?;
        assert_eq!(report.total_silence_duration, None);
        assert_eq!(report.time_saved, None);
        Ok(())
    }
}
