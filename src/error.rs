use thiserror::Error;

/// Autocut's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Autocut's crate-wide error type.
///
/// Every variant is a validation failure detected before any edit operation is
/// emitted: a failed planning call never yields a partial plan. This is
/// intentionally decoupled from `anyhow` so downstream libraries aren't forced
/// to adopt `anyhow` in their own public APIs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A silence segment is malformed: inverted, negative, or past the end of
    /// the sequence.
    #[error("invalid silence segment [{start}, {end}): {reason}")]
    InvalidSegment {
        start: f64,
        end: f64,
        reason: &'static str,
    },

    /// The requested track scope does not resolve to any track.
    #[error("unknown track {index} (sequence has {track_count} audio tracks)")]
    UnknownTrack { index: usize, track_count: usize },

    /// The sequence snapshot has no tracks or a non-positive duration.
    #[error("sequence is empty: no tracks or zero duration")]
    EmptySequence,
}
