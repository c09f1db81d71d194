use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One clip's span on its track timeline, half-open `[start, end)` in seconds.
///
/// Clips are owned by their track; the planner never mutates them in place.
/// It only produces a plan describing which ranges to remove.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub start: f64,
    pub end: f64,
}

impl Clip {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `time` falls strictly inside the clip, not on a boundary.
    pub fn strictly_contains(&self, time: f64) -> bool {
        self.start < time && time < self.end
    }
}

/// An audio track: a stable index plus its ordered clips.
///
/// Host contract: clips arrive ordered by `start` and non-overlapping; they
/// may be contiguous or gapped. The planner relies on that ordering and does
/// not re-check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub index: usize,
    #[serde(default)]
    pub clips: Vec<Clip>,
}

/// A snapshot of the sequence under edit.
///
/// The snapshot is passed explicitly into every planning call; nothing in this
/// crate caches "the active sequence" behind the caller's back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    /// Display name, carried for reporting only.
    #[serde(default)]
    pub name: Option<String>,
    pub duration: f64,
    pub tracks: Vec<Track>,
}

impl Sequence {
    /// Find a track by its declared index.
    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.iter().find(|track| track.index == index)
    }

    /// A snapshot with no tracks or no timeline has nothing to plan against.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.tracks.is_empty() || !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(Error::EmptySequence);
        }
        Ok(())
    }
}

/// Track scope for a planning call: one specific audio track, or all of them.
///
/// The wire format uses the sentinel index `-1` for "all audio tracks". That
/// sentinel selects scope and is never a track identity; it must be resolved
/// to concrete track indices before planning completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackScope {
    #[default]
    All,
    Track(usize),
}

impl TrackScope {
    /// Map a wire-format track index (`-1` = all tracks) onto a scope.
    pub fn from_wire_index(index: i64) -> Self {
        if index < 0 {
            TrackScope::All
        } else {
            TrackScope::Track(index as usize)
        }
    }

    /// Resolve the scope to the concrete tracks it names.
    pub fn resolve<'a>(&self, sequence: &'a Sequence) -> Result<Vec<&'a Track>> {
        match *self {
            TrackScope::All => Ok(sequence.tracks.iter().collect()),
            TrackScope::Track(index) => {
                sequence
                    .track(index)
                    .map(|track| vec![track])
                    .ok_or(Error::UnknownTrack {
                        index,
                        track_count: sequence.tracks.len(),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_track_sequence() -> Sequence {
        Sequence {
            name: None,
            duration: 60.0,
            tracks: vec![
                Track {
                    index: 0,
                    clips: vec![Clip {
                        start: 0.0,
                        end: 60.0,
                    }],
                },
                Track {
                    index: 1,
                    clips: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn wire_sentinel_selects_all_tracks() {
        assert_eq!(TrackScope::from_wire_index(-1), TrackScope::All);
        assert_eq!(TrackScope::from_wire_index(2), TrackScope::Track(2));
    }

    #[test]
    fn scope_resolution() -> anyhow::Result<()> {
        let sequence = two_track_sequence();
        assert_eq!(TrackScope::All.resolve(&sequence)?.len(), 2);
        assert_eq!(TrackScope::Track(1).resolve(&sequence)?[0].index, 1);
        Ok(())
    }

    #[test]
    fn out_of_range_scope_is_unknown_track() {
        let sequence = two_track_sequence();
        let err = TrackScope::Track(5).resolve(&sequence).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownTrack {
                index: 5,
                track_count: 2
            }
        );
    }

    #[test]
    fn empty_snapshots_are_rejected() {
        let no_tracks = Sequence {
            name: None,
            duration: 10.0,
            tracks: Vec::new(),
        };
        assert_eq!(no_tracks.validate(), Err(Error::EmptySequence));

        let mut zero_duration = two_track_sequence();
        zero_duration.duration = 0.0;
        assert_eq!(zero_duration.validate(), Err(Error::EmptySequence));
    }

    #[test]
    fn deserializes_host_layout() -> anyhow::Result<()> {
        let json = r#"{
            "name": "Main edit",
            "duration": 30.0,
            "tracks": [
                {"index": 0, "clips": [{"start": 0.0, "end": 12.5}, {"start": 12.5, "end": 30.0}]}
            ]
        }"#;
        let sequence: Sequence = serde_json::from_str(json)?;
        assert_eq!(sequence.name.as_deref(), Some("Main edit"));
        assert_eq!(sequence.tracks[0].clips.len(), 2);
        Ok(())
    }
}
