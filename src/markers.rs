use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::interval::TimeInterval;
use crate::timecode::format_timestamp;

/// A human-readable marker describing one merged silence region.
///
/// Markers mirror the annotations an editor would place on the timeline for
/// preview: a numbered name at the region start plus a duration comment. They
/// consume plan inputs purely for annotation and are never part of the
/// applier contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SilenceMarker {
    pub name: String,
    pub at: f64,
    pub duration: f64,
    pub comment: String,
}

/// Build one marker per merged silence region, numbered in timeline order.
pub fn markers_for_silence(silence: &[TimeInterval]) -> Vec<SilenceMarker> {
    silence
        .iter()
        .enumerate()
        .map(|(i, region)| SilenceMarker {
            name: format!("Silence {}", i + 1),
            at: region.start(),
            duration: region.duration(),
            comment: format!("Duration: {:.2}s", region.duration()),
        })
        .collect()
}

/// Writes markers as one tab-separated text line each.
///
/// Design:
/// - We stream output directly to a `Write` implementation so markers can go
///   to stdout, a file, or a pipe without buffering the whole report.
/// - We flush after every line so streaming consumers see output promptly.
pub struct MarkerListWriter<W: Write> {
    /// The underlying writer we stream marker lines into.
    w: W,

    /// Whether the writer has been closed.
    /// Once closed, no further writes are allowed.
    closed: bool,
}

impl<W: Write> MarkerListWriter<W> {
    /// Create a new marker writer that writes to the given writer.
    pub fn new(w: W) -> Self {
        Self { w, closed: false }
    }

    /// Write a single marker line: name, timecoded span, comment.
    pub fn write_marker(&mut self, marker: &SilenceMarker) -> Result<()> {
        if self.closed {
            anyhow::bail!("cannot write marker: writer is already closed");
        }

        let start = format_timestamp(marker.at);
        let end = format_timestamp(marker.at + marker.duration);
        writeln!(
            &mut self.w,
            "{}\t{start} --> {end}\t{}",
            marker.name, marker.comment
        )?;
        self.w.flush()?;

        Ok(())
    }

    /// Flush the underlying writer. This is idempotent.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;

        Ok(())
    }
}
