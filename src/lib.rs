//! `autocut` — a small, focused edit-planning library for silence removal.
//!
//! This crate provides:
//! - A typed data model for sequences, tracks, clips, and silence segments
//! - The edit planner: pad, merge, and turn silence intervals into an ordered
//!   plan of razor cuts and clip removals
//! - Report surfaces (silence markers, plan summaries) for human consumers
//!
//! The planner is a pure function over a sequence snapshot: it never touches a
//! live document, a network service, or storage. Detecting silence and applying
//! the resulting plan to a timeline are the jobs of external collaborators; the
//! library only defines the records exchanged with them.

// High-level API (most consumers should start here).
pub mod opts;
pub mod planner;

// Core data model.
pub mod interval;
pub mod plan;
pub mod segments;
pub mod sequence;

// Detector report ingestion.
pub mod analysis;

// Report rendering for human consumers.
pub mod markers;
pub mod summary;
pub mod timecode;

// Output selection for the CLI surface.
pub mod output_type;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use error::{Error, Result};
