#[cfg(feature = "cli")]
use clap::ValueEnum;

/// The supported renderings of a planning run.
///
/// Why this exists:
/// - We want a single, strongly-typed representation of output formats
///   across the CLI and library code.
/// - Using an enum avoids stringly-typed conditionals and keeps format
///   selection explicit and discoverable.
///
/// Integration notes:
/// - `ValueEnum` allows this enum to be used directly as a CLI flag with
///   `clap` (behind the `cli` feature).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum OutputType {
    /// The edit plan as JSON, in required application order.
    Json,

    /// Human-readable silence markers, one line per merged region.
    Markers,

    /// Aggregate statistics for the planning run.
    Summary,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputType::Json => "json",
            OutputType::Markers => "markers",
            OutputType::Summary => "summary",
        };
        f.write_str(name)
    }
}
