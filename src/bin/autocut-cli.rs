use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use autocut::analysis::AnalysisReport;
use autocut::markers::{MarkerListWriter, markers_for_silence};
use autocut::opts::{PaddingSpec, PlanOpts};
use autocut::output_type::OutputType;
use autocut::planner::{build_edit_plan, pad_and_merge};
use autocut::sequence::{Sequence, TrackScope};
use autocut::summary::PlanSummary;

fn main() -> Result<()> {
    autocut::logging::init();
    let params = get_params()?;

    let sequence: Sequence = read_json(&params.sequence_path)?;
    let report: AnalysisReport = read_json(&params.analysis_path)?;
    report.check_against_sequence(&sequence);

    let opts = PlanOpts {
        padding: PaddingSpec::from_secs(params.padding_secs),
        track_scope: TrackScope::from_wire_index(params.track),
        min_confidence: params.min_confidence,
        min_duration_secs: params.min_duration,
    };

    // Filter once so the plan and the report surfaces share the same basis.
    let segments = opts.apply_filters(&report.silence_segments);
    let plan = build_edit_plan(&sequence, &segments, opts.padding, opts.track_scope)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match params.output_type {
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut writer, &plan)?;
            writeln!(&mut writer)?;
        }
        OutputType::Markers => {
            let silence = pad_and_merge(&segments, opts.padding, sequence.duration)?;
            let mut markers = MarkerListWriter::new(&mut writer);
            for marker in markers_for_silence(&silence) {
                markers.write_marker(&marker)?;
            }
            markers.close()?;
        }
        OutputType::Summary => {
            let silence = pad_and_merge(&segments, opts.padding, sequence.duration)?;
            let summary = PlanSummary::compute(&sequence, &silence, &plan);
            write!(&mut writer, "{}", summary.render_text())?;
        }
    }
    writer.flush()?;

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let file = File::open(path).with_context(|| format!("failed to open '{path}'"))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse '{path}'"))?;
    Ok(value)
}

#[derive(Parser, Debug)]
#[command(name = "autocut")]
#[command(about = "Plan silence-removal edits for a sequence timeline")]
struct Params {
    /// Sequence snapshot JSON: {name?, duration, tracks: [{index, clips}]}.
    #[arg(short = 's', long = "sequence")]
    pub sequence_path: String,

    /// Silence analysis JSON as produced by the detector service.
    #[arg(short = 'a', long = "analysis")]
    pub analysis_path: String,

    /// Target audio track index; -1 applies to every audio track.
    #[arg(
        short = 't',
        long = "track",
        default_value_t = -1,
        allow_hyphen_values = true
    )]
    pub track: i64,

    /// Padding in seconds applied around each silence segment.
    #[arg(short = 'p', long = "padding", default_value_t = 0.0)]
    pub padding_secs: f64,

    /// Drop segments the detector scored below this confidence.
    #[arg(long = "min-confidence")]
    pub min_confidence: Option<f64>,

    /// Drop silence segments shorter than this many seconds.
    #[arg(long = "min-duration")]
    pub min_duration: Option<f64>,

    #[arg(
        short = 'o',
        long = "output-type",
        value_enum,
        default_value_t = OutputType::Json
    )]
    pub output_type: OutputType,
}

fn get_params() -> Result<Params> {
    Ok(Params::parse())
}
