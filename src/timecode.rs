/// Format seconds into an `HH:MM:SS.mmm` timecode.
///
/// Rounding policy:
/// - We round to the nearest millisecond so repeated formatting of derived
///   values (padded starts, merged ends) stays stable.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;

    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;

    let s = total_s % 60;
    let total_m = total_s / 60;

    let m = total_m % 60;
    let h = total_m / 60;

    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
