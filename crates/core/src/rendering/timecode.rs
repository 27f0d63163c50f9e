/// Render seconds as `H:MM:SS` with no leading zero on the hour.
///
/// Sub-second precision is discarded by truncation, not rounding.
pub fn format_time(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}

/// Render seconds as an SRT cue timestamp: `HH:MM:SS,mmm`, zero-padded,
/// comma as the decimal separator, millisecond precision.
pub fn format_srt_timestamp(seconds: f64) -> String {
    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}
