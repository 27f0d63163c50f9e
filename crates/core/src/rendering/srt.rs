use std::fmt::Write;

use crate::alignment::aligned_utterance::AlignedUtterance;
use crate::rendering::timecode::format_srt_timestamp;

/// Render utterances as an SRT caption track.
///
/// Cues are numbered from 1 in input order with no gaps. Unlike the
/// plain-text renderer, cue timing uses both `start` and `end` at
/// millisecond precision.
pub fn render_srt(utterances: &[AlignedUtterance]) -> String {
    let mut out = String::new();
    for (index, utterance) in utterances.iter().enumerate() {
        let _ = writeln!(out, "{}", index + 1);
        let _ = writeln!(
            out,
            "{} --> {}",
            format_srt_timestamp(utterance.start),
            format_srt_timestamp(utterance.end)
        );
        let _ = writeln!(out, "{}: {}", utterance.speaker, utterance.text);
        out.push('\n');
    }
    out
}
