use std::fmt::Write;

use crate::alignment::aligned_utterance::AlignedUtterance;

/// Render utterances as one line each: `[<speaker>] <H:MM:SS> – <text>`.
///
/// The separator is an en dash. Output order is alignment order, which is
/// the original transcription order.
pub fn render_plain_text(utterances: &[AlignedUtterance]) -> String {
    let mut out = String::new();
    for utterance in utterances {
        let _ = writeln!(
            out,
            "[{}] {} – {}",
            utterance.speaker, utterance.timestamp, utterance.text
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(speaker: &str, timestamp: &str, text: &str) -> AlignedUtterance {
        AlignedUtterance {
            speaker: speaker.to_string(),
            timestamp: timestamp.to_string(),
            start: 0.0,
            end: 1.0,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_line_shape_is_exact() {
        let out = render_plain_text(&[utterance("S1", "0:00:00", "hello")]);
        assert_eq!(out, "[S1] 0:00:00 – hello\n");
    }

    #[test]
    fn test_one_line_per_utterance_with_trailing_newlines() {
        let out = render_plain_text(&[
            utterance("SPEAKER_00", "0:00:01", "first"),
            utterance("SPEAKER_01", "0:00:04", "second"),
        ]);
        assert_eq!(
            out,
            "[SPEAKER_00] 0:00:01 – first\n[SPEAKER_01] 0:00:04 – second\n"
        );
    }

    #[test]
    fn test_empty_input_renders_empty_string() {
        assert_eq!(render_plain_text(&[]), "");
    }
}
