use crate::alignment::aligned_utterance::AlignedUtterance;
use crate::diarization::domain::speaker_turn::SpeakerTurn;
use crate::rendering::timecode::format_time;
use crate::transcription::domain::transcript::TranscriptionSegment;

/// Merge transcription segments with diarization turns into one sequence of
/// speaker-attributed utterances.
///
/// Each segment is attributed to the first turn (in the order the diarizer
/// produced them) whose half-open interval contains the segment's start
/// instant. Matching ignores the rest of the segment's extent: a segment
/// spanning a speaker change belongs entirely to whoever was speaking when
/// it began. Segments starting in a diarization gap produce no utterance;
/// the dropped count is logged so the loss is visible.
///
/// Linear scan over turns per segment. Segment counts stay in the low
/// thousands for hours of audio, so no interval index is warranted.
pub fn align(segments: &[TranscriptionSegment], turns: &[SpeakerTurn]) -> Vec<AlignedUtterance> {
    let mut aligned = Vec::with_capacity(segments.len());
    let mut dropped = 0usize;

    for segment in segments {
        match turns.iter().find(|turn| turn.covers(segment.start)) {
            Some(turn) => aligned.push(AlignedUtterance {
                speaker: turn.speaker.clone(),
                timestamp: format_time(segment.start),
                start: segment.start,
                end: segment.end,
                text: segment.text.trim().to_string(),
            }),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} transcription segment(s) outside all speaker turns");
    }

    aligned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: f64, end: f64, text: &str) -> TranscriptionSegment {
        TranscriptionSegment {
            start,
            end,
            text: text.to_string(),
        }
    }

    fn turn(start: f64, end: f64, speaker: &str) -> SpeakerTurn {
        SpeakerTurn {
            start,
            end,
            speaker: speaker.to_string(),
        }
    }

    #[test]
    fn test_segment_inside_turn_is_attributed() {
        let aligned = align(&[segment(0.0, 2.0, "a")], &[turn(0.0, 5.0, "S1")]);
        assert_eq!(
            aligned,
            vec![AlignedUtterance {
                speaker: "S1".to_string(),
                timestamp: "0:00:00".to_string(),
                start: 0.0,
                end: 2.0,
                text: "a".to_string(),
            }]
        );
    }

    #[test]
    fn test_segment_in_gap_is_silently_dropped() {
        let aligned = align(
            &[segment(0.0, 2.0, "a"), segment(10.0, 12.0, "b")],
            &[turn(0.0, 5.0, "S1")],
        );
        assert_eq!(aligned.len(), 1);
        assert_eq!(aligned[0].text, "a");
    }

    #[test]
    fn test_utterance_keeps_segment_end_not_turn_end() {
        let aligned = align(&[segment(1.0, 2.5, "x")], &[turn(0.0, 60.0, "S1")]);
        assert_eq!(aligned[0].end, 2.5);
    }

    #[test]
    fn test_matching_uses_start_instant_only() {
        // The segment extends past the turn, but its start is covered
        let aligned = align(&[segment(4.0, 9.0, "spills over")], &[turn(0.0, 5.0, "S1")]);
        assert_eq!(aligned.len(), 1);
        assert_eq!(aligned[0].speaker, "S1");
    }

    #[test]
    fn test_turn_end_is_exclusive() {
        let aligned = align(&[segment(5.0, 6.0, "boundary")], &[turn(0.0, 5.0, "S1")]);
        assert!(aligned.is_empty());
    }

    #[test]
    fn test_first_matching_turn_wins_in_supplied_order() {
        // Overlapping turns violate the diarizer invariant; behavior is
        // defined only as "first match in supplied order"
        let aligned = align(
            &[segment(1.0, 2.0, "contested")],
            &[turn(0.0, 3.0, "S2"), turn(0.5, 4.0, "S1")],
        );
        assert_eq!(aligned[0].speaker, "S2");
    }

    #[test]
    fn test_turns_need_not_be_sorted() {
        let aligned = align(
            &[segment(1.0, 2.0, "a"), segment(8.0, 9.0, "b")],
            &[turn(7.0, 10.0, "S2"), turn(0.0, 3.0, "S1")],
        );
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned[0].speaker, "S1");
        assert_eq!(aligned[1].speaker, "S2");
    }

    #[test]
    fn test_text_is_trimmed() {
        let aligned = align(&[segment(0.0, 1.0, "  hello  ")], &[turn(0.0, 5.0, "S1")]);
        assert_eq!(aligned[0].text, "hello");
    }

    #[test]
    fn test_output_preserves_segment_order() {
        let aligned = align(
            &[
                segment(0.0, 1.0, "one"),
                segment(2.0, 3.0, "two"),
                segment(4.0, 5.0, "three"),
            ],
            &[turn(0.0, 10.0, "S1")],
        );
        let texts: Vec<_> = aligned.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_timestamp_is_rendered_from_segment_start() {
        let aligned = align(&[segment(3725.8, 3727.0, "late")], &[turn(3700.0, 3800.0, "S1")]);
        assert_eq!(aligned[0].timestamp, "1:02:05");
    }

    #[test]
    fn test_no_turns_drops_everything() {
        let aligned = align(&[segment(0.0, 1.0, "a")], &[]);
        assert!(aligned.is_empty());
    }
}
