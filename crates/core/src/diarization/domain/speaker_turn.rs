/// One diarization turn: a half-open interval `[start, end)` attributed to
/// a single speaker.
///
/// Speaker labels are opaque identifiers with no stability guarantee across
/// runs or files. Turns may be non-contiguous; the alignment tie-break
/// assumes they do not overlap, which is not enforced here.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeakerTurn {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
}

impl SpeakerTurn {
    /// Whether the given instant falls inside this turn's half-open interval.
    pub fn covers(&self, instant: f64) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn turn(start: f64, end: f64) -> SpeakerTurn {
        SpeakerTurn {
            start,
            end,
            speaker: "SPEAKER_00".to_string(),
        }
    }

    #[test]
    fn test_covers_interior_instant() {
        assert!(turn(1.0, 3.0).covers(2.0));
    }

    #[test]
    fn test_covers_is_half_open() {
        let t = turn(1.0, 3.0);
        assert!(t.covers(1.0));
        assert!(!t.covers(3.0));
    }

    #[test]
    fn test_does_not_cover_outside_instant() {
        let t = turn(1.0, 3.0);
        assert!(!t.covers(0.5));
        assert!(!t.covers(4.0));
    }

    #[test]
    fn test_duration() {
        assert_relative_eq!(turn(1.25, 3.75).duration(), 2.5);
    }
}
