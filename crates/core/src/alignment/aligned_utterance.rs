/// One speaker-attributed utterance, the unit both renderers consume.
///
/// `start`/`end` come from the transcription segment, not the diarization
/// turn; `timestamp` is the segment start pre-rendered for the plain-text
/// output. Exists only between alignment and rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedUtterance {
    pub speaker: String,
    pub timestamp: String,
    pub start: f64,
    pub end: f64,
    pub text: String,
}
