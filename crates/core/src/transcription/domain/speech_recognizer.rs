use std::path::Path;

use super::transcript::TranscriptionResult;

/// Domain interface for speech-to-text transcription.
///
/// Implementations run inference on a mono 16 kHz WAV file and produce
/// segment-level timestamped text.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, wav_path: &Path) -> Result<TranscriptionResult, Box<dyn std::error::Error>>;
}
