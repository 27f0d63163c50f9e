use std::path::Path;

use super::speaker_turn::SpeakerTurn;

/// Domain interface for speaker diarization.
///
/// Implementations partition the audio timeline into speaker-attributed
/// turns, returned in the order the model produces them.
pub trait SpeakerDiarizer: Send {
    fn diarize(&self, wav_path: &Path) -> Result<Vec<SpeakerTurn>, Box<dyn std::error::Error>>;
}
