use std::path::{Path, PathBuf};

/// Domain interface for converting arbitrary input audio into the
/// mono 16 kHz PCM WAV the models expect.
///
/// Returns the path of the WAV to feed downstream; implementations may
/// return the input path itself when no conversion is needed.
pub trait AudioTranscoder: Send {
    fn convert(&self, input: &Path) -> Result<PathBuf, Box<dyn std::error::Error>>;
}
