use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::transcription::domain::speech_recognizer::SpeechRecognizer;
use crate::transcription::domain::transcript::TranscriptionResult;

/// Persists the raw transcription result so repeated runs on the same
/// input skip the model entirely.
///
/// A malformed cache record fails the run instead of silently
/// re-transcribing. There is no locking: concurrent runs against the same
/// cache path may race, which is a documented limitation of the pipeline.
pub struct TranscriptCache {
    path: PathBuf,
}

impl TranscriptCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached result if present (and `force` is off), otherwise
    /// invoke the recognizer and persist its full output.
    pub fn load_or_transcribe(
        &self,
        wav_path: &Path,
        recognizer: &dyn SpeechRecognizer,
        force: bool,
    ) -> Result<TranscriptionResult, Box<dyn std::error::Error>> {
        if !force && self.path.exists() {
            log::info!("Using cached transcription: {}", self.path.display());
            let file = File::open(&self.path)?;
            let result = serde_json::from_reader(BufReader::new(file))?;
            return Ok(result);
        }

        let result = recognizer.transcribe(wav_path)?;

        let file = File::create(&self.path)?;
        serde_json::to_writer(BufWriter::new(file), &result)?;
        log::info!("Transcription saved to {}", self.path.display());

        Ok(result)
    }
}
