use std::path::{Path, PathBuf};
use std::time::Instant;

use pyannote_rs::{EmbeddingExtractor, EmbeddingManager};

use crate::diarization::domain::speaker_diarizer::SpeakerDiarizer;
use crate::diarization::domain::speaker_turn::SpeakerTurn;

/// Upper bound on distinct speakers tracked per file.
pub const DEFAULT_MAX_SPEAKERS: usize = 6;

/// Cosine-similarity threshold for matching an embedding to a known speaker.
pub const DEFAULT_SPEAKER_THRESHOLD: f32 = 0.5;

/// Turns shorter than this carry too little signal for a stable embedding.
pub const MIN_TURN_DURATION: f64 = 0.5;

/// Label used when no embedding could be computed for a turn.
pub const UNKNOWN_SPEAKER: &str = "UNKNOWN";

/// Speaker diarizer backed by the pyannote segmentation and wespeaker
/// embedding ONNX models via pyannote-rs.
///
/// Segmentation yields speech turns; each turn's embedding is matched
/// against speakers seen earlier in the same file, so labels are stable
/// within a run but carry no meaning across runs.
#[derive(Debug)]
pub struct PyannoteDiarizer {
    segmentation_model: PathBuf,
    embedding_model: PathBuf,
    max_speakers: usize,
}

impl PyannoteDiarizer {
    pub fn new(
        segmentation_model: &Path,
        embedding_model: &Path,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        for model in [segmentation_model, embedding_model] {
            if !model.exists() {
                return Err(format!("Diarization model not found at: {}", model.display()).into());
            }
        }
        Ok(Self {
            segmentation_model: segmentation_model.to_path_buf(),
            embedding_model: embedding_model.to_path_buf(),
            max_speakers: DEFAULT_MAX_SPEAKERS,
        })
    }

    pub fn with_max_speakers(mut self, max_speakers: usize) -> Self {
        self.max_speakers = max_speakers.max(1);
        self
    }
}

impl SpeakerDiarizer for PyannoteDiarizer {
    fn diarize(&self, wav_path: &Path) -> Result<Vec<SpeakerTurn>, Box<dyn std::error::Error>> {
        let started = Instant::now();

        let wav = wav_path.to_str().ok_or("Invalid WAV path")?;
        let (samples, sample_rate) =
            pyannote_rs::read_wav(wav).map_err(|e| format!("Failed to read {wav}: {e}"))?;

        let mut extractor = EmbeddingExtractor::new(&self.embedding_model)
            .map_err(|e| format!("Failed to load embedding model: {e}"))?;
        let mut manager = EmbeddingManager::new(self.max_speakers);

        let segments = pyannote_rs::get_segments(&samples, sample_rate, &self.segmentation_model)
            .map_err(|e| format!("Segmentation failed: {e}"))?;

        let mut turns = Vec::new();
        for segment in segments {
            let segment = match segment {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("Skipping unreadable segment: {e}");
                    continue;
                }
            };

            if segment.end - segment.start < MIN_TURN_DURATION {
                continue;
            }

            let speaker = match extractor.compute(&segment.samples) {
                Ok(embedding) => self.label_speaker(&mut manager, embedding.collect()),
                Err(_) => UNKNOWN_SPEAKER.to_string(),
            };

            turns.push(SpeakerTurn {
                start: segment.start,
                end: segment.end,
                speaker,
            });
        }

        log::info!(
            "Diarization found {} turns in {:.1}s",
            turns.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(turns)
    }
}

impl PyannoteDiarizer {
    /// Match an embedding to a known speaker, registering a new one while
    /// capacity remains. Once the speaker budget is exhausted, fall back to
    /// nearest-match so late segments never mint fresh labels.
    fn label_speaker(&self, manager: &mut EmbeddingManager, embedding: Vec<f32>) -> String {
        let id = if manager.get_all_speakers().len() == self.max_speakers {
            manager.get_best_speaker_match(embedding).ok()
        } else {
            manager.search_speaker(embedding, DEFAULT_SPEAKER_THRESHOLD)
        };
        match id {
            Some(id) => format!("SPEAKER_{id:02}"),
            None => UNKNOWN_SPEAKER.to_string(),
        }
    }
}
