use std::fs;
use std::path::{Path, PathBuf};

use crate::alignment::aligner::align;
use crate::audio::domain::audio_transcoder::AudioTranscoder;
use crate::diarization::domain::speaker_diarizer::SpeakerDiarizer;
use crate::pipeline::config::PipelineConfig;
use crate::rendering::plain_text::render_plain_text;
use crate::rendering::srt::render_srt;
use crate::shared::artifact_paths::ArtifactPaths;
use crate::shared::fingerprint::file_fingerprint;
use crate::transcription::domain::speech_recognizer::SpeechRecognizer;
use crate::transcription::infrastructure::transcript_cache::TranscriptCache;

/// Artifacts written by one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOutput {
    pub plain_transcript: PathBuf,
    pub captions: Option<PathBuf>,
    pub utterance_count: usize,
}

/// Single-shot batch pipeline: fingerprint, transcode, cache-checked
/// transcription, diarization, alignment, rendering.
///
/// Stages run strictly sequentially. Transcription and diarization share no
/// state and could run concurrently, but nothing here requires it at the
/// data scale involved.
pub struct TranscribeDiarizeUseCase {
    transcoder: Box<dyn AudioTranscoder>,
    recognizer: Box<dyn SpeechRecognizer>,
    diarizer: Box<dyn SpeakerDiarizer>,
    config: PipelineConfig,
}

impl TranscribeDiarizeUseCase {
    pub fn new(
        transcoder: Box<dyn AudioTranscoder>,
        recognizer: Box<dyn SpeechRecognizer>,
        diarizer: Box<dyn SpeakerDiarizer>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            transcoder,
            recognizer,
            diarizer,
            config,
        }
    }

    pub fn execute(&self, input: &Path) -> Result<PipelineOutput, Box<dyn std::error::Error>> {
        // 1. Fingerprint the ORIGINAL input bytes, not the transcoded copy,
        //    so cache identity survives re-transcoding
        let fingerprint = file_fingerprint(input)?;
        let paths = ArtifactPaths::for_input(input, &fingerprint);

        // 2. Transcode to the mono 16 kHz WAV both models expect
        let wav = self.transcoder.convert(input)?;

        // 3. Transcription, skipped on a warm cache unless forced
        let cache = TranscriptCache::new(paths.transcript_cache.clone());
        let transcription =
            cache.load_or_transcribe(&wav, self.recognizer.as_ref(), self.config.force_retranscribe)?;

        // 4. Diarization
        let turns = self.diarizer.diarize(&wav)?;

        // 5. Alignment
        log::info!(
            "Aligning {} segments against {} speaker turns",
            transcription.segments.len(),
            turns.len()
        );
        let utterances = align(&transcription.segments, &turns);

        // 6. Rendering
        fs::write(&paths.plain_transcript, render_plain_text(&utterances))?;
        log::info!("Transcript saved to {}", paths.plain_transcript.display());

        let captions = if self.config.emit_captions {
            fs::write(&paths.captions, render_srt(&utterances))?;
            log::info!("Captions saved to {}", paths.captions.display());
            Some(paths.captions.clone())
        } else {
            None
        };

        Ok(PipelineOutput {
            plain_transcript: paths.plain_transcript,
            captions,
            utterance_count: utterances.len(),
        })
    }
}
