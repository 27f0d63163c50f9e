use std::path::{Path, PathBuf};
use std::time::Instant;

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::transcription::domain::speech_recognizer::SpeechRecognizer;
use crate::transcription::domain::transcript::{TranscriptionResult, TranscriptionSegment};

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// Produces segment-level timestamps; the model auto-detects the spoken
/// language.
#[derive(Debug)]
pub struct WhisperRecognizer {
    model_path: PathBuf,
}

impl WhisperRecognizer {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.exists() {
            return Err(format!("Whisper model not found at: {}", model_path.display()).into());
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(
        &self,
        wav_path: &Path,
    ) -> Result<TranscriptionResult, Box<dyn std::error::Error>> {
        let load_start = Instant::now();
        let ctx = WhisperContext::new_with_params(
            self.model_path.to_str().ok_or("Invalid model path")?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| format!("Failed to load Whisper model: {e}"))?;
        log::info!(
            "Whisper model loaded in {:.1}s",
            load_start.elapsed().as_secs_f64()
        );

        let mut state = ctx
            .create_state()
            .map_err(|e| format!("Failed to create Whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some("auto"));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        let samples = read_wav_mono_f32(wav_path)?;

        let inference_start = Instant::now();
        state
            .full(params, &samples)
            .map_err(|e| format!("Whisper inference failed: {e}"))?;
        log::info!(
            "Transcription completed in {:.1}s",
            inference_start.elapsed().as_secs_f64()
        );

        let mut segments = Vec::new();
        let mut full_text = String::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let text = match segment.to_str() {
                Ok(t) => t.to_string(),
                Err(_) => continue,
            };

            // Segment timestamps are in centiseconds (10ms units)
            let start = segment.start_timestamp() as f64 / 100.0;
            let end = segment.end_timestamp() as f64 / 100.0;
            if end <= start {
                continue;
            }

            full_text.push_str(&text);
            segments.push(TranscriptionSegment { start, end, text });
        }

        Ok(TranscriptionResult {
            text: full_text,
            language: None,
            segments,
        })
    }
}

/// Load a WAV file as mono f32 samples normalized to [-1.0, 1.0].
///
/// Interleaved multi-channel input is averaged down to mono.
fn read_wav_mono_f32(path: &Path) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| format!("Failed to open WAV {}: {e}", path.display()))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => reader
            .samples::<i16>()
            .map(|s| s.map(|s| s as f32 / 32768.0))
            .collect::<Result<Vec<_>, _>>()?,
    };

    if spec.channels <= 1 {
        return Ok(interleaved);
    }

    let channels = spec.channels as usize;
    let mono = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect();
    Ok(mono)
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_nonexistent_path_returns_error() {
        let result = WhisperRecognizer::new(Path::new("/nonexistent/model.bin"));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_nonexistent_path_error_message() {
        let result = WhisperRecognizer::new(Path::new("/nonexistent/model.bin"));
        let err = result.unwrap_err().to_string();
        assert!(
            err.contains("not found"),
            "Expected 'not found' in error, got: {err}"
        );
    }

    #[test]
    fn test_read_wav_mono_int16() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("mono.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for value in [0i16, 16384, -16384] {
            writer.write_sample(value).unwrap();
        }
        writer.finalize().unwrap();

        let samples = read_wav_mono_f32(&path).unwrap();
        assert_eq!(samples.len(), 3);
        assert!((samples[1] - 0.5).abs() < 0.001);
        assert!((samples[2] + 0.5).abs() < 0.001);
    }

    #[test]
    fn test_read_wav_downmixes_stereo() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("stereo.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        // Two frames: (L=16384, R=0) and (L=0, R=-16384)
        for value in [16384i16, 0, 0, -16384] {
            writer.write_sample(value).unwrap();
        }
        writer.finalize().unwrap();

        let samples = read_wav_mono_f32(&path).unwrap();
        assert_eq!(samples.len(), 2);
        assert!((samples[0] - 0.25).abs() < 0.001);
        assert!((samples[1] + 0.25).abs() < 0.001);
    }

    #[test]
    fn test_read_wav_missing_file_returns_error() {
        let result = read_wav_mono_f32(Path::new("/nonexistent/audio.wav"));
        assert!(result.is_err());
    }
}
