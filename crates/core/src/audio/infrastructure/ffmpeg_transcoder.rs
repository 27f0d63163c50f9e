use std::path::{Path, PathBuf};

use crate::audio::domain::audio_transcoder::AudioTranscoder;
use crate::shared::constants::TARGET_SAMPLE_RATE;

/// Transcodes input audio to mono 16 kHz 16-bit PCM WAV using ffmpeg-next,
/// writing the result next to the input with a `.wav` extension.
///
/// Inputs already named `*.wav` are passed through untouched.
pub struct FfmpegTranscoder;

impl FfmpegTranscoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioTranscoder for FfmpegTranscoder {
    fn convert(&self, input: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let is_wav = input
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("wav"))
            .unwrap_or(false);
        if is_wav {
            return Ok(input.to_path_buf());
        }

        let output = input.with_extension("wav");
        log::info!("Converting {} to WAV", input.display());
        let samples = decode_mono_f32(input, TARGET_SAMPLE_RATE)?;
        write_wav(&output, &samples, TARGET_SAMPLE_RATE)?;
        Ok(output)
    }
}

/// Decode the best audio stream to mono f32 samples at the target rate.
fn decode_mono_f32(path: &Path, target_sample_rate: u32) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    ffmpeg_next::init()?;

    let mut ictx = ffmpeg_next::format::input(path)?;

    let audio_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| format!("no audio stream in {}", path.display()))?;

    let audio_stream_index = audio_stream.index();
    let codec_params = audio_stream.parameters();

    let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(codec_params)?;
    let mut decoder = codec_ctx.decoder().audio()?;

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
        ffmpeg_next::ChannelLayout::MONO,
        target_sample_rate,
    )?;

    let mut all_samples: Vec<f32> = Vec::new();
    let mut decoded_frame = ffmpeg_next::util::frame::audio::Audio::empty();
    let mut resampled_frame = ffmpeg_next::util::frame::audio::Audio::empty();

    for (stream, packet) in ictx.packets() {
        if stream.index() != audio_stream_index {
            continue;
        }

        decoder.send_packet(&packet)?;

        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            resampler.run(&decoded_frame, &mut resampled_frame)?;
            extract_f32_samples(&resampled_frame, &mut all_samples);
        }
    }

    // Flush the decoder
    decoder.send_eof()?;
    while decoder.receive_frame(&mut decoded_frame).is_ok() {
        resampler.run(&decoded_frame, &mut resampled_frame)?;
        extract_f32_samples(&resampled_frame, &mut all_samples);
    }

    // Flush the resampler (may have buffered samples)
    if let Ok(Some(delay)) = resampler.flush(&mut resampled_frame) {
        if delay.output > 0 {
            extract_f32_samples(&resampled_frame, &mut all_samples);
        }
    }

    Ok(all_samples)
}

fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * i16::MAX as f32) as i16)?;
    }
    writer.finalize()
}

/// Extract f32 samples from a planar mono resampled frame.
fn extract_f32_samples(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}
