use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use speakscribe_core::audio::infrastructure::ffmpeg_transcoder::FfmpegTranscoder;
use speakscribe_core::diarization::infrastructure::pyannote_diarizer::PyannoteDiarizer;
use speakscribe_core::pipeline::config::{ModelSize, PipelineConfig};
use speakscribe_core::pipeline::transcribe_diarize_use_case::TranscribeDiarizeUseCase;
use speakscribe_core::shared::constants::{
    DIARIZATION_ACCESS_GRANTS, EMBEDDING_MODEL_NAME, EMBEDDING_MODEL_URL, HUGGINGFACE_TOKEN_VAR,
    SEGMENTATION_MODEL_NAME, SEGMENTATION_MODEL_URL,
};
use speakscribe_core::shared::model_resolver;
use speakscribe_core::transcription::infrastructure::whisper_recognizer::WhisperRecognizer;

/// Speaker-attributed transcription for audio files.
#[derive(Parser)]
#[command(name = "speakscribe")]
struct Cli {
    /// Input audio file.
    input: PathBuf,

    /// Re-run transcription even if a cached transcript exists.
    #[arg(long)]
    force: bool,

    /// Additionally emit an SRT caption file.
    #[arg(long)]
    srt: bool,

    /// Whisper model size: tiny, base, small, medium, large.
    #[arg(long, default_value = "medium")]
    model: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    validate(&cli)?;

    let token = env::var(HUGGINGFACE_TOKEN_VAR).map_err(|_| {
        format!(
            "Hugging Face token not found. Define {HUGGINGFACE_TOKEN_VAR} in the environment or a .env file."
        )
    })?;

    let config = PipelineConfig {
        model_size: cli.model.parse::<ModelSize>()?,
        force_retranscribe: cli.force,
        emit_captions: cli.srt,
    };

    let recognizer = build_recognizer(&config)?;
    let diarizer = build_diarizer(&token)?;

    let use_case = TranscribeDiarizeUseCase::new(
        Box::new(FfmpegTranscoder::new()),
        Box::new(recognizer),
        Box::new(diarizer),
        config,
    );

    let output = use_case.execute(&cli.input)?;
    log::info!(
        "Done: {} utterance(s) written to {}",
        output.utterance_count,
        output.plain_transcript.display()
    );
    Ok(())
}

fn build_recognizer(config: &PipelineConfig) -> Result<WhisperRecognizer, Box<dyn std::error::Error>> {
    let name = config.model_size.model_name();
    log::info!("Resolving Whisper model: {name}");
    let model_path = model_resolver::resolve(
        name,
        &config.model_size.model_url(),
        None,
        Some(Box::new(|downloaded, total| {
            download_progress("Whisper model", downloaded, total)
        })),
    )?;
    eprintln!();

    Ok(WhisperRecognizer::new(&model_path)?)
}

fn build_diarizer(token: &str) -> Result<PyannoteDiarizer, Box<dyn std::error::Error>> {
    let models = [
        (SEGMENTATION_MODEL_NAME, SEGMENTATION_MODEL_URL),
        (EMBEDDING_MODEL_NAME, EMBEDDING_MODEL_URL),
    ];

    let mut resolved = Vec::with_capacity(models.len());
    for (name, url) in models {
        log::info!("Resolving diarization model: {name}");
        let path = model_resolver::resolve(
            name,
            url,
            Some(token),
            Some(Box::new(|downloaded, total| {
                download_progress("diarization model", downloaded, total)
            })),
        )
        .map_err(|e| format!("{e}\n{}", access_grant_hint()))?;
        eprintln!();
        resolved.push(path);
    }

    Ok(PyannoteDiarizer::new(&resolved[0], &resolved[1])?)
}

fn access_grant_hint() -> String {
    let mut hint = String::from("Make sure you've accepted model access:");
    for grant in DIARIZATION_ACCESS_GRANTS {
        hint.push_str("\n - ");
        hint.push_str(grant);
    }
    hint
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("File not found: {}", cli.input.display()).into());
    }
    Ok(())
}

fn download_progress(what: &str, downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading {what}... {pct}%");
    } else {
        eprint!("\rDownloading {what}... {downloaded} bytes");
    }
}
