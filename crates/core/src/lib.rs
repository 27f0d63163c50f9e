pub mod alignment;
pub mod audio;
pub mod diarization;
pub mod pipeline;
pub mod rendering;
pub mod shared;
pub mod transcription;
