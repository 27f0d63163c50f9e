pub mod config;
pub mod transcribe_diarize_use_case;
