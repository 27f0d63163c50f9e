pub mod transcript_cache;
pub mod whisper_recognizer;
