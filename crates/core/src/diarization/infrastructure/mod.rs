pub mod pyannote_diarizer;
