pub mod speaker_diarizer;
pub mod speaker_turn;
