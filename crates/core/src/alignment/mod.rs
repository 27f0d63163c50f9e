pub mod aligned_utterance;
pub mod aligner;
