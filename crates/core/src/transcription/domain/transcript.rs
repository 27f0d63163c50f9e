use serde::{Deserialize, Serialize};

/// A contiguous span of recognized speech.
///
/// Segments are produced in start-time order and never re-sorted or
/// mutated afterward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// The raw output of one transcription run, as persisted in the cache.
///
/// Only `segments` feeds the alignment stage; `text` and `language` ride
/// along so the cache record stays a faithful copy of the model output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    pub segments: Vec<TranscriptionSegment>,
}
