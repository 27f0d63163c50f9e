/// Sample rate expected by both the whisper and pyannote models.
pub const TARGET_SAMPLE_RATE: u32 = 16000;

/// Block size for fingerprint hashing.
pub const FINGERPRINT_BLOCK_SIZE: usize = 64 * 1024;

/// Hex characters kept from the content digest. Short names over
/// collision resistance; acceptable at per-directory scale.
pub const FINGERPRINT_LEN: usize = 12;

pub const TRANSCRIPT_CACHE_SUFFIX: &str = "whisper_transcript.json";
pub const PLAIN_TRANSCRIPT_SUFFIX: &str = "diarized_transcript.txt";
pub const CAPTIONS_SUFFIX: &str = "diarized_transcript.srt";

pub const HUGGINGFACE_TOKEN_VAR: &str = "HUGGINGFACE_TOKEN";

pub const SEGMENTATION_MODEL_NAME: &str = "segmentation-3.0.onnx";
pub const SEGMENTATION_MODEL_URL: &str =
    "https://huggingface.co/pyannote/segmentation-3.0/resolve/main/segmentation-3.0.onnx";

pub const EMBEDDING_MODEL_NAME: &str = "wespeaker_en_voxceleb_CAM++.onnx";
pub const EMBEDDING_MODEL_URL: &str =
    "https://huggingface.co/pyannote/wespeaker-voxceleb-resnet34-LM/resolve/main/wespeaker_en_voxceleb_CAM++.onnx";

/// Repositories the diarization models are served from. Access must be
/// granted per-account before the authenticated download succeeds.
pub const DIARIZATION_ACCESS_GRANTS: &[&str] = &[
    "https://huggingface.co/pyannote/segmentation-3.0",
    "https://huggingface.co/pyannote/wespeaker-voxceleb-resnet34-LM",
];
