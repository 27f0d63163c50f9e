use std::path::{Path, PathBuf};

use crate::shared::constants::{
    CAPTIONS_SUFFIX, PLAIN_TRANSCRIPT_SUFFIX, TRANSCRIPT_CACHE_SUFFIX,
};

/// Persisted artifact locations for one input file.
///
/// Everything lives next to the input, named `<stem>_<fingerprint>_<suffix>`,
/// so artifacts from different inputs (or different revisions of the same
/// file) never collide in a shared directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub transcript_cache: PathBuf,
    pub plain_transcript: PathBuf,
    pub captions: PathBuf,
}

impl ArtifactPaths {
    pub fn for_input(input: &Path, fingerprint: &str) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        let prefix = format!("{stem}_{fingerprint}");

        Self {
            transcript_cache: dir.join(format!("{prefix}_{TRANSCRIPT_CACHE_SUFFIX}")),
            plain_transcript: dir.join(format!("{prefix}_{PLAIN_TRANSCRIPT_SUFFIX}")),
            captions: dir.join(format!("{prefix}_{CAPTIONS_SUFFIX}")),
        }
    }
}
