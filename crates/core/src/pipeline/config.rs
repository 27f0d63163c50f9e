use std::fmt;
use std::str::FromStr;

/// Whisper model size, selecting which ggml model file is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    #[default]
    Medium,
    Large,
}

impl ModelSize {
    pub fn model_name(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "ggml-tiny.bin",
            ModelSize::Base => "ggml-base.bin",
            ModelSize::Small => "ggml-small.bin",
            ModelSize::Medium => "ggml-medium.bin",
            ModelSize::Large => "ggml-large-v3.bin",
        }
    }

    pub fn model_url(&self) -> String {
        format!(
            "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/{}",
            self.model_name()
        )
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ModelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiny" => Ok(ModelSize::Tiny),
            "base" => Ok(ModelSize::Base),
            "small" => Ok(ModelSize::Small),
            "medium" => Ok(ModelSize::Medium),
            "large" => Ok(ModelSize::Large),
            other => Err(format!(
                "Model size must be one of: tiny, base, small, medium, large, got '{other}'"
            )),
        }
    }
}

/// Run-wide options, constructed once at startup and threaded through the
/// pipeline instead of read ad hoc from the process environment.
#[derive(Clone, Debug, Default)]
pub struct PipelineConfig {
    pub model_size: ModelSize,
    pub force_retranscribe: bool,
    pub emit_captions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_size_parses_known_names() {
        assert_eq!("tiny".parse::<ModelSize>().unwrap(), ModelSize::Tiny);
        assert_eq!("medium".parse::<ModelSize>().unwrap(), ModelSize::Medium);
        assert_eq!("large".parse::<ModelSize>().unwrap(), ModelSize::Large);
    }

    #[test]
    fn test_model_size_rejects_unknown_name() {
        let err = "enormous".parse::<ModelSize>().unwrap_err();
        assert!(err.contains("enormous"));
    }

    #[test]
    fn test_default_model_size_is_medium() {
        assert_eq!(ModelSize::default(), ModelSize::Medium);
        assert_eq!(ModelSize::default().model_name(), "ggml-medium.bin");
    }

    #[test]
    fn test_model_url_points_at_model_file() {
        assert!(ModelSize::Tiny.model_url().ends_with("/ggml-tiny.bin"));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for size in [
            ModelSize::Tiny,
            ModelSize::Base,
            ModelSize::Small,
            ModelSize::Medium,
            ModelSize::Large,
        ] {
            assert_eq!(size.to_string().parse::<ModelSize>().unwrap(), size);
        }
    }
}
