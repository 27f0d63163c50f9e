pub mod artifact_paths;
pub mod constants;
pub mod fingerprint;
pub mod model_resolver;
