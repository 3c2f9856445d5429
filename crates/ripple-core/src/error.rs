use thiserror::Error;

/// Rejected settings input, either from a slider string or a direct value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("{name}: cannot parse {input:?} as a number")]
    Parse { name: &'static str, input: String },
}

/// Why a ripple's tone could not be started. Tones are best-effort, so callers
/// log these and carry on without sound.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToneError {
    #[error("audio output unavailable")]
    Unavailable,
    #[error("audio backend error: {0}")]
    Backend(String),
}
