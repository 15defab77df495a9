use thiserror::Error;

/// Errors emitted while loading or validating settings.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown initial section '{id}'.")]
    UnknownSection { id: String },
    #[error("Palette field '{field}' has invalid color '{value}'.")]
    InvalidColor { field: &'static str, value: String },
}
