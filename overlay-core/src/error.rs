use thiserror::Error;

/// Reasons a trigger is ignored instead of opening an overlay.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    #[error("overlay target `{target}` does not exist")]
    MissingTarget { target: String },
    #[error("gallery sequence is empty")]
    EmptySequence,
}

/// Errors raised while loading or validating [`crate::OverlayConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("overlay config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
