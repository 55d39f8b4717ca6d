use thiserror::Error;

/// Errors raised while building or importing values.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("'{key}' cannot be used as an array property")]
    ReservedKey { key: String },

    #[error("failed to parse JSON input")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML input")]
    Toml(#[from] toml::de::Error),
}
