use thiserror::Error;

/// Errors raised while configuring, seeding or rendering a tiling.
#[derive(Debug, Error)]
pub enum TilingError {
    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("invalid value for `{key}`: {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("invalid colour `{value}` for `{key}`")]
    InvalidColour { key: String, value: String },

    #[error("invalid length `{value}` for `{key}`")]
    InvalidLength { key: String, value: String },

    #[error("no seed tiles have been set")]
    EmptyEnsemble,

    #[error("seed tile {index} has a non-finite vertex")]
    NonFiniteVertex { index: usize },

    #[error("colour provider failed: {0}")]
    ColourProvider(String),
}

impl TilingError {
    pub(crate) fn config(key: &str, reason: impl Into<String>) -> Self {
        TilingError::InvalidConfig {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
