use thiserror::Error;

/// Common error type for speedometer components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON5 parse error: {0}")]
    Json5(#[from] json5::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the speedometer Error.
pub type Result<T> = std::result::Result<T, Error>;
