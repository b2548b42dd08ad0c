//! Error types for the roles API

use thiserror::Error;

/// Result type alias for the roles API
pub type Result<T> = std::result::Result<T, ApiError>;

/// Main error type for the roles API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// URL construction errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Missing or malformed request input
    #[error("{0}")]
    Validation(String),

    /// Unique-key lookup without a match
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure while building a response.
    ///
    /// `message` names the operation, `detail` carries the cause.
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },

    /// HTTP server lifecycle errors
    #[error("Server error: {0}")]
    Server(String),
}
