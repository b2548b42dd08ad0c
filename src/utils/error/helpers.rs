//! Helper functions for creating specific error types

use super::types::ApiError;

impl ApiError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Wrap any failure as an internal error attributed to `message`
    pub fn internal<S: Into<String>, E: std::fmt::Display>(message: S, cause: E) -> Self {
        Self::Internal {
            message: message.into(),
            detail: cause.to_string(),
        }
    }

    /// Re-attribute an error to a handler operation.
    ///
    /// Validation and not-found errors keep their own message, anything
    /// else becomes `Internal` with the operation as its message.
    pub fn in_operation(self, message: &str) -> Self {
        match self {
            Self::Validation(_) | Self::NotFound(_) | Self::Internal { .. } => self,
            other => Self::internal(message, other),
        }
    }
}
