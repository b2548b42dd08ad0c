//! HTTP response handling for errors

use super::types::ApiError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// Failure envelope shared by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let envelope = match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => ErrorEnvelope::new(msg.clone()),
            ApiError::Internal { message, detail } => {
                ErrorEnvelope::new(message.clone()).with_error(detail.clone())
            }
            other => ErrorEnvelope::new("Internal server error").with_error(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(envelope)
    }
}
