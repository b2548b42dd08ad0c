//! HTTP route modules
//!
//! This module contains the HTTP route handlers organized by resource.

pub mod roles;

use actix_web::guard::{self, Guard};
use serde::Serialize;

/// Success envelope: `{ success: true, data, total? }`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of items in `data`, for collection responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful single-entity response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            total: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>>
where
    T: Serialize,
{
    /// Create a successful collection response; `total` mirrors `data.len()`
    pub fn collection(items: Vec<T>) -> Self {
        Self {
            success: true,
            total: Some(items.len()),
            data: Some(items),
        }
    }
}

/// Matches GET and HEAD, so other methods fall through to the 404 handler
pub(crate) fn read_only() -> impl Guard {
    guard::Any(guard::Get()).or(guard::Head())
}
