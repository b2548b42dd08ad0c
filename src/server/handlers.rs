//! Top-level HTTP handlers
//!
//! Liveness and the catch-all for unmatched routes.

use crate::utils::error::ErrorEnvelope;
use actix_web::HttpResponse;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Liveness payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("OK"),
        message: Cow::Borrowed("Server is running"),
    })
}

/// Fallback for every request no route claimed
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorEnvelope::new("Route not found"))
}
