//! HTTP middleware implementations
//!
//! CORS, JSON body limits and request tracing come from actix-web and its
//! ecosystem and are wired in [`crate::server::server`]. This module holds
//! the middleware written for this service.

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
