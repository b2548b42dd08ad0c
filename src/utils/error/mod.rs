//! Error handling for the roles API
//!
//! One error type is shared by the loader, the service layer and the HTTP
//! handlers. Its `ResponseError` implementation renders the uniform
//! `{ success: false, message, error? }` envelope.

mod helpers;
mod response;
mod types;


pub use response::ErrorEnvelope;
pub use types::{ApiError, Result};
