//! Utility modules for the roles API
//!
//! - **error**: the shared error type and its HTTP rendering
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
