//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

// Submodules
pub mod middleware;
pub mod routes;

pub mod absolute_urls;
pub mod builder;
mod handlers;
pub mod server;
pub mod state;
mod utils;


pub use server::{HttpServer, create_app};
pub use state::AppState;
