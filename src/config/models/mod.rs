//! Configuration data models
//!
//! This module defines all configuration structures used by the roles API.

#![allow(missing_docs)]

pub mod api;
pub mod logging;
pub mod roles;
pub mod server;
pub mod static_files;

// Re-export all configuration types
pub use api::*;
pub use logging::*;
pub use roles::*;
pub use server::*;
pub use static_files::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub(crate) fn default_true() -> bool {
    true
}

/// Mount paths must be absolute and must not end with a slash
pub(crate) fn validate_mount_path(name: &str, path: &str) -> Result<(), String> {
    if !path.starts_with('/') {
        return Err(format!("{} must start with '/': {}", name, path));
    }
    if path.len() > 1 && path.ends_with('/') {
        return Err(format!("{} must not end with '/': {}", name, path));
    }
    Ok(())
}
