//! # roles-api
//!
//! A read-only REST API over a static collection of roles.
//!
//! ## Endpoints
//!
//! - `GET /health` - liveness
//! - `GET /api/roles` - every role
//! - `GET /api/roles/{id}` - one role by id
//! - `GET /api/roles/status/{status}` - roles by status, case-insensitive
//! - `GET /api/roles/type/{type}` - roles by type, case-insensitive
//! - `GET /static/*` - bundled assets such as avatars
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use roles_api::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/roles-api.yaml").await?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::models::{Role, RoleStatus, RoleType, TeamMember};
pub use services::RolesService;
pub use storage::RoleStore;
pub use utils::error::{ApiError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
