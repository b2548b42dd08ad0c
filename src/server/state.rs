//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::RolesService;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Built once at startup. Every field is read-only afterwards, so workers
/// share it through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// API configuration (shared read-only)
    pub config: Arc<Config>,
    /// Role lookups over the loaded dataset
    pub roles: Arc<RolesService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, roles: RolesService) -> Self {
        Self {
            config: Arc::new(config),
            roles: Arc::new(roles),
        }
    }

    /// Get API configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
