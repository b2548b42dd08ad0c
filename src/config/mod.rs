//! Configuration management for the roles API
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then environment variables, then command line flags (applied by the
//! binary).

pub mod models;

pub use models::*;

use crate::utils::error::{ApiError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable holding the listen port
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding the listen host
pub const ENV_HOST: &str = "HOST";
/// Environment variable pointing at an alternative roles document
pub const ENV_ROLES_DATA_FILE: &str = "ROLES_DATA_FILE";
/// Environment variable pointing at the static asset directory
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";

/// Main configuration struct for the roles API
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API configuration
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ApiError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document is a valid "all defaults" file
        let api: ApiConfig = if content.trim().is_empty() {
            ApiConfig::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| ApiError::Config(format!("Failed to parse config: {}", e)))?
        };

        let config = Self { api };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable source
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT).filter(|v| !v.trim().is_empty()) {
            self.api.server.port = port.trim().parse().map_err(|e| {
                ApiError::Config(format!("Invalid {} value '{}': {}", ENV_PORT, port, e))
            })?;
        }
        if let Some(host) = lookup(ENV_HOST).filter(|v| !v.trim().is_empty()) {
            self.api.server.host = host;
        }
        if let Some(path) = lookup(ENV_ROLES_DATA_FILE).filter(|v| !v.trim().is_empty()) {
            self.api.roles.data_file = Some(path);
        }
        if let Some(dir) = lookup(ENV_STATIC_DIR).filter(|v| !v.trim().is_empty()) {
            self.api.static_files.dir = dir;
        }

        self.validate()
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.api.server
    }

    /// Get roles configuration
    pub fn roles(&self) -> &RolesConfig {
        &self.api.roles
    }

    /// Get static asset configuration
    pub fn static_files(&self) -> &StaticFilesConfig {
        &self.api.static_files
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.api.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.api
            .validate()
            .map_err(|e| ApiError::Config(format!("Invalid configuration: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.api)
            .map_err(|e| ApiError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
