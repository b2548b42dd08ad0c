//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the helpers the binary uses to load configuration and start serving.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{ApiError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/roles-api.yaml";

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),
    /// The file was missing; built-in defaults were used
    Defaults { missing: PathBuf },
}

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ApiError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from `path`, then apply environment overrides.
///
/// A missing file is not an error; defaults are used instead. A file that
/// exists but does not parse or validate is.
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<(Config, ConfigSource)> {
    let path = path.as_ref();

    let (mut config, source) = if tokio::fs::try_exists(path).await.unwrap_or(false) {
        (
            Config::from_file(path).await?,
            ConfigSource::File(path.to_path_buf()),
        )
    } else {
        (
            Config::default(),
            ConfigSource::Defaults {
                missing: path.to_path_buf(),
            },
        )
    };

    config.apply_env()?;
    Ok((config, source))
}

/// Run the server with an already loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("🚀 Starting roles API");

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;

    let base = format!("http://{}:{}", config.server().host, config.server().port);
    let roles = format!("{}{}", base, config.roles().mount_path);
    info!("🌐 Server starting at: {}", base);
    info!("📋 API Endpoints:");
    info!("   GET  {}/health - Health check", base);
    info!("   GET  {} - Get all roles", roles);
    info!("   GET  {}/:id - Get role by ID", roles);
    info!("   GET  {}/status/:status - Get roles by status", roles);
    info!("   GET  {}/type/:type - Get roles by type", roles);
    if config.static_files().enabled {
        info!(
            "   GET  {}{}/* - Static files from {}",
            base,
            config.static_files().mount_path,
            config.static_files().dir
        );
    }

    server.start().await
}
