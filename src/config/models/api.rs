//! Top-level API configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Top-level API configuration, one field per YAML section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Roles dataset and endpoint configuration
    #[serde(default)]
    pub roles: RolesConfig,
    /// Static asset configuration
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ApiConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.roles.validate()?;
        self.static_files.validate()?;
        self.logging.validate()?;

        if self.static_files.enabled && self.static_files.mount_path == self.roles.mount_path {
            return Err(format!(
                "Static files and roles cannot share the mount path {}",
                self.roles.mount_path
            ));
        }

        Ok(())
    }
}
