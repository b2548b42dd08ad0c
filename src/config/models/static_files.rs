//! Static asset configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Static asset serving configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticFilesConfig {
    /// Serve the directory at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Directory on disk
    #[serde(default = "default_static_dir")]
    pub dir: String,
    /// URL prefix the directory is served under
    #[serde(default = "default_static_mount_path")]
    pub mount_path: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: default_static_dir(),
            mount_path: default_static_mount_path(),
        }
    }
}

impl StaticFilesConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if self.dir.trim().is_empty() {
            return Err("Static files directory cannot be empty".to_string());
        }
        validate_mount_path("Static files mount path", &self.mount_path)?;
        if self.mount_path == "/" {
            return Err("Static files cannot be mounted at '/'".to_string());
        }
        Ok(())
    }
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_static_mount_path() -> String {
    "/static".to_string()
}
