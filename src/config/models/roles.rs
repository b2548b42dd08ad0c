//! Roles dataset configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Roles endpoint and dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesConfig {
    /// Path prefix the roles router is mounted under
    #[serde(default = "default_roles_mount_path")]
    pub mount_path: String,
    /// JSON document to load instead of the bundled dataset
    #[serde(default)]
    pub data_file: Option<String>,
    /// Rewrite relative avatar paths to absolute URLs per request
    #[serde(default = "default_true")]
    pub absolute_avatar_urls: bool,
}

impl Default for RolesConfig {
    fn default() -> Self {
        Self {
            mount_path: default_roles_mount_path(),
            data_file: None,
            absolute_avatar_urls: true,
        }
    }
}

impl RolesConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_mount_path("Roles mount path", &self.mount_path)?;

        if matches!(&self.data_file, Some(path) if path.trim().is_empty()) {
            return Err("Roles data file cannot be empty".to_string());
        }

        Ok(())
    }
}

fn default_roles_mount_path() -> String {
    "/api/roles".to_string()
}
