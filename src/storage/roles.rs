//! Immutable in-memory role collection

use crate::core::models::Role;
use crate::utils::error::{ApiError, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dataset compiled into the binary
const BUNDLED_ROLES: &str = include_str!("../../data/roles.json");

/// Read-only, ordered role collection.
///
/// Cloning shares the same backing slice, so every handler reads the same
/// snapshot.
#[derive(Debug, Clone)]
pub struct RoleStore {
    roles: Arc<[Role]>,
}

impl RoleStore {
    /// Load the dataset bundled with the binary
    pub fn bundled() -> Result<Self> {
        debug!("Loading bundled roles dataset");
        Self::from_json_str(BUNDLED_ROLES)
    }

    /// Load a roles document from disk
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading roles from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            ApiError::Config(format!(
                "Failed to read roles file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_str(&content)
    }

    /// Parse a JSON array of roles
    pub fn from_json_str(content: &str) -> Result<Self> {
        let roles: Vec<Role> = serde_json::from_str(content)?;
        Self::from_roles(roles)
    }

    /// Build a store from already parsed roles
    pub fn from_roles(roles: Vec<Role>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(roles.len());
        for role in &roles {
            if !seen.insert(role.id.as_str()) {
                return Err(ApiError::Config(format!("Duplicate role id: {}", role.id)));
            }
            if role.team_members.is_empty() {
                warn!(role_id = %role.id, "Role has no team members");
            }
        }

        info!(count = roles.len(), "Roles dataset loaded");
        Ok(Self {
            roles: roles.into(),
        })
    }

    /// All roles in storage order
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
