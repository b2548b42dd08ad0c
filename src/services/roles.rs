//! Role lookup service
//!
//! Pure queries over the [`RoleStore`]. Nothing here mutates or performs
//! I/O; every call reads the snapshot loaded at startup.

use crate::core::models::Role;
use crate::storage::RoleStore;

/// Read-only queries over the role collection
#[derive(Debug, Clone)]
pub struct RolesService {
    store: RoleStore,
}

impl RolesService {
    pub fn new(store: RoleStore) -> Self {
        Self { store }
    }

    /// Every role, in storage order
    pub fn all_roles(&self) -> &[Role] {
        self.store.roles()
    }

    /// Exact, case-sensitive id match
    pub fn role_by_id(&self, id: &str) -> Option<&Role> {
        self.store.roles().iter().find(|role| role.id == id)
    }

    /// Roles whose status equals `status`, ignoring case
    pub fn roles_by_status(&self, status: &str) -> Vec<&Role> {
        let wanted = status.to_lowercase();
        self.store
            .roles()
            .iter()
            .filter(|role| role.status.as_str().to_lowercase() == wanted)
            .collect()
    }

    /// Roles whose type equals `role_type`, ignoring case
    pub fn roles_by_type(&self, role_type: &str) -> Vec<&Role> {
        let wanted = role_type.to_lowercase();
        self.store
            .roles()
            .iter()
            .filter(|role| role.role_type.as_str().to_lowercase() == wanted)
            .collect()
    }
}
