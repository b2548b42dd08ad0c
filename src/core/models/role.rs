//! Role and team member records

use serde::{Deserialize, Serialize};

/// Person attached to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Absolute URL or a path relative to the serving host
    pub avatar: String,
}

/// Role classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    Default,
    Custom,
    SystemCustom,
}

impl RoleType {
    /// Stored spelling, as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Default => "DEFAULT",
            RoleType::Custom => "CUSTOM",
            RoleType::SystemCustom => "SYSTEM_CUSTOM",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleStatus {
    Active,
    Inactive,
    Pending,
}

impl RoleStatus {
    /// Stored spelling, as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleStatus::Active => "Active",
            RoleStatus::Inactive => "Inactive",
            RoleStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for RoleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named grouping with a status, a type and its team members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: RoleType,
    /// ISO date, passed through verbatim
    pub date_created: String,
    pub status: RoleStatus,
    pub team_members: Vec<TeamMember>,
}
