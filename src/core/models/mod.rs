//! Domain models served by the API

pub mod role;

pub use role::{Role, RoleStatus, RoleType, TeamMember};
