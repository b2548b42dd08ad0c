//! Data loading
//!
//! The API has no storage engine. The role collection is read once at
//! startup and held in memory for the lifetime of the process.

pub mod roles;

pub use roles::RoleStore;
