//! Business services

pub mod roles;

pub use roles::RolesService;
