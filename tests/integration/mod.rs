//! Integration tests for roles-api
//!
//! These tests drive the complete actix-web application in-process.

pub mod absolute_url_tests;
pub mod mounting_tests;
