//! Test Utilities Crate
//!
//! Shared test infrastructure for the tenant statement system.
//!
//! # Modules
//!
//! - `fixtures`: deterministic tenants, periods, and amounts
//! - `database`: PostgreSQL container helpers for store integration tests

pub mod database;
pub mod fixtures;

pub use database::*;
pub use fixtures::*;
