//! Storage adapters for the tenant statement system
//!
//! This crate provides the concrete implementations of the ports defined in
//! `domain_ledger`:
//!
//! - [`PostgresStatementStore`] - statement records on PostgreSQL via SQLx,
//!   with increments implemented as a backend-native atomic upsert
//! - [`InMemoryStatementStore`] - lock-protected map for tests and local
//!   development, honoring the same concurrency contract
//! - [`TextStatementRenderer`] - plain-text statement rendering
//! - [`FsArtifactStore`] / [`InMemoryArtifactStore`] - durable artifact
//!   storage on the filesystem or in memory
//!
//! All configuration is passed in explicitly (connection URL, pool sizing,
//! artifact root); nothing reads ambient process state.

pub mod artifact;
pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod render;

pub use artifact::{FsArtifactStore, InMemoryArtifactStore};
pub use memory::InMemoryStatementStore;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use postgres::PostgresStatementStore;
pub use render::TextStatementRenderer;
