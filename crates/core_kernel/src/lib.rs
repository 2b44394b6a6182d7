//! Core Kernel - Foundational types for the tenant statement system
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules:
//! - Tenant and period identifiers with strict format validation
//! - The composite key addressing one statement record

pub mod period;

pub use period::{KeyError, Period, PeriodKey, TenantId};
