//! Ports consumed by the ledger engine
//!
//! The engine talks to the outside world through three traits: the
//! statement store, the renderer, and the artifact store. Adapters live in
//! `infra_store`; tests substitute hand-rolled fakes. Keeping the traits
//! object safe lets services share adapters as `Arc<dyn ...>` handles.

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{KeyError, Period, PeriodKey, TenantId};

use crate::record::StatementRecord;
use crate::statement::StatementFigures;

/// Errors surfaced by statement store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying medium cannot be reached; transient, safe to retry
    #[error("Statement store unavailable: {message}")]
    Unavailable { message: String },

    /// The bounded conflict-retry loop failed to converge under contention;
    /// transient, safe to retry
    #[error("Increment did not converge after {attempts} attempts")]
    ConflictExhausted { attempts: u32 },

    /// Key failed format validation before any I/O was attempted
    #[error("Invalid key: {0}")]
    InvalidKey(#[from] KeyError),
}

impl StoreError {
    /// Wraps a driver error message as an unavailability failure
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }
}

/// Persistence of one statement record per (tenant, period)
///
/// # Concurrency contract
///
/// `apply_payment` and `apply_charge` must be atomic with respect to
/// concurrent calls for the same key: the net effect of N concurrent calls
/// with amounts a1..aN is a single record whose total equals the
/// pre-existing value plus the sum of all amounts. A read-modify-write
/// without conflict detection is a correctness bug, not a simplification.
#[async_trait]
pub trait StatementStore: Send + Sync {
    /// Point lookup; a missing record is `Ok(None)`, never an error
    async fn get(&self, key: &PeriodKey) -> Result<Option<StatementRecord>, StoreError>;

    /// All records for a tenant, ascending by period
    ///
    /// When `before` is given, the result is restricted to periods strictly
    /// earlier. The returned sequence is fully materialized; callers may
    /// treat it as a stable snapshot for one logical operation.
    async fn query_ordered(
        &self,
        tenant_id: &TenantId,
        before: Option<&Period>,
    ) -> Result<Vec<StatementRecord>, StoreError>;

    /// Atomically adds `amount` to the period's payment total
    ///
    /// Creates the record with `{charges: 0, payments: amount}` when absent.
    /// Returns the updated record.
    async fn apply_payment(
        &self,
        key: &PeriodKey,
        amount: Decimal,
    ) -> Result<StatementRecord, StoreError>;

    /// Atomically adds `amount` to the period's charge total
    ///
    /// Symmetric to [`apply_payment`](StatementStore::apply_payment); used
    /// by billing triggers rather than the payment path.
    async fn apply_charge(
        &self,
        key: &PeriodKey,
        amount: Decimal,
    ) -> Result<StatementRecord, StoreError>;

    /// Cheap connectivity probe for readiness checks
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Renders statement figures into opaque content
///
/// Pure: the same figures always produce the same content. Layout and
/// format (plain text, PDF, ...) are entirely the adapter's concern.
pub trait StatementRenderer: Send + Sync {
    /// Produces the rendered statement body
    fn render(&self, figures: &StatementFigures) -> Vec<u8>;
}

/// Error surfaced by artifact store adapters
#[derive(Debug, Error)]
#[error("Artifact storage failed: {message}")]
pub struct ArtifactError {
    pub message: String,
}

impl ArtifactError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Durable storage for rendered statement artifacts
///
/// Implementations must be idempotent under retry with the same name hint;
/// overwrite semantics are acceptable.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Stores `content` under `name_hint` and returns a stable locator
    async fn store(&self, name_hint: &str, content: &[u8]) -> Result<String, ArtifactError>;
}
