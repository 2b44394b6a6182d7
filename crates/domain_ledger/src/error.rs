//! Ledger engine errors

use thiserror::Error;

use crate::payment::ValidationError;
use crate::ports::{ArtifactError, StoreError};

/// Errors surfaced by the engine's services
///
/// Validation failures short-circuit before any I/O; store and artifact
/// failures propagate unmodified, with operation context (operation,
/// tenant, period) carried on the tracing span rather than the error value.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The submission was invalid; caller-fixable, never retried
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The statement store failed; transient variants are safe to retry
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Rendering succeeded but the artifact could not be persisted; the
    /// whole generation call is safe to re-invoke
    #[error("Failed to persist statement artifact: {0}")]
    ArtifactPersist(#[source] ArtifactError),
}

impl LedgerError {
    /// Machine-readable failure kind for structured responses
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerError::Validation(ValidationError::MissingField(_)) => "missing_field",
            LedgerError::Validation(ValidationError::InvalidAmount(_)) => "invalid_amount",
            LedgerError::Validation(ValidationError::InvalidMethod(_)) => "invalid_method",
            LedgerError::Validation(ValidationError::InvalidDate(_)) => "invalid_date",
            LedgerError::Validation(ValidationError::InvalidKey(_)) => "invalid_key",
            LedgerError::Store(StoreError::Unavailable { .. }) => "storage_unavailable",
            LedgerError::Store(StoreError::ConflictExhausted { .. }) => "conflict_exhausted",
            LedgerError::Store(StoreError::InvalidKey(_)) => "invalid_key",
            LedgerError::ArtifactPersist(_) => "artifact_persist_failure",
        }
    }

    /// Whether retrying the same call can succeed without caller changes
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LedgerError::Store(StoreError::Unavailable { .. })
                | LedgerError::Store(StoreError::ConflictExhausted { .. })
                | LedgerError::ArtifactPersist(_)
        )
    }
}
