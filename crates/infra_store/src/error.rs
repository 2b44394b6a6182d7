//! Driver error translation
//!
//! SQLx errors are translated into the domain's `StoreError` at the
//! adapter boundary so nothing above this crate depends on the driver.

use domain_ledger::StoreError;

/// PostgreSQL SQLSTATE codes that indicate a retryable conflict
///
/// 40001 = serialization_failure, 40P01 = deadlock_detected. See
/// <https://www.postgresql.org/docs/current/errcodes-appendix.html>.
const RETRYABLE_SQLSTATES: [&str; 2] = ["40001", "40P01"];

/// Whether the increment loop should retry after this error
pub(crate) fn is_retryable_conflict(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .map(|code| RETRYABLE_SQLSTATES.contains(&code.as_ref()))
            .unwrap_or(false),
        _ => false,
    }
}

/// Maps a SQLx error to the domain store error
///
/// Everything that is not a retryable conflict is surfaced as transient
/// unavailability; the taxonomy has no "query bug" category because a
/// malformed query is a defect, not an operational state callers can
/// handle.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> StoreError {
    StoreError::unavailable(error.to_string())
}
