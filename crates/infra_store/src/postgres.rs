//! PostgreSQL statement store
//!
//! One row per (tenant, period) in `statement_records`, keyed by the
//! deterministic concatenation `"{tenant}-{period}"`. The payment and
//! charge increments are a single `INSERT ... ON CONFLICT DO UPDATE`
//! statement, which PostgreSQL executes as an atomic read-modify-write on
//! the row: concurrent increments serialize on the row lock and none is
//! lost. Serialization failures and deadlocks are retried a bounded number
//! of times before surfacing `ConflictExhausted`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use core_kernel::{Period, PeriodKey, TenantId};
use domain_ledger::{StatementRecord, StatementStore, StoreError};

use crate::error::{is_retryable_conflict, map_sqlx_error};

/// Bound on the conflict-retry loop; distinct from transient-unavailability
/// retries, which are the caller's concern
const MAX_CONFLICT_RETRIES: u32 = 5;

/// Embedded migrations for the `statement_records` schema
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Statement store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PostgresStatementStore {
    pool: PgPool,
}

/// Raw row shape; converted into the domain record after fetch
#[derive(sqlx::FromRow)]
struct RecordRow {
    tenant_id: String,
    period: String,
    charges: Decimal,
    payments: Decimal,
}

impl RecordRow {
    fn into_record(self) -> Result<StatementRecord, StoreError> {
        // Rows were validated on write; a failure here means the table was
        // modified out of band.
        let tenant_id = TenantId::new(self.tenant_id)?;
        let period = Period::new(self.period)?;
        Ok(StatementRecord::new(
            tenant_id,
            period,
            self.charges,
            self.payments,
        ))
    }
}

impl PostgresStatementStore {
    /// Creates a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if a migration cannot be applied.
    pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
        MIGRATOR
            .run(pool)
            .await
            .map_err(|err| StoreError::unavailable(err.to_string()))
    }

    /// Runs one atomic increment with bounded retry on conflict
    async fn increment(
        &self,
        sql: &str,
        key: &PeriodKey,
        amount: Decimal,
    ) -> Result<StatementRecord, StoreError> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let result = sqlx::query_as::<_, RecordRow>(sql)
                .bind(key.storage_key())
                .bind(key.tenant_id.as_str())
                .bind(key.period.as_str())
                .bind(amount)
                .fetch_one(&self.pool)
                .await;

            match result {
                Ok(row) => return row.into_record(),
                Err(err) if is_retryable_conflict(&err) => {
                    if attempts >= MAX_CONFLICT_RETRIES {
                        warn!(key = %key, attempts, "Increment retry budget exhausted");
                        return Err(StoreError::ConflictExhausted { attempts });
                    }
                    debug!(key = %key, attempts, "Retrying increment after conflict");
                }
                Err(err) => return Err(map_sqlx_error(err)),
            }
        }
    }
}

const APPLY_PAYMENT_SQL: &str = r#"
    INSERT INTO statement_records (record_id, tenant_id, period, charges, payments)
    VALUES ($1, $2, $3, 0, $4)
    ON CONFLICT (record_id)
    DO UPDATE SET payments = statement_records.payments + EXCLUDED.payments,
                  updated_at = now()
    RETURNING tenant_id, period, charges, payments
"#;

const APPLY_CHARGE_SQL: &str = r#"
    INSERT INTO statement_records (record_id, tenant_id, period, charges, payments)
    VALUES ($1, $2, $3, $4, 0)
    ON CONFLICT (record_id)
    DO UPDATE SET charges = statement_records.charges + EXCLUDED.charges,
                  updated_at = now()
    RETURNING tenant_id, period, charges, payments
"#;

#[async_trait]
impl StatementStore for PostgresStatementStore {
    #[instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &PeriodKey) -> Result<Option<StatementRecord>, StoreError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT tenant_id, period, charges, payments \
             FROM statement_records WHERE record_id = $1",
        )
        .bind(key.storage_key())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(RecordRow::into_record).transpose()
    }

    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    async fn query_ordered(
        &self,
        tenant_id: &TenantId,
        before: Option<&Period>,
    ) -> Result<Vec<StatementRecord>, StoreError> {
        let rows = match before {
            Some(bound) => {
                sqlx::query_as::<_, RecordRow>(
                    "SELECT tenant_id, period, charges, payments \
                     FROM statement_records \
                     WHERE tenant_id = $1 AND period < $2 \
                     ORDER BY period ASC",
                )
                .bind(tenant_id.as_str())
                .bind(bound.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, RecordRow>(
                    "SELECT tenant_id, period, charges, payments \
                     FROM statement_records \
                     WHERE tenant_id = $1 \
                     ORDER BY period ASC",
                )
                .bind(tenant_id.as_str())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(RecordRow::into_record).collect()
    }

    #[instrument(skip(self), fields(key = %key, amount = %amount))]
    async fn apply_payment(
        &self,
        key: &PeriodKey,
        amount: Decimal,
    ) -> Result<StatementRecord, StoreError> {
        self.increment(APPLY_PAYMENT_SQL, key, amount).await
    }

    #[instrument(skip(self), fields(key = %key, amount = %amount))]
    async fn apply_charge(
        &self,
        key: &PeriodKey,
        amount: Decimal,
    ) -> Result<StatementRecord, StoreError> {
        self.increment(APPLY_CHARGE_SQL, key, amount).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_sqlx_error)
    }
}
