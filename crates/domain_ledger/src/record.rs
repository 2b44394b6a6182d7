//! Statement-period records
//!
//! One record accumulates the charge and payment totals for a tenant over a
//! single calendar month. Records are created lazily on the first charge or
//! payment for a period; a missing record is equivalent to a record with
//! zero totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Period, PeriodKey, TenantId};

/// Cumulative billing activity for one (tenant, period)
///
/// # Invariants
///
/// - Exactly one record exists per (tenant, period); the persisted identity
///   is [`PeriodKey::storage_key`].
/// - `charges` and `payments` are non-negative and only ever increase over
///   the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Calendar month this record covers
    pub period: Period,
    /// Cumulative charges for the period
    pub charges: Decimal,
    /// Cumulative payments for the period
    pub payments: Decimal,
}

impl StatementRecord {
    /// Creates a record with the given totals
    pub fn new(tenant_id: TenantId, period: Period, charges: Decimal, payments: Decimal) -> Self {
        Self {
            tenant_id,
            period,
            charges,
            payments,
        }
    }

    /// Creates the implicit zero record for a key
    ///
    /// Used wherever an absent record must be treated as `{charges: 0,
    /// payments: 0}`, e.g. when generating a statement for a period with no
    /// recorded activity.
    pub fn zero(key: &PeriodKey) -> Self {
        Self {
            tenant_id: key.tenant_id.clone(),
            period: key.period.clone(),
            charges: Decimal::ZERO,
            payments: Decimal::ZERO,
        }
    }

    /// Returns the key addressing this record
    pub fn key(&self) -> PeriodKey {
        PeriodKey::new(self.tenant_id.clone(), self.period.clone())
    }

    /// Net effect of this period on the running balance
    pub fn net(&self) -> Decimal {
        self.charges - self.payments
    }
}
