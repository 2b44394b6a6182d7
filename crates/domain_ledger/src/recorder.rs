//! Payment recording service

use std::sync::Arc;
use tracing::{info, instrument};

use core_kernel::PeriodKey;

use crate::error::LedgerError;
use crate::payment::{Payment, PaymentRequest};
use crate::ports::StatementStore;

/// Validates payment submissions and applies them to the correct period
///
/// Recording is deliberately decoupled from balance reporting: a successful
/// call returns the recorded payment with its derived period, not the
/// updated balance, so a burst of submissions never serializes on ledger
/// recomputation. Callers needing balances use `StatementGenerator` or
/// `HistoryReporter`.
#[derive(Clone)]
pub struct PaymentRecorder {
    store: Arc<dyn StatementStore>,
}

impl PaymentRecorder {
    /// Creates a recorder over the given store
    pub fn new(store: Arc<dyn StatementStore>) -> Self {
        Self { store }
    }

    /// Validates and records one payment
    ///
    /// The monetary update is a single atomic increment at the store
    /// boundary; two concurrent submissions for the same period both land.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Validation`] for an invalid submission, before any
    ///   I/O is attempted
    /// - [`LedgerError::Store`] when the store cannot be reached or the
    ///   increment cannot converge
    #[instrument(skip(self, request))]
    pub async fn record(&self, request: PaymentRequest) -> Result<Payment, LedgerError> {
        let payment = request.validate()?;

        let key = PeriodKey::new(payment.tenant_id.clone(), payment.period.clone());
        self.store.apply_payment(&key, payment.amount).await?;

        info!(
            payment_id = %payment.id,
            tenant_id = %payment.tenant_id,
            period = %payment.period,
            amount = %payment.amount,
            method = %payment.method,
            "Payment recorded"
        );

        Ok(payment)
    }
}
