//! Tenant history reporting

use std::sync::Arc;
use tracing::instrument;

use core_kernel::TenantId;

use crate::error::LedgerError;
use crate::ledger::{fold, LedgerRow};
use crate::ports::StatementStore;

/// Produces the full running ledger for a tenant
///
/// Pure composition of the store's ordered query and the balance fold; no
/// logic of its own. A tenant with no records yields an empty sequence,
/// not an error.
#[derive(Clone)]
pub struct HistoryReporter {
    store: Arc<dyn StatementStore>,
}

impl HistoryReporter {
    /// Creates a reporter over the given store
    pub fn new(store: Arc<dyn StatementStore>) -> Self {
        Self { store }
    }

    /// Returns every ledger row for the tenant, ascending by period
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn history(&self, tenant_id: &TenantId) -> Result<Vec<LedgerRow>, LedgerError> {
        let records = self.store.query_ordered(tenant_id, None).await?;
        Ok(fold(&records))
    }
}
