//! Statement generation
//!
//! Generating a statement reads the target period and its full prior
//! history, computes the opening and closing balances, renders the figures,
//! and hands the rendered content to artifact storage. Generation never
//! mutates statement records, so a failed or repeated call is always safe
//! to re-invoke.

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use core_kernel::{Period, PeriodKey, TenantId};

use crate::error::LedgerError;
use crate::ledger::opening_balance_for;
use crate::ports::{ArtifactStore, StatementRenderer, StatementStore};
use crate::record::StatementRecord;

/// The balance figures of one statement, handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementFigures {
    pub tenant_id: TenantId,
    pub period: Period,
    pub opening_balance: Decimal,
    pub charges: Decimal,
    pub payments: Decimal,
    pub closing_balance: Decimal,
}

/// A finalized statement: figures, rendered content, and durable locator
///
/// Immutable once produced; the caller owns it.
#[derive(Debug, Clone)]
pub struct StatementArtifact {
    pub figures: StatementFigures,
    /// Rendered statement body
    pub content: Vec<u8>,
    /// Stable locator (URL or path) returned by artifact storage
    pub locator: String,
}

/// Orchestrates ledger computation and artifact production for one period
#[derive(Clone)]
pub struct StatementGenerator {
    store: Arc<dyn StatementStore>,
    renderer: Arc<dyn StatementRenderer>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl StatementGenerator {
    /// Creates a generator over the given collaborators
    pub fn new(
        store: Arc<dyn StatementStore>,
        renderer: Arc<dyn StatementRenderer>,
        artifacts: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            store,
            renderer,
            artifacts,
        }
    }

    /// Generates the statement artifact for `(tenant_id, period)`
    ///
    /// An absent record for the period is treated as zero charges and zero
    /// payments; an artifact is still produced. Figures are deterministic
    /// given stored state: two calls with no intervening activity yield
    /// identical balances.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Store`] when the store cannot be reached; nothing
    ///   is rendered or uploaded
    /// - [`LedgerError::ArtifactPersist`] when upload fails after rendering
    ///   succeeded; the rendered work is discarded and the call may simply
    ///   be repeated
    #[instrument(skip(self), fields(tenant_id = %tenant_id, period = %period))]
    pub async fn generate(
        &self,
        tenant_id: &TenantId,
        period: &Period,
    ) -> Result<StatementArtifact, LedgerError> {
        let key = PeriodKey::new(tenant_id.clone(), period.clone());

        let current = self
            .store
            .get(&key)
            .await?
            .unwrap_or_else(|| StatementRecord::zero(&key));
        let prior = self.store.query_ordered(tenant_id, Some(period)).await?;

        let opening_balance = opening_balance_for(&prior);
        let closing_balance = opening_balance + current.charges - current.payments;

        let figures = StatementFigures {
            tenant_id: tenant_id.clone(),
            period: period.clone(),
            opening_balance,
            charges: current.charges,
            payments: current.payments,
            closing_balance,
        };

        let content = self.renderer.render(&figures);

        let name_hint = format!("{}.txt", key.storage_key());
        let locator = self
            .artifacts
            .store(&name_hint, &content)
            .await
            .map_err(|err| {
                warn!(error = %err, "Discarding rendered statement after failed upload");
                LedgerError::ArtifactPersist(err)
            })?;

        info!(%locator, closing_balance = %closing_balance, "Statement generated");

        Ok(StatementArtifact {
            figures,
            content,
            locator,
        })
    }
}
