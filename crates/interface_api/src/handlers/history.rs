//! History handler

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::TenantId;
use domain_ledger::{HistoryReporter, LedgerError, ValidationError};

use crate::dto::{HistoryResponse, LedgerRowDto};
use crate::error::ApiError;
use crate::AppState;

/// Returns the tenant's full running ledger, ascending by period
pub async fn get_history(
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let tenant_id = TenantId::new(tenant_id).map_err(|err| {
        ApiError::from(LedgerError::from(ValidationError::InvalidKey(err)))
    })?;

    let reporter = HistoryReporter::new(state.store.clone());
    let rows = reporter.history(&tenant_id).await?;

    Ok(Json(HistoryResponse {
        tenant_id: tenant_id.to_string(),
        history: rows.into_iter().map(LedgerRowDto::from).collect(),
    }))
}
