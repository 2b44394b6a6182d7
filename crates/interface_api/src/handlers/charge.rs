//! Charge handler
//!
//! Charges normally arrive from billing triggers rather than interactive
//! callers, but they share the store's atomic-increment contract with
//! payments.

use axum::{extract::State, Json};
use rust_decimal::Decimal;

use core_kernel::PeriodKey;
use domain_ledger::{LedgerError, ValidationError};

use crate::dto::{RecordChargeRequest, RecordChargeResponse};
use crate::error::ApiError;
use crate::AppState;

/// Applies a charge to an explicit (tenant, period)
pub async fn record_charge(
    State(state): State<AppState>,
    Json(request): Json<RecordChargeRequest>,
) -> Result<Json<RecordChargeResponse>, ApiError> {
    let tenant_id = request
        .tenant_id
        .ok_or_else(|| validation(ValidationError::MissingField("tenantId")))?;
    let period = request
        .period
        .ok_or_else(|| validation(ValidationError::MissingField("period")))?;
    let amount = request
        .amount
        .ok_or_else(|| validation(ValidationError::MissingField("amount")))?;

    if amount <= Decimal::ZERO {
        return Err(validation(ValidationError::InvalidAmount(amount)));
    }

    let key = PeriodKey::parse(&tenant_id, &period)
        .map_err(|err| validation(ValidationError::InvalidKey(err)))?;

    let record = state.store.apply_charge(&key, amount).await?;
    Ok(Json(RecordChargeResponse::from(record)))
}

fn validation(err: ValidationError) -> ApiError {
    ApiError::from(LedgerError::from(err))
}
