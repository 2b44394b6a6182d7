//! Payment handler

use axum::{extract::State, Json};

use domain_ledger::PaymentRecorder;

use crate::dto::{RecordPaymentRequest, RecordPaymentResponse};
use crate::error::ApiError;
use crate::AppState;

/// Records a payment against the period derived from its date
pub async fn record_payment(
    State(state): State<AppState>,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<Json<RecordPaymentResponse>, ApiError> {
    let recorder = PaymentRecorder::new(state.store.clone());
    let payment = recorder.record(request.into_domain()).await?;
    Ok(Json(RecordPaymentResponse::from(payment)))
}
