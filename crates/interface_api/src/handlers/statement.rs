//! Statement handler

use axum::{extract::State, Json};

use core_kernel::PeriodKey;
use domain_ledger::{LedgerError, StatementGenerator, ValidationError};

use crate::dto::{GenerateStatementRequest, StatementResponse};
use crate::error::ApiError;
use crate::AppState;

/// Generates the statement artifact for one (tenant, period)
pub async fn generate_statement(
    State(state): State<AppState>,
    Json(request): Json<GenerateStatementRequest>,
) -> Result<Json<StatementResponse>, ApiError> {
    let tenant_id = request
        .tenant_id
        .ok_or_else(|| validation(ValidationError::MissingField("tenantId")))?;
    let period = request
        .period
        .ok_or_else(|| validation(ValidationError::MissingField("period")))?;

    let key = PeriodKey::parse(&tenant_id, &period)
        .map_err(|err| validation(ValidationError::InvalidKey(err)))?;

    let generator = StatementGenerator::new(
        state.store.clone(),
        state.renderer.clone(),
        state.artifacts.clone(),
    );
    let artifact = generator.generate(&key.tenant_id, &key.period).await?;
    Ok(Json(StatementResponse::from(artifact)))
}

fn validation(err: ValidationError) -> ApiError {
    ApiError::from(LedgerError::from(err))
}
