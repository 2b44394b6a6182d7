//! Request/response data transfer objects
//!
//! Wire shapes use camelCase field names throughout. Request
//! fields are optional where presence is itself a validation rule; the
//! engine reports missing fields with a distinct kind instead of a generic
//! deserialization error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_ledger::{LedgerRow, Payment, PaymentRequest, StatementArtifact, StatementRecord};

/// Body of `POST /api/v1/payments`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    pub tenant_id: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub method: Option<String>,
}

impl RecordPaymentRequest {
    /// Converts into the engine's raw submission shape
    pub fn into_domain(self) -> PaymentRequest {
        PaymentRequest {
            tenant_id: self.tenant_id,
            amount: self.amount,
            date: self.date,
            method: self.method,
        }
    }
}

/// A recorded payment as returned to the caller
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: Uuid,
    pub tenant_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub method: String,
    pub period: String,
}

/// Response of `POST /api/v1/payments`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentResponse {
    pub message: String,
    pub payment: PaymentDto,
}

impl From<Payment> for RecordPaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            message: "Payment recorded".to_string(),
            payment: PaymentDto {
                id: payment.id,
                tenant_id: payment.tenant_id.to_string(),
                amount: payment.amount,
                date: payment.date,
                method: payment.method.to_string(),
                period: payment.period.to_string(),
            },
        }
    }
}

/// Body of `POST /api/v1/charges`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordChargeRequest {
    pub tenant_id: Option<String>,
    pub period: Option<String>,
    pub amount: Option<Decimal>,
}

/// Response of `POST /api/v1/charges`: the updated record totals
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordChargeResponse {
    pub message: String,
    pub tenant_id: String,
    pub period: String,
    pub charges: Decimal,
    pub payments: Decimal,
}

impl From<StatementRecord> for RecordChargeResponse {
    fn from(record: StatementRecord) -> Self {
        Self {
            message: "Charge recorded".to_string(),
            tenant_id: record.tenant_id.to_string(),
            period: record.period.to_string(),
            charges: record.charges,
            payments: record.payments,
        }
    }
}

/// Body of `POST /api/v1/statements`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStatementRequest {
    pub tenant_id: Option<String>,
    pub period: Option<String>,
}

/// Response of `POST /api/v1/statements`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementResponse {
    pub message: String,
    pub tenant_id: String,
    pub period: String,
    pub opening_balance: Decimal,
    pub charges: Decimal,
    pub payments: Decimal,
    pub closing_balance: Decimal,
    pub url: String,
}

impl From<StatementArtifact> for StatementResponse {
    fn from(artifact: StatementArtifact) -> Self {
        let figures = artifact.figures;
        Self {
            message: "Statement created".to_string(),
            tenant_id: figures.tenant_id.to_string(),
            period: figures.period.to_string(),
            opening_balance: figures.opening_balance,
            charges: figures.charges,
            payments: figures.payments,
            closing_balance: figures.closing_balance,
            url: artifact.locator,
        }
    }
}

/// One row of `GET /api/v1/tenants/{tenant_id}/history`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRowDto {
    pub period: String,
    pub opening_balance: Decimal,
    pub charges: Decimal,
    pub payments: Decimal,
    pub closing_balance: Decimal,
}

impl From<LedgerRow> for LedgerRowDto {
    fn from(row: LedgerRow) -> Self {
        Self {
            period: row.period.to_string(),
            opening_balance: row.opening_balance,
            charges: row.charges,
            payments: row.payments,
            closing_balance: row.closing_balance,
        }
    }
}

/// Response of the history endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub tenant_id: String,
    pub history: Vec<LedgerRowDto>,
}
