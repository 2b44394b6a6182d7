//! Payment validation
//!
//! A payment submission arrives as raw, possibly-incomplete fields and is
//! validated into a [`Payment`] before anything touches the store. The
//! validation order is fixed and fail-fast: presence, amount, method, date,
//! then key format. Each violation maps to a distinct error kind so callers
//! can report precisely what to fix.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use core_kernel::{KeyError, Period, TenantId};

/// Accepted payment methods
///
/// Treated as a closed set for validation; anything else is rejected with
/// [`ValidationError::InvalidMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Electronic funds transfer
    #[serde(rename = "EFT")]
    Eft,
    /// Cash
    Cash,
    /// SnapScan mobile payment
    Snapscan,
}

impl PaymentMethod {
    /// The accepted wire spellings, used in rejection messages
    pub const ALLOWED: [&'static str; 3] = ["EFT", "Cash", "Snapscan"];

    /// Returns the wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Eft => "EFT",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Snapscan => "Snapscan",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EFT" => Ok(PaymentMethod::Eft),
            "Cash" => Ok(PaymentMethod::Cash),
            "Snapscan" => Ok(PaymentMethod::Snapscan),
            other => Err(ValidationError::InvalidMethod(other.to_string())),
        }
    }
}

/// Validation failures for payment submissions
///
/// Always caller-fixable and reported before any I/O.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Amount was zero or negative
    #[error("Invalid amount {0}: must be a positive number")]
    InvalidAmount(Decimal),

    /// Method outside the accepted set
    #[error("Invalid payment method '{0}': expected one of EFT, Cash, Snapscan")]
    InvalidMethod(String),

    /// Date did not parse as a calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Tenant id or derived period failed format validation
    #[error("Invalid key: {0}")]
    InvalidKey(#[from] KeyError),
}

/// A raw payment submission, prior to validation
///
/// Fields are optional because presence is itself a validation rule; the
/// HTTP layer deserializes straight into this shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentRequest {
    pub tenant_id: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub method: Option<String>,
}

impl PaymentRequest {
    /// Validates the submission into a [`Payment`]
    ///
    /// Validation order (first violation wins): field presence, positive
    /// amount, known method, parsable date, key format. The payment period
    /// is derived from the date's year-month.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] kind for the first violated rule.
    pub fn validate(self) -> Result<Payment, ValidationError> {
        let tenant_id = self
            .tenant_id
            .ok_or(ValidationError::MissingField("tenantId"))?;
        let amount = self.amount.ok_or(ValidationError::MissingField("amount"))?;
        let date = self.date.ok_or(ValidationError::MissingField("date"))?;
        let method = self.method.ok_or(ValidationError::MissingField("method"))?;

        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(amount));
        }

        let method: PaymentMethod = method.parse()?;

        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date))?;

        let tenant_id = TenantId::new(tenant_id)?;
        let period = Period::from_date(date);

        Ok(Payment {
            id: Uuid::now_v7(),
            tenant_id,
            amount,
            date,
            method,
            period,
        })
    }
}

/// A validated payment with its derived period
///
/// The id is assigned at validation time and exists for traceability only.
/// There is no request-level idempotency key: duplicate submissions are
/// indistinguishable from two genuine payments and both are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    /// Trace identifier (UUIDv7, time-ordered)
    pub id: Uuid,
    /// Paying tenant
    pub tenant_id: TenantId,
    /// Positive payment amount
    pub amount: Decimal,
    /// Date the payment was made
    pub date: NaiveDate,
    /// How the payment was made
    pub method: PaymentMethod,
    /// Year-month of `date`; the statement period the payment lands in
    pub period: Period,
}
