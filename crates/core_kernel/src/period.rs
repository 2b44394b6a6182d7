//! Tenant and period identifiers
//!
//! Statement records are addressed by a `(tenant, period)` pair. Both halves
//! are validated on construction so that the rest of the system can rely on
//! two invariants:
//!
//! - a `TenantId` is never empty and never contains characters that would
//!   corrupt a storage key or artifact name
//! - a `Period` is always the canonical zero-padded `YYYY-MM` form, which
//!   makes lexicographic ordering identical to chronological ordering

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a tenant id or period fails format validation
///
/// These are always caller-fixable and are reported before any I/O is
/// attempted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Tenant id is empty or contains forbidden characters
    #[error("Invalid tenant id: {0}")]
    InvalidTenant(String),

    /// Period string is not canonical zero-padded YYYY-MM
    #[error("Invalid period '{0}': expected zero-padded YYYY-MM")]
    InvalidPeriod(String),
}

/// An opaque tenant identifier
///
/// Tenant ids come from callers and are treated as opaque strings, but they
/// are embedded in storage keys (`"{tenant}-{period}"`) and artifact names,
/// so empty strings, surrounding whitespace, and `/` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Validates and wraps a tenant identifier
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidTenant` if the id is empty, has leading or
    /// trailing whitespace, or contains `/`.
    pub fn new(id: impl Into<String>) -> Result<Self, KeyError> {
        let id = id.into();
        if id.is_empty() || id.trim() != id || id.contains('/') {
            return Err(KeyError::InvalidTenant(id));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TenantId {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A calendar month in canonical `YYYY-MM` form
///
/// The constructor rejects anything that is not a zero-padded 4-digit year,
/// a dash, and a zero-padded month in `01..=12`. Because only canonical
/// strings exist, the derived `Ord` (string ordering) is chronological
/// ordering, which is what the ledger fold and the store's range queries
/// rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(String);

impl Period {
    /// Validates and wraps a period string
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidPeriod` for any non-canonical input, e.g.
    /// `2024-1`, `24-01`, `2024/01`, or a month outside `01..=12`.
    pub fn new(period: impl Into<String>) -> Result<Self, KeyError> {
        let period = period.into();
        if Self::is_canonical(&period) {
            Ok(Self(period))
        } else {
            Err(KeyError::InvalidPeriod(period))
        }
    }

    /// Derives the period containing a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// Returns the period as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_canonical(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return false;
        }
        if !bytes[..4].iter().all(u8::is_ascii_digit)
            || !bytes[5..].iter().all(u8::is_ascii_digit)
        {
            return false;
        }
        matches!(s[5..].parse::<u8>(), Ok(1..=12))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Period {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Composite key addressing exactly one statement record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    pub tenant_id: TenantId,
    pub period: Period,
}

impl PeriodKey {
    /// Creates a key from already-validated halves
    pub fn new(tenant_id: TenantId, period: Period) -> Self {
        Self { tenant_id, period }
    }

    /// Validates raw strings and creates a key
    ///
    /// # Errors
    ///
    /// Returns `KeyError` if either half fails format validation.
    pub fn parse(tenant_id: &str, period: &str) -> Result<Self, KeyError> {
        Ok(Self {
            tenant_id: TenantId::new(tenant_id)?,
            period: Period::new(period)?,
        })
    }

    /// Returns the persisted record identity, `"{tenant}-{period}"`
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.tenant_id, self.period)
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.tenant_id, self.period)
    }
}

