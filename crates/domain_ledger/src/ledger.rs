//! Balance ledger fold
//!
//! The fold is the heart of the engine: a single pass over period-ordered
//! statement records that threads a running balance through every row. It is
//! pure and deterministic; persistence and ordering are the caller's
//! concern.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Period;

use crate::record::StatementRecord;

/// One derived row of a tenant's running ledger
///
/// Not persisted; recomputed from records on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Calendar month this row covers
    pub period: Period,
    /// Balance carried in from the previous row (0 for the first row)
    pub opening_balance: Decimal,
    /// Charges accumulated in the period
    pub charges: Decimal,
    /// Payments accumulated in the period
    pub payments: Decimal,
    /// `opening_balance + charges - payments`
    pub closing_balance: Decimal,
}

/// Folds period-ordered records into ledger rows
///
/// Walks the records once, carrying a running balance initialized to zero.
/// Each record yields exactly one row, including records with zero charges
/// and zero payments, so gaps in activity remain visible in the timeline.
///
/// # Precondition
///
/// `records` must already be sorted ascending by period. This function does
/// not sort and does not verify ordering; the store's ordered query is the
/// canonical producer of conforming input.
pub fn fold(records: &[StatementRecord]) -> Vec<LedgerRow> {
    let mut balance = Decimal::ZERO;
    records
        .iter()
        .map(|record| {
            let opening = balance;
            let closing = opening + record.charges - record.payments;
            balance = closing;
            LedgerRow {
                period: record.period.clone(),
                opening_balance: opening,
                charges: record.charges,
                payments: record.payments,
                closing_balance: closing,
            }
        })
        .collect()
}

/// Closing balance after folding all prior records
///
/// Equivalent to the last row's closing balance, or zero when `prior` is
/// empty. Used by statement generation to seed a period's opening balance.
pub fn opening_balance_for(prior: &[StatementRecord]) -> Decimal {
    prior
        .iter()
        .fold(Decimal::ZERO, |balance, record| balance + record.net())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::TenantId;
    use rust_decimal_macros::dec;

    fn record(period: &str, charges: Decimal, payments: Decimal) -> StatementRecord {
        StatementRecord::new(
            TenantId::new("T1").unwrap(),
            Period::new(period).unwrap(),
            charges,
            payments,
        )
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(fold(&[]).is_empty());
        assert_eq!(opening_balance_for(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_first_row_opens_at_zero() {
        let rows = fold(&[record("2024-01", dec!(100), dec!(0))]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].opening_balance, dec!(0));
        assert_eq!(rows[0].closing_balance, dec!(100));
    }

    #[test]
    fn test_opening_balance_carries_forward() {
        let rows = fold(&[
            record("2024-01", dec!(100), dec!(0)),
            record("2024-02", dec!(50), dec!(100)),
        ]);
        assert_eq!(rows[1].opening_balance, dec!(100));
        assert_eq!(rows[1].closing_balance, dec!(50));
    }

    #[test]
    fn test_zero_activity_period_still_produces_row() {
        let rows = fold(&[
            record("2024-01", dec!(100), dec!(0)),
            record("2024-02", dec!(0), dec!(0)),
            record("2024-03", dec!(25), dec!(0)),
        ]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].opening_balance, dec!(100));
        assert_eq!(rows[1].closing_balance, dec!(100));
        assert_eq!(rows[2].opening_balance, dec!(100));
    }

    #[test]
    fn test_opening_balance_for_matches_last_closing() {
        let records = vec![
            record("2024-01", dec!(100), dec!(20)),
            record("2024-02", dec!(50), dec!(100)),
            record("2024-03", dec!(75.50), dec!(0)),
        ];
        let rows = fold(&records);
        assert_eq!(
            opening_balance_for(&records),
            rows.last().unwrap().closing_balance
        );
    }

    #[test]
    fn test_balance_can_go_negative_on_overpayment() {
        let rows = fold(&[record("2024-01", dec!(50), dec!(120))]);
        assert_eq!(rows[0].closing_balance, dec!(-70));
    }
}
