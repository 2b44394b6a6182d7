//! Property tests for the balance fold
//!
//! For any ordered sequence of records, row i must close at the prefix sum
//! of `charges - payments` up to i, open at the previous row's close, and
//! the first row must open at zero.

mod common;

use proptest::prelude::*;
use rust_decimal::Decimal;

use common::record;
use domain_ledger::{fold, opening_balance_for, StatementRecord};

/// Builds `n` consecutive monthly records for one tenant from cent amounts
fn records_from_cents(cents: Vec<(u32, u32)>) -> Vec<StatementRecord> {
    cents
        .into_iter()
        .enumerate()
        .map(|(i, (charges, payments))| {
            let year = 2000 + (i / 12) as i32;
            let month = (i % 12) + 1;
            record(
                "T1",
                &format!("{year:04}-{month:02}"),
                Decimal::new(i64::from(charges), 2),
                Decimal::new(i64::from(payments), 2),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn closing_balance_is_prefix_sum(cents in prop::collection::vec((0u32..1_000_000, 0u32..1_000_000), 0..40)) {
        let records = records_from_cents(cents);
        let rows = fold(&records);

        prop_assert_eq!(rows.len(), records.len());

        let mut prefix = Decimal::ZERO;
        for (i, row) in rows.iter().enumerate() {
            if i == 0 {
                prop_assert_eq!(row.opening_balance, Decimal::ZERO);
            } else {
                prop_assert_eq!(row.opening_balance, rows[i - 1].closing_balance);
            }
            prefix += records[i].charges - records[i].payments;
            prop_assert_eq!(row.closing_balance, prefix);
        }
    }

    #[test]
    fn opening_balance_for_equals_fold_tail(cents in prop::collection::vec((0u32..1_000_000, 0u32..1_000_000), 0..40)) {
        let records = records_from_cents(cents);
        let expected = fold(&records)
            .last()
            .map(|row| row.closing_balance)
            .unwrap_or(Decimal::ZERO);
        prop_assert_eq!(opening_balance_for(&records), expected);
    }

    #[test]
    fn fold_is_deterministic(cents in prop::collection::vec((0u32..1_000_000, 0u32..1_000_000), 0..40)) {
        let records = records_from_cents(cents);
        prop_assert_eq!(fold(&records), fold(&records));
    }
}
