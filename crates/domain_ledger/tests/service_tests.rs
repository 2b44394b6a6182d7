//! Behavioral tests for the engine services
//!
//! Runs `PaymentRecorder`, `StatementGenerator`, and `HistoryReporter`
//! against port fakes, covering the happy paths, the failure taxonomy, and
//! the concrete ledger scenarios from the statement rules.

mod common;

use rust_decimal_macros::dec;
use std::sync::Arc;

use common::{record, FakeArtifactStore, FakeRenderer, FakeStore};
use core_kernel::{Period, PeriodKey, TenantId};
use domain_ledger::{
    HistoryReporter, LedgerError, PaymentRecorder, PaymentRequest, StatementGenerator,
    StatementStore, StoreError, ValidationError,
};

fn request(tenant: &str, amount: rust_decimal::Decimal, date: &str, method: &str) -> PaymentRequest {
    PaymentRequest {
        tenant_id: Some(tenant.to_string()),
        amount: Some(amount),
        date: Some(date.to_string()),
        method: Some(method.to_string()),
    }
}

fn generator(
    store: &Arc<FakeStore>,
    artifacts: &Arc<FakeArtifactStore>,
) -> StatementGenerator {
    StatementGenerator::new(store.clone(), Arc::new(FakeRenderer), artifacts.clone())
}

mod recorder {
    use super::*;

    #[tokio::test]
    async fn records_payment_into_derived_period() {
        let store = Arc::new(FakeStore::new());
        let recorder = PaymentRecorder::new(store.clone());

        let payment = recorder
            .record(request("T1", dec!(30), "2024-02-15", "EFT"))
            .await
            .unwrap();

        assert_eq!(payment.period.as_str(), "2024-02");

        let key = PeriodKey::parse("T1", "2024-02").unwrap();
        let stored = store.get(&key).await.unwrap().unwrap();
        assert_eq!(stored.payments, dec!(30));
        assert_eq!(stored.charges, dec!(0));
    }

    #[tokio::test]
    async fn duplicate_submissions_both_land() {
        // No idempotency key exists; two identical submissions are two
        // genuine payments.
        let store = Arc::new(FakeStore::new());
        store.seed(record("T1", "2024-02", dec!(0), dec!(100)));
        let recorder = PaymentRecorder::new(store.clone());

        let first = recorder.record(request("T1", dec!(30), "2024-02-15", "EFT"));
        let second = recorder.record(request("T1", dec!(30), "2024-02-15", "EFT"));
        let (first, second) = tokio::join!(first, second);
        first.unwrap();
        second.unwrap();

        let key = PeriodKey::parse("T1", "2024-02").unwrap();
        let stored = store.get(&key).await.unwrap().unwrap();
        assert_eq!(stored.payments, dec!(160));
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_store() {
        let store = Arc::new(FakeStore::new());
        store.set_unavailable(true);
        let recorder = PaymentRecorder::new(store);

        // Even with the store down, validation errors surface first.
        let err = recorder
            .record(request("T2", dec!(-5), "2024-01-01", "Cash"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::InvalidAmount(_))
        ));

        let err = recorder
            .record(request("T1", dec!(10), "2024-03-01", "Bitcoin"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::InvalidMethod(_))
        ));
    }

    #[tokio::test]
    async fn store_outage_surfaces_as_transient() {
        let store = Arc::new(FakeStore::new());
        store.set_unavailable(true);
        let recorder = PaymentRecorder::new(store);

        let err = recorder
            .record(request("T1", dec!(10), "2024-03-01", "Cash"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Store(StoreError::Unavailable { .. })
        ));
        assert!(err.is_transient());
        assert_eq!(err.kind(), "storage_unavailable");
    }
}

mod generation {
    use super::*;

    #[tokio::test]
    async fn statement_carries_opening_balance_from_prior_periods() {
        let store = Arc::new(FakeStore::new());
        store.seed(record("T1", "2024-01", dec!(100), dec!(0)));
        store.seed(record("T1", "2024-02", dec!(50), dec!(100)));
        let artifacts = Arc::new(FakeArtifactStore::new());

        let artifact = generator(&store, &artifacts)
            .generate(
                &TenantId::new("T1").unwrap(),
                &Period::new("2024-02").unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(artifact.figures.opening_balance, dec!(100));
        assert_eq!(artifact.figures.closing_balance, dec!(50));
        assert_eq!(artifact.locator, "memory://statements/T1-2024-02.txt");
        assert_eq!(
            artifacts.content_of("T1-2024-02.txt").as_deref(),
            Some(artifact.content.as_slice())
        );
    }

    #[tokio::test]
    async fn absent_period_still_produces_artifact() {
        let store = Arc::new(FakeStore::new());
        let artifacts = Arc::new(FakeArtifactStore::new());

        let artifact = generator(&store, &artifacts)
            .generate(
                &TenantId::new("T3").unwrap(),
                &Period::new("2024-05").unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(artifact.figures.opening_balance, dec!(0));
        assert_eq!(artifact.figures.charges, dec!(0));
        assert_eq!(artifact.figures.payments, dec!(0));
        assert_eq!(artifact.figures.closing_balance, dec!(0));
        assert_eq!(artifacts.upload_count(), 1);
    }

    #[tokio::test]
    async fn repeated_generation_yields_identical_figures() {
        let store = Arc::new(FakeStore::new());
        store.seed(record("T1", "2024-01", dec!(80), dec!(30)));
        let artifacts = Arc::new(FakeArtifactStore::new());
        let generator = generator(&store, &artifacts);

        let tenant = TenantId::new("T1").unwrap();
        let period = Period::new("2024-01").unwrap();
        let first = generator.generate(&tenant, &period).await.unwrap();
        let second = generator.generate(&tenant, &period).await.unwrap();

        assert_eq!(first.figures, second.figures);
        assert_eq!(first.content, second.content);
        // Same name hint: overwrite, not accumulate.
        assert_eq!(artifacts.upload_count(), 1);
    }

    #[tokio::test]
    async fn store_outage_aborts_before_upload() {
        let store = Arc::new(FakeStore::new());
        store.set_unavailable(true);
        let artifacts = Arc::new(FakeArtifactStore::new());

        let err = generator(&store, &artifacts)
            .generate(
                &TenantId::new("T1").unwrap(),
                &Period::new("2024-01").unwrap(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LedgerError::Store(StoreError::Unavailable { .. })
        ));
        assert_eq!(artifacts.upload_count(), 0);
    }

    #[tokio::test]
    async fn failed_upload_is_artifact_persist_failure() {
        let store = Arc::new(FakeStore::new());
        store.seed(record("T1", "2024-01", dec!(10), dec!(0)));
        let artifacts = Arc::new(FakeArtifactStore::new());
        artifacts.set_failing(true);
        let generator = generator(&store, &artifacts);

        let tenant = TenantId::new("T1").unwrap();
        let period = Period::new("2024-01").unwrap();
        let err = generator.generate(&tenant, &period).await.unwrap_err();
        assert!(matches!(err, LedgerError::ArtifactPersist(_)));
        assert_eq!(err.kind(), "artifact_persist_failure");

        // Generation has no side effects on records, so retrying after the
        // backend recovers just works.
        artifacts.set_failing(false);
        let artifact = generator.generate(&tenant, &period).await.unwrap();
        assert_eq!(artifact.figures.closing_balance, dec!(10));
    }
}

mod history {
    use super::*;

    #[tokio::test]
    async fn empty_history_is_empty_not_an_error() {
        let store = Arc::new(FakeStore::new());
        let reporter = HistoryReporter::new(store);

        let rows = reporter
            .history(&TenantId::new("T9").unwrap())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn history_folds_all_periods_in_order() {
        let store = Arc::new(FakeStore::new());
        // Seeded out of order; the store's ordered query sorts.
        store.seed(record("T1", "2024-03", dec!(25), dec!(0)));
        store.seed(record("T1", "2024-01", dec!(100), dec!(0)));
        store.seed(record("T1", "2024-02", dec!(50), dec!(100)));
        // Another tenant's activity must not leak in.
        store.seed(record("T2", "2024-01", dec!(999), dec!(0)));
        let reporter = HistoryReporter::new(store);

        let rows = reporter
            .history(&TenantId::new("T1").unwrap())
            .await
            .unwrap();

        let periods: Vec<&str> = rows.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, ["2024-01", "2024-02", "2024-03"]);
        assert_eq!(rows[0].closing_balance, dec!(100));
        assert_eq!(rows[1].opening_balance, dec!(100));
        assert_eq!(rows[1].closing_balance, dec!(50));
        assert_eq!(rows[2].closing_balance, dec!(75));
    }
}
