//! Hand-rolled fakes for the engine's ports
//!
//! These stand in for `infra_store` adapters so the service tests can
//! exercise failure paths (unavailable store, failed upload) that the real
//! adapters only hit under infrastructure faults.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use core_kernel::{Period, PeriodKey, TenantId};
use domain_ledger::{
    ArtifactError, ArtifactStore, StatementFigures, StatementRecord, StatementRenderer,
    StatementStore, StoreError,
};

/// In-memory store fake with an unavailability switch
#[derive(Default)]
pub struct FakeStore {
    records: Mutex<HashMap<String, StatementRecord>>,
    unavailable: AtomicBool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-loads a record, bypassing the increment path
    pub fn seed(&self, record: StatementRecord) {
        let mut records = self.records.lock().unwrap();
        records.insert(record.key().storage_key(), record);
    }

    /// Makes every subsequent call fail with `StoreError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::unavailable("fake store offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StatementStore for FakeStore {
    async fn get(&self, key: &PeriodKey) -> Result<Option<StatementRecord>, StoreError> {
        self.check_available()?;
        let records = self.records.lock().unwrap();
        Ok(records.get(&key.storage_key()).cloned())
    }

    async fn query_ordered(
        &self,
        tenant_id: &TenantId,
        before: Option<&Period>,
    ) -> Result<Vec<StatementRecord>, StoreError> {
        self.check_available()?;
        let records = self.records.lock().unwrap();
        let mut matching: Vec<StatementRecord> = records
            .values()
            .filter(|r| &r.tenant_id == tenant_id)
            .filter(|r| before.map_or(true, |bound| &r.period < bound))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.period.cmp(&b.period));
        Ok(matching)
    }

    async fn apply_payment(
        &self,
        key: &PeriodKey,
        amount: Decimal,
    ) -> Result<StatementRecord, StoreError> {
        self.check_available()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .entry(key.storage_key())
            .or_insert_with(|| StatementRecord::zero(key));
        record.payments += amount;
        Ok(record.clone())
    }

    async fn apply_charge(
        &self,
        key: &PeriodKey,
        amount: Decimal,
    ) -> Result<StatementRecord, StoreError> {
        self.check_available()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .entry(key.storage_key())
            .or_insert_with(|| StatementRecord::zero(key));
        record.charges += amount;
        Ok(record.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

/// Deterministic renderer: serializes the figures as JSON
pub struct FakeRenderer;

impl StatementRenderer for FakeRenderer {
    fn render(&self, figures: &StatementFigures) -> Vec<u8> {
        serde_json::to_vec(figures).unwrap()
    }
}

/// Artifact fake recording every upload, with a failure switch
#[derive(Default)]
pub struct FakeArtifactStore {
    uploads: Mutex<HashMap<String, Vec<u8>>>,
    failing: AtomicBool,
}

impl FakeArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn content_of(&self, name: &str) -> Option<Vec<u8>> {
        self.uploads.lock().unwrap().get(name).cloned()
    }
}

#[async_trait]
impl ArtifactStore for FakeArtifactStore {
    async fn store(&self, name_hint: &str, content: &[u8]) -> Result<String, ArtifactError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ArtifactError::new("fake blob backend down"));
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.insert(name_hint.to_string(), content.to_vec());
        Ok(format!("memory://statements/{name_hint}"))
    }
}

/// Builds a record for seeding
pub fn record(tenant: &str, period: &str, charges: Decimal, payments: Decimal) -> StatementRecord {
    StatementRecord::new(
        TenantId::new(tenant).unwrap(),
        Period::new(period).unwrap(),
        charges,
        payments,
    )
}
