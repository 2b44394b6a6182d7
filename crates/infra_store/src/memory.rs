//! In-memory statement store
//!
//! Used by tests and local development. All mutation happens under one
//! write lock, so the sum-of-increments guarantee holds trivially: each
//! `apply_*` call reads and writes the record in a single critical
//! section, and no lock is held across an await point.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

use core_kernel::{Period, PeriodKey, TenantId};
use domain_ledger::{StatementRecord, StatementStore, StoreError};

/// Statement store backed by a lock-protected map
#[derive(Debug, Default)]
pub struct InMemoryStatementStore {
    records: RwLock<HashMap<String, StatementRecord>>,
}

impl InMemoryStatementStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn apply(
        &self,
        key: &PeriodKey,
        update: impl FnOnce(&mut StatementRecord),
    ) -> StatementRecord {
        let mut records = self.records.write().unwrap();
        let record = records
            .entry(key.storage_key())
            .or_insert_with(|| StatementRecord::zero(key));
        update(record);
        record.clone()
    }
}

#[async_trait]
impl StatementStore for InMemoryStatementStore {
    async fn get(&self, key: &PeriodKey) -> Result<Option<StatementRecord>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records.get(&key.storage_key()).cloned())
    }

    async fn query_ordered(
        &self,
        tenant_id: &TenantId,
        before: Option<&Period>,
    ) -> Result<Vec<StatementRecord>, StoreError> {
        let records = self.records.read().unwrap();
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
        Ok(self.apply(key, |record| record.payments += amount))
    }

    async fn apply_charge(
        &self,
        key: &PeriodKey,
        amount: Decimal,
    ) -> Result<StatementRecord, StoreError> {
        Ok(self.apply(key, |record| record.charges += amount))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
