//! In-memory salary record store.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::SalaryRecord;

use super::{SalaryFilter, SalaryPage, SalaryStore};

/// Thread-safe, `HashMap`-backed salary store.
///
/// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySalaryStore {
    records: Arc<RwLock<HashMap<Uuid, SalaryRecord>>>,
}

impl InMemorySalaryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<Uuid, SalaryRecord>>> {
        self.records.read().map_err(|_| StoreError::Unavailable {
            message: "record lock poisoned".to_string(),
        })
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<Uuid, SalaryRecord>>> {
        self.records.write().map_err(|_| StoreError::Unavailable {
            message: "record lock poisoned".to_string(),
        })
    }
}

impl SalaryStore for InMemorySalaryStore {
    fn create(&self, mut record: SalaryRecord) -> StoreResult<SalaryRecord> {
        let mut records = self.write()?;

        record.refresh(Utc::now())?;

        if records.values().any(|existing| existing.same_period_as(&record)) {
            return Err(StoreError::DuplicateRecord {
                employee_id: record.employee_id().to_string(),
                month: record.month(),
                year: record.year(),
            });
        }

        debug!(
            record_id = %record.id(),
            employee_id = %record.employee_id(),
            "Saving salary record"
        );
        records.insert(record.id(), record.clone());
        Ok(record)
    }

    fn find_by_id(&self, id: Uuid) -> StoreResult<Option<SalaryRecord>> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn find(&self, filter: &SalaryFilter) -> StoreResult<SalaryPage> {
        let records = self.read()?;

        let mut matching: Vec<&SalaryRecord> =
            records.values().filter(|r| filter.matches(r)).collect();
        matching.sort_by_key(|r| (Reverse(r.year()), Reverse(r.month()), Reverse(r.created_at())));

        let total = matching.len();
        let limit = filter.limit.unwrap_or(usize::MAX);
        let page = matching
            .into_iter()
            .skip(filter.skip)
            .take(limit)
            .cloned()
            .collect();

        Ok(SalaryPage {
            records: page,
            total,
        })
    }

    fn replace_advance(&self, id: Uuid, advance: f64) -> StoreResult<SalaryRecord> {
        let mut records = self.write()?;
        let record = records
            .get_mut(&id)
            .ok_or(StoreError::RecordNotFound { id })?;

        record.replace_advance(advance, Utc::now())?;

        debug!(
            record_id = %id,
            payment_status = %record.payment_status(),
            "Replaced advance on salary record"
        );
        Ok(record.clone())
    }

    fn delete_by_id(&self, id: Uuid) -> StoreResult<bool> {
        let removed = self.write()?.remove(&id).is_some();
        debug!(record_id = %id, removed, "Deleted salary record");
        Ok(removed)
    }
}
