//! In-process record store for testing
//!
//! Mirrors the PostgreSQL repository: ids start at 1 and are never reused,
//! keyed operations on a missing id return `DbError::NotFound`. Every call is
//! counted so tests can assert that rejected requests never reached storage.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::store::{DbError, RecordStore};
use crate::models::{Record, RecordId, RecordPayload};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Record>,
    last_id: i64,
}

/// Mutex-guarded record table
#[derive(Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
    calls: AtomicUsize,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like an unreachable database.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Number of store operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn table(&self) -> Result<std::sync::MutexGuard<'_, Table>, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(DbError::Acquire(sqlx::Error::PoolTimedOut));
        }
        // A poisoned lock only means another test thread panicked mid-call
        Ok(self.table.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Record>, DbError> {
        Ok(self.table()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: RecordId) -> Result<Record, DbError> {
        self.table()?
            .rows
            .get(&id.get())
            .cloned()
            .ok_or_else(|| DbError::record_not_found(id))
    }

    async fn create(&self, payload: RecordPayload) -> Result<i64, DbError> {
        let mut table = self.table()?;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            Record {
                id,
                name: payload.name,
                kind: payload.kind,
            },
        );
        Ok(id)
    }

    async fn replace(&self, id: RecordId, payload: RecordPayload) -> Result<(), DbError> {
        let mut table = self.table()?;
        match table.rows.get_mut(&id.get()) {
            Some(row) => {
                *row = payload.into_record(id);
                Ok(())
            }
            None => Err(DbError::record_not_found(id)),
        }
    }

    async fn delete(&self, id: RecordId) -> Result<(), DbError> {
        self.table()?
            .rows
            .remove(&id.get())
            .map(|_| ())
            .ok_or_else(|| DbError::record_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> RecordId {
        RecordId::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let store = MemoryStore::new();
        assert_eq!(store.create(RecordPayload::new("a", "x")).await.unwrap(), 1);
        assert_eq!(store.create(RecordPayload::new("b", "y")).await.unwrap(), 2);

        store.delete(id("2")).await.unwrap();
        assert_eq!(store.create(RecordPayload::new("c", "z")).await.unwrap(), 3);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.get(id("1")).await, Err(DbError::NotFound { .. })));
        assert!(matches!(
            store.replace(id("1"), RecordPayload::new("a", "b")).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(store.delete(id("1")).await, Err(DbError::NotFound { .. })));
        assert_eq!(store.calls(), 3);
    }

    #[tokio::test]
    async fn failing_store_errors_every_call() {
        let store = MemoryStore::failing();
        assert!(matches!(store.list().await, Err(DbError::Acquire(_))));
        assert!(matches!(
            store.create(RecordPayload::new("a", "b")).await,
            Err(DbError::Acquire(_))
        ));
        assert_eq!(store.calls(), 2);
    }
}
