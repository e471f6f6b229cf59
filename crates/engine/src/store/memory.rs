//! In-memory record store: the test fake and the builder default.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use super::{Collection, RecordStore, StoreError};

/// Mutex-guarded map of collection payloads. State dies with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<Collection, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&collection).cloned())
    }

    fn write(&self, collection: Collection, payload: &str) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert(collection, payload.to_string());
        Ok(())
    }

    fn delete(&self, collection: Collection) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.remove(&collection);
        Ok(())
    }
}
