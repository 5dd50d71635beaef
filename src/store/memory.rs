//! In-memory record store

use std::sync::{Mutex, PoisonError};

use super::RecordStore;
use crate::error::Result;

/// Store holding its single record in memory
///
/// Follows the same replace-on-write rule as [`super::JsonFileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record currently held, if any
    pub fn snapshot(&self) -> Option<(String, String)> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RecordStore for MemoryStore {
    fn write_record(&self, key: &str, value: &str) -> Result<()> {
        let mut record = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        *record = Some((key.to_string(), value.to_string()));
        Ok(())
    }

    fn read_record(&self, key: &str) -> Result<Option<String>> {
        let record = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(record
            .as_ref()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }
}
