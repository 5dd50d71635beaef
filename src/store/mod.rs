//! Record storage for encrypted credentials
//!
//! A store receives one `username -> encrypted_password` record per
//! registration. Every write replaces the whole destination with a
//! document holding only that record.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Destination for credential records
pub trait RecordStore: Send + Sync {
    /// Replace the destination's content with the single record `key -> value`
    fn write_record(&self, key: &str, value: &str) -> Result<()>;

    /// Look up the value stored under `key`
    fn read_record(&self, key: &str) -> Result<Option<String>>;
}
