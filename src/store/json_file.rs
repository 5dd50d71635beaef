//! JSON document store with atomic writes

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::debug;

use super::RecordStore;
use crate::error::{LockrError, Result};

/// Store that keeps its record in a pretty-printed JSON object on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to `path`
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the destination document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, what: &str, e: impl std::fmt::Display) -> LockrError {
        LockrError::StoreWriteError(format!("{} {}: {}", what, self.path.display(), e))
    }

    fn read_error(&self, what: &str, e: impl std::fmt::Display) -> LockrError {
        LockrError::StoreReadError(format!("{} {}: {}", what, self.path.display(), e))
    }
}

/// Serialize a single-field JSON object followed by a newline
fn render_document(key: &str, value: &str) -> serde_json::Result<String> {
    let mut document = Map::new();
    document.insert(key.to_string(), Value::String(value.to_string()));

    let mut text = serde_json::to_string_pretty(&Value::Object(document))?;
    text.push('\n');
    Ok(text)
}

impl RecordStore for JsonFileStore {
    fn write_record(&self, key: &str, value: &str) -> Result<()> {
        let text = render_document(key, value)
            .map_err(|e| self.write_error("Failed to serialize record for", e))?;

        // Temp file must live in the destination directory for the rename to be atomic
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)
            .map_err(|e| self.write_error("Failed to create temp file for", e))?;
        temp.write_all(text.as_bytes())
            .map_err(|e| self.write_error("Failed to write", e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| self.write_error("Failed to sync", e))?;
        temp.persist(&self.path)
            .map_err(|e| self.write_error("Failed to replace", e.error))?;

        debug!(path = %self.path.display(), "record written");
        Ok(())
    }

    fn read_record(&self, key: &str) -> Result<Option<String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.read_error("Failed to read", e)),
        };

        let document: Map<String, Value> = serde_json::from_str(&text)
            .map_err(|e| self.read_error("Failed to parse", e))?;

        match document.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(self.read_error(
                "Non-string record in",
                format!("{} is {}", key, other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_document_format() {
        let text = render_document("alice", "00ff").unwrap();
        assert_eq!(text, "{\n  \"alice\": \"00ff\"\n}\n");
    }

    #[test]
    fn test_render_document_escapes() {
        let text = render_document("we\"ird", "v").unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.get("we\"ird"), Some(&Value::String("v".to_string())));
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("creds.json"));

        store.write_record("alice", "abcdef").unwrap();
        assert_eq!(store.read_record("alice").unwrap(), Some("abcdef".to_string()));
        assert_eq!(store.read_record("bob").unwrap(), None);
    }

    #[test]
    fn test_write_replaces_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creds.json");
        let store = JsonFileStore::new(&path);

        store.write_record("alice", "0011").unwrap();
        store.write_record("bob", "2233").unwrap();

        assert_eq!(store.read_record("alice").unwrap(), None);
        assert_eq!(store.read_record("bob").unwrap(), Some("2233".to_string()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"bob\": \"2233\"\n}\n");
    }

    #[test]
    fn test_write_overwrites_foreign_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creds.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        store.write_record("alice", "0011").unwrap();
        assert_eq!(store.read_record("alice").unwrap(), Some("0011".to_string()));
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("creds.json"));
        store.write_record("alice", "0011").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_missing_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("no_such_dir").join("creds.json"));

        let result = store.write_record("alice", "0011");
        assert!(matches!(result, Err(LockrError::StoreWriteError(_))));
    }

    #[test]
    fn test_write_onto_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        let result = store.write_record("alice", "0011");
        assert!(matches!(result, Err(LockrError::StoreWriteError(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("creds.json"));
        assert_eq!(store.read_record("alice").unwrap(), None);
    }

    #[test]
    fn test_read_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creds.json");
        fs::write(&path, "{ broken").unwrap();

        let store = JsonFileStore::new(&path);
        let result = store.read_record("alice");
        assert!(matches!(result, Err(LockrError::StoreReadError(_))));
    }

    #[test]
    fn test_read_non_string_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("creds.json");
        fs::write(&path, r#"{ "alice": 42 }"#).unwrap();

        let store = JsonFileStore::new(&path);
        let result = store.read_record("alice");
        assert!(matches!(result, Err(LockrError::StoreReadError(_))));
    }
}
