//! Store configuration
//!
//! A [`StoreConfig`] names the destination document and carries optional
//! limits applied before encryption. It can be built in code or loaded
//! from a JSON file:
//!
//! ```json
//! { "path": "creds.json", "max_password_length": 111 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LockrError, Result};

/// Destination and limits for a credential store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON document that receives records
    pub path: PathBuf,

    /// Maximum password length in bytes, unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_password_length: Option<usize>,
}

impl StoreConfig {
    /// Create a config for `path` with no password limit
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let config = Self {
            path: path.into(),
            max_password_length: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum password length
    pub fn with_max_password_length(mut self, max: usize) -> Self {
        self.max_password_length = Some(max);
        self
    }

    /// Load and validate a config from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            LockrError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|e| {
            LockrError::InvalidConfig(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can be used
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(LockrError::InvalidConfig("store path is empty".to_string()));
        }
        if self.max_password_length == Some(0) {
            return Err(LockrError::InvalidConfig(
                "max_password_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
