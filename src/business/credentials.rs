//! Credential registration API
//!
//! [`CredentialCodec`] encrypts a user's password under a key taken from a
//! caller-supplied derived secret and hands the hex-encoded result to a
//! [`RecordStore`]. A codec starts uninitialized and becomes ready exactly
//! once, when its store destination is configured.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::crypto;
use crate::error::{LockrError, Result};
use crate::store::{JsonFileStore, RecordStore};

/// Lifecycle state of a codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecState {
    /// No destination configured; registration fails
    Uninitialized,
    /// Destination configured; registration accepted
    Ready,
}

/// Caller-facing entry points
pub trait AccountRegistry {
    /// Configure the store destination; allowed once
    fn initialize(&self, path: &str) -> Result<()>;

    /// Encrypt `password` and store it under `username`
    fn register_account(&self, username: &str, password: &str, secret: &[u8]) -> Result<()>;
}

/// Settings fixed at initialization
struct Ready<S> {
    store: S,
    max_password_length: Option<usize>,
}

/// Encrypts passwords and writes them as records to a store
pub struct CredentialCodec<S = JsonFileStore> {
    ready: OnceLock<Ready<S>>,
    /// Serializes store writes across threads
    write_lock: Mutex<()>,
}

impl CredentialCodec {
    /// Create an uninitialized codec backed by a JSON file
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the JSON destination from a full config
    pub fn initialize_with_config(&self, config: StoreConfig) -> Result<()> {
        config.validate()?;
        let StoreConfig { path, max_password_length } = config;

        self.attach(JsonFileStore::new(&path), max_password_length)?;
        info!(path = %path.display(), "credential store initialized");
        Ok(())
    }

    /// Path of the configured destination
    pub fn store_path(&self) -> Option<PathBuf> {
        self.ready.get().map(|ready| ready.store.path().to_path_buf())
    }
}

impl<S> Default for CredentialCodec<S> {
    fn default() -> Self {
        Self {
            ready: OnceLock::new(),
            write_lock: Mutex::new(()),
        }
    }
}

impl<S: RecordStore> CredentialCodec<S> {
    /// Make the codec ready over an arbitrary store
    pub fn attach_store(&self, store: S, max_password_length: Option<usize>) -> Result<()> {
        self.attach(store, max_password_length)?;
        info!("credential store attached");
        Ok(())
    }

    fn attach(&self, store: S, max_password_length: Option<usize>) -> Result<()> {
        self.ready
            .set(Ready { store, max_password_length })
            .map_err(|_| LockrError::AlreadyInitialized)
    }

    /// Current lifecycle state
    pub fn state(&self) -> CodecState {
        if self.ready.get().is_some() {
            CodecState::Ready
        } else {
            CodecState::Uninitialized
        }
    }

    /// The attached store, once ready
    pub fn store(&self) -> Option<&S> {
        self.ready.get().map(|ready| &ready.store)
    }

    fn ensure_ready(&self) -> Result<&Ready<S>> {
        self.ready.get().ok_or(LockrError::NotInitialized)
    }

    /// Encrypt `password` and write `username -> hex(iv || ciphertext)`
    ///
    /// Only the first 16 bytes of `secret` are used as the key. The write
    /// replaces everything previously held by the store.
    pub fn register_account(&self, username: &str, password: &str, secret: &[u8]) -> Result<()> {
        if username.is_empty() {
            return Err(LockrError::EmptyField("username"));
        }
        if password.is_empty() {
            return Err(LockrError::EmptyField("password"));
        }

        let ready = self.ensure_ready()?;

        if let Some(max) = ready.max_password_length {
            if password.len() > max {
                return Err(LockrError::PasswordTooLong { len: password.len(), max });
            }
        }

        let key = crypto::prepare_key(secret)?;
        let payload = crypto::encrypt(password.as_bytes(), key.as_ref(), None)?;
        let encrypted_password = crypto::encode_payload(&payload);

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = ready.store.write_record(username, &encrypted_password) {
            warn!(username, error = %e, "failed to store account");
            return Err(e);
        }

        info!(username, "account registered");
        Ok(())
    }

    /// Decrypt the password stored for `username`
    ///
    /// `secret` must be the same derived secret given at registration.
    pub fn reveal_password(&self, username: &str, secret: &[u8]) -> Result<String> {
        if username.is_empty() {
            return Err(LockrError::EmptyField("username"));
        }

        let ready = self.ensure_ready()?;
        let key = crypto::prepare_key(secret)?;

        let encoded = ready
            .store
            .read_record(username)?
            .ok_or_else(|| LockrError::RecordNotFound(username.to_string()))?;

        let payload = crypto::decode_payload(&encoded)?;
        let plaintext = crypto::decrypt(&payload, key.as_ref())?;

        debug!(username, "password revealed");
        String::from_utf8(plaintext).map_err(|e| LockrError::InvalidEncoding(e.to_string()))
    }
}

impl AccountRegistry for CredentialCodec {
    fn initialize(&self, path: &str) -> Result<()> {
        self.initialize_with_config(StoreConfig::new(path)?)
    }

    fn register_account(&self, username: &str, password: &str, secret: &[u8]) -> Result<()> {
        CredentialCodec::register_account(self, username, password, secret)
    }
}
