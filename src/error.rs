//! Error types for Lockr Core

use thiserror::Error;

/// Main error type for credential operations
#[derive(Error, Debug)]
pub enum LockrError {
    /// No store destination configured yet
    #[error("Credential store is not initialized")]
    NotInitialized,

    /// Store destination was already configured
    #[error("Credential store is already initialized")]
    AlreadyInitialized,

    /// A required text field was empty
    #[error("Field cannot be empty: {0}")]
    EmptyField(&'static str),

    /// Derived secret is shorter than the key length
    #[error("Derived secret too short: {0} bytes")]
    KeyTooShort(usize),

    /// Key material has the wrong length for the cipher
    #[error("Invalid key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// Password exceeds the configured maximum length
    #[error("Password too long: {len} bytes (max {max})")]
    PasswordTooLong { len: usize, max: usize },

    /// Ciphertext payload is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Padding check failed - wrong key or corrupted data
    #[error("Invalid padding")]
    InvalidPadding,

    /// Stored text could not be decoded
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Configuration is missing or malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No record stored for the given username
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Destination could not be written
    #[error("Store write error: {0}")]
    StoreWriteError(String),

    /// Destination could not be read or parsed
    #[error("Store read error: {0}")]
    StoreReadError(String),
}

/// Result type alias for credential operations
pub type Result<T> = std::result::Result<T, LockrError>;
