//! # Lockr Core
//!
//! Password protection for stored credentials.
//!
//! ## Features
//!
//! - AES-128-CBC encryption with PKCS7 padding
//! - Fresh random IV per encryption, stored in front of the ciphertext
//! - Lowercase hex encoding of `iv || ciphertext` for text-safe storage
//! - Atomic single-record JSON store
//!
//! ## Example
//!
//! ```no_run
//! use lockr::{AccountRegistry, CredentialCodec};
//!
//! let codec = CredentialCodec::new();
//! codec.initialize("creds.json").unwrap();
//!
//! // The secret is derived by the caller; its first 16 bytes become the key
//! let secret = b"5f4dcc3b5aa765d61d8327deb882cf99";
//! codec.register_account("alice", "s3cret", secret).unwrap();
//!
//! assert_eq!(codec.reveal_password("alice", secret).unwrap(), "s3cret");
//! ```

pub mod crypto;
pub mod business;
pub mod store;
pub mod config;
pub mod error;

// Re-export main types
pub use error::{LockrError, Result};
pub use business::{AccountRegistry, CodecState, CredentialCodec};
pub use store::{JsonFileStore, MemoryStore, RecordStore};
pub use config::StoreConfig;
