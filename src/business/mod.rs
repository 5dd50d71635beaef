//! Business logic layer for Lockr
//!
//! This module provides the high-level credential registration API.

pub mod credentials;

pub use credentials::{AccountRegistry, CodecState, CredentialCodec};
