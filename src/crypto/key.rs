//! Key preparation for AES-128
//!
//! The caller supplies an already-derived secret (typically a hash digest).
//! The first 16 bytes of it become the cipher key.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{LockrError, Result};

/// Key length for AES-128 (16 bytes = 128 bits)
pub const KEY_LENGTH: usize = 16;

/// Fixed-length cipher key, wiped from memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial([u8; KEY_LENGTH]);

impl KeyMaterial {
    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for KeyMaterial {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}

/// Prepare a cipher key from a pre-derived secret
///
/// Copies the first [`KEY_LENGTH`] bytes of `secret`; anything after that
/// is ignored.
///
/// # Errors
///
/// [`LockrError::KeyTooShort`] if `secret` holds fewer than 16 bytes.
pub fn prepare_key(secret: &[u8]) -> Result<KeyMaterial> {
    let Some(head) = secret.get(..KEY_LENGTH) else {
        return Err(LockrError::KeyTooShort(secret.len()));
    };

    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(head);
    Ok(KeyMaterial(key))
}
