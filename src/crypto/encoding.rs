//! Text-safe encoding of ciphertext payloads
//!
//! Payloads are stored as lowercase hex, two characters per byte, no
//! separators.

use crate::error::{LockrError, Result};

/// Encode a payload as lowercase hex
///
/// # Example
///
/// ```
/// use lockr::crypto::encode_payload;
///
/// assert_eq!(encode_payload(&[0x00, 0xab, 0x7f]), "00ab7f");
/// ```
pub fn encode_payload(payload: &[u8]) -> String {
    hex::encode(payload)
}

/// Decode a hex string back into payload bytes
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>> {
    hex::decode(encoded).map_err(|e| LockrError::InvalidEncoding(e.to_string()))
}
