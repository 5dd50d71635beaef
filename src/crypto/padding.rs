//! PKCS#7 padding for 16-byte blocks
//!
//! Every pad byte holds the number of pad bytes added. Input that is
//! already block-aligned still gets a full extra block.

use crate::error::{LockrError, Result};

/// Cipher block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Length of `data` after padding: the next multiple of the block size
/// strictly greater than the input length.
pub fn padded_len(len: usize) -> usize {
    ((len / BLOCK_SIZE) + 1) * BLOCK_SIZE
}

/// Pad `data` to a positive multiple of [`BLOCK_SIZE`]
///
/// # Example
///
/// ```
/// use lockr::crypto::pad;
///
/// let padded = pad(b"s3cret");
/// assert_eq!(padded.len(), 16);
/// assert!(padded[6..].iter().all(|&b| b == 10));
/// ```
pub fn pad(data: &[u8]) -> Vec<u8> {
    let total = padded_len(data.len());
    let pad_value = (total - data.len()) as u8;

    let mut buffer = Vec::with_capacity(total);
    buffer.extend_from_slice(data);
    buffer.resize(total, pad_value);
    buffer
}

/// Strip PKCS#7 padding, returning the logical plaintext
///
/// Fails with [`LockrError::InvalidPadding`] if the final byte is outside
/// `1..=BLOCK_SIZE` or any of the trailing pad bytes disagree with it.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let Some(&last) = data.last() else {
        return Err(LockrError::InvalidPadding);
    };

    let pad_len = last as usize;
    if pad_len < 1 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(LockrError::InvalidPadding);
    }

    let (plaintext, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        return Err(LockrError::InvalidPadding);
    }

    Ok(plaintext)
}
