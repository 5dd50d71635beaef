//! AES-128-CBC encryption and decryption
//!
//! Payload layout: `iv (16 bytes) || ciphertext`, where the ciphertext is
//! the CBC encryption of the PKCS#7 padded plaintext.
//!
//! There is no authentication tag. The padding check on decryption catches
//! most wrong keys and corruptions, but a tampered payload can still decrypt
//! to garbage that happens to carry valid padding.

use aes::Aes128;
use block_padding::NoPadding;
use cbc::cipher::{BlockModeDecrypt, BlockModeEncrypt, KeyIvInit};
use cbc::{Decryptor, Encryptor};
use rand::RngCore;

use super::key::KEY_LENGTH;
use super::padding::{pad, unpad, BLOCK_SIZE};
use crate::error::{LockrError, Result};

/// IV size for AES-CBC (16 bytes = 128 bits)
pub const IV_SIZE: usize = 16;

type Aes128CbcEnc = Encryptor<Aes128>;
type Aes128CbcDec = Decryptor<Aes128>;

/// Encrypt plaintext using AES-128-CBC
///
/// # Arguments
///
/// * `plaintext` - Bytes to encrypt, any length
/// * `key` - Exactly 16 bytes of key material
/// * `iv` - IV to use; a fresh random one is generated when `None`
///
/// # Returns
///
/// `iv || ciphertext`
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: Option<[u8; IV_SIZE]>) -> Result<Vec<u8>> {
    let key = checked_key(key)?;
    let iv = iv.unwrap_or_else(generate_iv);

    let mut buffer = pad(plaintext);
    let padded_len = buffer.len();

    let encryptor = Aes128CbcEnc::new(key.into(), &iv.into());
    encryptor
        .encrypt_padded::<NoPadding>(&mut buffer, padded_len)
        .map_err(|_| LockrError::InvalidInput("padded buffer is not block aligned".to_string()))?;

    let mut payload = Vec::with_capacity(IV_SIZE + padded_len);
    payload.extend_from_slice(&iv);
    payload.extend_from_slice(&buffer);
    Ok(payload)
}

/// Decrypt an `iv || ciphertext` payload produced by [`encrypt`]
///
/// # Errors
///
/// * [`LockrError::InvalidInput`] - payload shorter than an IV, empty
///   ciphertext, or ciphertext not a multiple of the block size
/// * [`LockrError::InvalidPadding`] - wrong key or corrupted data
/// * [`LockrError::InvalidKeyLength`] - key is not 16 bytes
pub fn decrypt(payload: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = checked_key(key)?;

    if payload.len() < IV_SIZE {
        return Err(LockrError::InvalidInput(format!(
            "payload is {} bytes, shorter than the {}-byte IV",
            payload.len(),
            IV_SIZE
        )));
    }

    let (iv, ciphertext) = payload.split_at(IV_SIZE);
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(LockrError::InvalidInput(format!(
            "ciphertext length {} is not a positive multiple of {}",
            ciphertext.len(),
            BLOCK_SIZE
        )));
    }

    let iv: &[u8; IV_SIZE] = iv
        .try_into()
        .map_err(|_| LockrError::InvalidInput("malformed IV".to_string()))?;

    // Create a mutable copy for in-place decryption
    let mut buffer = ciphertext.to_vec();

    let decryptor = Aes128CbcDec::new(key.into(), iv.into());
    let decrypted = decryptor
        .decrypt_padded::<NoPadding>(&mut buffer)
        .map_err(|_| LockrError::InvalidInput("ciphertext is not block aligned".to_string()))?;

    Ok(unpad(decrypted)?.to_vec())
}

/// Generate a fresh IV from the thread-local CSPRNG
pub fn generate_iv() -> [u8; IV_SIZE] {
    let mut iv = [0u8; IV_SIZE];
    rand::rng().fill_bytes(&mut iv);
    iv
}

fn checked_key(key: &[u8]) -> Result<&[u8; KEY_LENGTH]> {
    key.try_into()
        .map_err(|_| LockrError::InvalidKeyLength(key.len()))
}
