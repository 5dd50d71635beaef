//! Cryptographic operations for Lockr
//!
//! This module implements AES-128-CBC encryption with PKCS7 padding and a
//! random IV prepended to every ciphertext.

mod aes;
mod encoding;
mod key;
mod padding;

pub use aes::{encrypt, decrypt, generate_iv, IV_SIZE};
pub use encoding::{encode_payload, decode_payload};
pub use key::{prepare_key, KeyMaterial, KEY_LENGTH};
pub use padding::{pad, unpad, padded_len, BLOCK_SIZE};
