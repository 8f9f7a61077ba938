//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Stretches a passphrase and a per-envelope salt into a 256-bit AES key.
//! The parameters are fixed: envelopes do not record them, so changing any
//! of these constants makes every previously stored envelope unreadable.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{VaultError, VaultResult};

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 250_000;

/// Salt length in bytes
pub const SALT_SIZE: usize = 16;

/// Derived key length in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// A derived encryption key
///
/// Lives only for the duration of one encrypt or decrypt call and is zeroed
/// on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

/// Derive an encryption key from a passphrase and salt
pub fn derive_key(passphrase: &str, salt: &[u8]) -> VaultResult<DerivedKey> {
    if salt.len() != SALT_SIZE {
        return Err(VaultError::Format(format!(
            "Invalid salt size: expected {}, got {}",
            SALT_SIZE,
            salt.len()
        )));
    }

    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);

    Ok(DerivedKey { key })
}
