//! Password-based AES-256-GCM envelope
//!
//! An envelope is a single printable string:
//!
//! ```text
//! base64(salt[16]) ":" base64(nonce[12]) ":" base64(ciphertext || tag[16])
//! ```
//!
//! Salt and nonce are drawn from the OS RNG on every call, so encrypting the
//! same value twice under the same passphrase never yields the same string.
//! The payload is the compact JSON text of the value. No associated data is
//! bound to the ciphertext.

use std::fmt;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{VaultError, VaultResult};

use super::key_derivation::{derive_key, DerivedKey, SALT_SIZE};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Separator between the three base64 parts
pub const DELIMITER: char = ':';

/// Decoded envelope parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub salt: [u8; SALT_SIZE],
    pub nonce: [u8; NONCE_SIZE],
    /// Ciphertext with the authentication tag appended
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Split and decode an envelope string
    ///
    /// Only checks structure. Nothing here tells a right passphrase from a
    /// wrong one.
    pub fn parse(envelope: &str) -> VaultResult<Self> {
        let parts: Vec<&str> = envelope.split(DELIMITER).collect();
        if parts.len() != 3 {
            return Err(VaultError::Format(format!(
                "expected 3 parts, got {}",
                parts.len()
            )));
        }

        let salt = decode_part("salt", parts[0])?;
        let nonce = decode_part("nonce", parts[1])?;
        let ciphertext = decode_part("ciphertext", parts[2])?;

        let salt: [u8; SALT_SIZE] = salt.as_slice().try_into().map_err(|_| {
            VaultError::Format(format!(
                "Invalid salt size: expected {}, got {}",
                SALT_SIZE,
                salt.len()
            ))
        })?;
        let nonce: [u8; NONCE_SIZE] = nonce.as_slice().try_into().map_err(|_| {
            VaultError::Format(format!(
                "Invalid nonce size: expected {}, got {}",
                NONCE_SIZE,
                nonce.len()
            ))
        })?;

        Ok(Self {
            salt,
            nonce,
            ciphertext,
        })
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            STANDARD.encode(self.salt),
            DELIMITER,
            STANDARD.encode(self.nonce),
            DELIMITER,
            STANDARD.encode(&self.ciphertext)
        )
    }
}

fn decode_part(label: &str, part: &str) -> VaultResult<Vec<u8>> {
    STANDARD
        .decode(part)
        .map_err(|e| VaultError::Format(format!("Invalid {} encoding: {}", label, e)))
}

fn cipher_for(key: &DerivedKey) -> VaultResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::Encryption(format!("Failed to create cipher: {}", e)))
}

/// Encrypt a JSON-serializable value under a passphrase
///
/// The passphrase is not checked here. Callers must refuse empty ones.
pub fn encrypt<T: Serialize + ?Sized>(value: &T, passphrase: &str) -> VaultResult<String> {
    let plaintext = serde_json::to_vec(value)
        .map_err(|e| VaultError::Encryption(format!("Failed to serialize value: {}", e)))?;

    let mut salt = [0u8; SALT_SIZE];
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(passphrase, &salt)?;
    let cipher = cipher_for(&key)?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_slice())
        .map_err(|e| VaultError::Encryption(format!("Encryption failed: {}", e)))?;

    let envelope = Envelope {
        salt,
        nonce: nonce_bytes,
        ciphertext,
    };
    log::debug!(
        "sealed {} plaintext bytes into {} ciphertext bytes",
        plaintext.len(),
        envelope.ciphertext.len()
    );

    Ok(envelope.to_string())
}

/// Decrypt an envelope string back into a JSON value
pub fn decrypt(envelope: &str, passphrase: &str) -> VaultResult<serde_json::Value> {
    let envelope = Envelope::parse(envelope)?;
    let plaintext = open(&envelope, passphrase)?;

    serde_json::from_slice(&plaintext).map_err(|e| {
        VaultError::Decryption(format!("Decrypted payload is not valid JSON: {}", e))
    })
}

/// Decrypt an envelope and deserialize it into `T`
///
/// A payload that authenticates but does not fit `T` is a decryption error.
pub fn decrypt_as<T: DeserializeOwned>(envelope: &str, passphrase: &str) -> VaultResult<T> {
    let value = decrypt(envelope, passphrase)?;
    serde_json::from_value(value).map_err(|e| {
        VaultError::Decryption(format!("Decrypted payload has unexpected shape: {}", e))
    })
}

fn open(envelope: &Envelope, passphrase: &str) -> VaultResult<Vec<u8>> {
    if envelope.ciphertext.len() < TAG_SIZE {
        return Err(VaultError::Decryption(
            "ciphertext shorter than authentication tag".to_string(),
        ));
    }

    let key = derive_key(passphrase, &envelope.salt)?;
    let cipher = cipher_for(&key)?;

    cipher
        .decrypt(
            Nonce::from_slice(&envelope.nonce),
            envelope.ciphertext.as_slice(),
        )
        .map_err(|_| {
            VaultError::Decryption("invalid passphrase or corrupted data".to_string())
        })
}
