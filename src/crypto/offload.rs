//! Async wrappers around the envelope functions
//!
//! Key derivation is deliberately slow, so the async variants run the
//! synchronous functions on tokio's blocking pool and suspend the caller
//! until they finish. A started call always runs to completion.

use serde::Serialize;

use crate::error::{VaultError, VaultResult};

use super::envelope;
use super::secure_memory::SecureString;

/// Encrypt a value without blocking the calling task
pub async fn encrypt_async<T: Serialize + ?Sized>(
    value: &T,
    passphrase: &str,
) -> VaultResult<String> {
    let value = serde_json::to_value(value)
        .map_err(|e| VaultError::Encryption(format!("Failed to serialize value: {}", e)))?;
    let passphrase = SecureString::from(passphrase);

    tokio::task::spawn_blocking(move || envelope::encrypt(&value, passphrase.as_str()))
        .await
        .map_err(|e| VaultError::Encryption(format!("Encryption task failed: {}", e)))?
}

/// Decrypt an envelope without blocking the calling task
pub async fn decrypt_async(sealed: &str, passphrase: &str) -> VaultResult<serde_json::Value> {
    let sealed = sealed.to_string();
    let passphrase = SecureString::from(passphrase);

    tokio::task::spawn_blocking(move || envelope::decrypt(&sealed, passphrase.as_str()))
        .await
        .map_err(|e| VaultError::Decryption(format!("Decryption task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_async_round_trip() {
        let value = json!({"name": "Mike", "age": 58, "conditions": ["diabetes"]});

        let sealed = encrypt_async(&value, "hunter22").await.unwrap();
        let opened = decrypt_async(&sealed, "hunter22").await.unwrap();

        assert_eq!(opened, value);
    }

    #[tokio::test]
    async fn test_async_and_sync_interoperate() {
        let sealed = encrypt_async(&json!([1, 2]), "pass").await.unwrap();
        assert_eq!(envelope::decrypt(&sealed, "pass").unwrap(), json!([1, 2]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_decrypts_are_independent() {
        let first = envelope::encrypt(&json!({"n": 1}), "one").unwrap();
        let second = envelope::encrypt(&json!({"n": 2}), "two").unwrap();

        let (a, b, wrong) = tokio::join!(
            decrypt_async(&first, "one"),
            decrypt_async(&second, "two"),
            decrypt_async(&first, "two"),
        );

        assert_eq!(a.unwrap(), json!({"n": 1}));
        assert_eq!(b.unwrap(), json!({"n": 2}));
        assert!(wrong.unwrap_err().is_decryption());
    }

    #[tokio::test]
    async fn test_async_format_error_passes_through() {
        let err = decrypt_async("only:two", "pass").await.unwrap_err();
        assert!(err.is_format());
    }
}
