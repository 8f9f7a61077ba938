//! Cryptographic envelope for BioBalance profiles
//!
//! AES-256-GCM encryption with PBKDF2-HMAC-SHA256 key derivation. The
//! envelope is a self-contained `salt:nonce:ciphertext` string, so a
//! passphrase is all that is needed to open it again.

pub mod envelope;
pub mod key_derivation;
pub mod offload;
pub mod secure_memory;

pub use envelope::{decrypt, decrypt_as, encrypt, Envelope};
pub use key_derivation::{derive_key, DerivedKey, PBKDF2_ITERATIONS};
pub use offload::{decrypt_async, encrypt_async};
pub use secure_memory::SecureString;
