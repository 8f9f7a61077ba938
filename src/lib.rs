//! BioBalance Vault - encrypted health profiles and theme preferences
//!
//! This library keeps a BioBalance health profile on the local machine
//! without a backend. Profiles are sealed into a passphrase-protected
//! envelope (PBKDF2-HMAC-SHA256 + AES-256-GCM) that can be saved to a local
//! key-value store or exported to a file and imported again.
//!
//! # Architecture
//!
//! - `crypto`: the envelope (`encrypt` / `decrypt`) and its async variants
//! - `vault`: save / export / import / restore flows with injected
//!   passphrase source, storage and current-profile handle
//! - `storage`: string key-value stores (file-backed and in-memory)
//! - `models`: the canonical health profile and tolerant import mapping
//! - `theme`: light / dark / system preference
//! - `activity`: append-only activity log
//! - `config`: paths and user settings
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust,no_run
//! use biobalance::crypto::{decrypt, encrypt};
//! use serde_json::json;
//!
//! let envelope = encrypt(&json!({"name": "Alice", "age": 30}), "correct horse battery staple")?;
//! let profile = decrypt(&envelope, "correct horse battery staple")?;
//! assert_eq!(profile["name"], "Alice");
//! # Ok::<(), biobalance::VaultError>(())
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod theme;
pub mod vault;

pub use error::{VaultError, VaultResult};
