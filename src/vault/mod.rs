//! Profile persistence
//!
//! Decides when to call the envelope. Passphrases come from an injected
//! [`PassphraseSource`], envelopes live in an injected
//! [`KeyValueStore`](crate::storage::KeyValueStore), and the decrypted
//! profile is handed to an injected [`ProfileStore`].
//!
//! # Example
//!
//! ```rust,ignore
//! use biobalance::storage::FileStore;
//! use biobalance::vault::{CurrentProfile, ProfileVault, TerminalPrompt};
//!
//! let mut vault = ProfileVault::new(FileStore::new(paths.storage_file()), TerminalPrompt);
//! let mut current = CurrentProfile::new();
//! vault.restore_saved(&mut current)?;
//! ```

pub mod document;
pub mod orchestrator;
pub mod profile_store;
pub mod prompt;

pub use document::{extract_envelope, ExportDocument, ENVELOPE_FIELDS};
pub use orchestrator::{ImportOptions, Outcome, ProfileVault};
pub use profile_store::{CurrentProfile, ProfileStore};
pub use prompt::{FixedPassphrase, PassphraseSource, TerminalPrompt};
