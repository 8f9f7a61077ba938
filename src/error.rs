//! Custom error types for BioBalance Vault
//!
//! This module defines the error hierarchy for the crate using thiserror.
//! The three envelope errors (`Format`, `Decryption`, `Encryption`) are the
//! ones callers of the crypto layer need to tell apart; the rest belong to
//! the persistence and configuration layers.

use thiserror::Error;

/// The main error type for BioBalance Vault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// Malformed envelope string (wrong part count, bad base64, bad lengths)
    #[error("Invalid envelope format: {0}")]
    Format(String),

    /// Authentication failed or the decrypted bytes were not valid JSON
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// The underlying primitive rejected its inputs
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Export document could not be read as an encrypted profile
    #[error("Import error: {0}")]
    Import(String),

    /// No current profile in memory
    #[error("No current profile to save or export")]
    NoProfile,

    /// Nothing stored under the profile key
    #[error("No saved encrypted profile found")]
    NoSavedProfile,

    /// Passphrase input failed
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl VaultError {
    /// Check if this is an envelope format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is an authentication/decryption error
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption(_))
    }

    /// Check if this is an encryption primitive error
    pub fn is_encryption(&self) -> bool {
        matches!(self, Self::Encryption(_))
    }

    /// Message suitable for showing to the end user.
    ///
    /// Points them at the recovery action for each failure class.
    pub fn user_hint(&self) -> &'static str {
        match self {
            Self::Format(_) | Self::Import(_) => {
                "The stored or imported data is unusable. Re-save or re-import the profile."
            }
            Self::Decryption(_) => {
                "Check the passphrase and try again, or treat the file as corrupted."
            }
            Self::Encryption(_) => "Encryption failed. Please try again.",
            Self::NoProfile => "Load or create a profile first.",
            Self::NoSavedProfile => "Save a profile first.",
            _ => "The operation was abandoned. No data was changed.",
        }
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for BioBalance Vault operations
pub type VaultResult<T> = Result<T, VaultError>;
