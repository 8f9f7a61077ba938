//! Save, export, import and restore flows
//!
//! Every flow finishes all of its fallible work before it touches the
//! stored envelope or the current profile. A failure or a cancelled prompt
//! leaves both as they were.

use std::path::{Path, PathBuf};

use crate::crypto::{self, SecureString};
use crate::error::{VaultError, VaultResult};
use crate::models::HealthProfile;
use crate::storage::{write_json_atomic, KeyValueStore, PROFILE_KEY};

use super::document::{extract_envelope, ExportDocument};
use super::profile_store::ProfileStore;
use super::prompt::PassphraseSource;

pub const SAVE_PROMPT: &str = "Enter a passphrase to encrypt your profile (keep it safe)";
pub const EXPORT_PROMPT: &str =
    "No saved encrypted profile found. Enter a passphrase to encrypt current profile for export";
pub const IMPORT_PROMPT: &str = "Enter passphrase to decrypt the imported profile";
pub const RESTORE_PROMPT: &str = "Enter passphrase to unlock your saved profile";

/// Result of a flow that may stop at a passphrase prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Completed(T),
    /// The user declined to give a passphrase; nothing was changed
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }
}

/// Options for the import flow
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Also save the imported profile, re-encrypted with the same passphrase
    pub save_to_storage: bool,
}

/// Coordinates the envelope with storage, files and passphrase prompts
pub struct ProfileVault<S: KeyValueStore, P: PassphraseSource> {
    store: S,
    passphrases: P,
}

impl<S: KeyValueStore, P: PassphraseSource> ProfileVault<S, P> {
    pub fn new(store: S, passphrases: P) -> Self {
        Self { store, passphrases }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Whether an encrypted profile is currently saved
    pub fn has_saved_profile(&self) -> VaultResult<bool> {
        self.store.contains(PROFILE_KEY)
    }

    /// Encrypt the current profile and save it, replacing any earlier save
    pub fn save_current(&mut self, profiles: &impl ProfileStore) -> VaultResult<Outcome<()>> {
        let profile = profiles.current().ok_or(VaultError::NoProfile)?;

        let Some(passphrase) = self.ask(SAVE_PROMPT)? else {
            log::info!("save cancelled at passphrase prompt");
            return Ok(Outcome::Cancelled);
        };

        let envelope = crypto::encrypt(profile, &passphrase)?;
        self.store.set(PROFILE_KEY, &envelope)?;

        log::info!("saved encrypted profile ({} bytes)", envelope.len());
        Ok(Outcome::Completed(()))
    }

    /// Build an export document
    ///
    /// Reuses the saved envelope when there is one; otherwise the current
    /// profile is encrypted under a freshly prompted passphrase. Exporting
    /// never writes to storage.
    pub fn export(&mut self, profiles: &impl ProfileStore) -> VaultResult<Outcome<ExportDocument>> {
        if let Some(envelope) = self.store.get(PROFILE_KEY)? {
            log::debug!("exporting saved envelope");
            return Ok(Outcome::Completed(ExportDocument::new(envelope)));
        }

        let profile = profiles.current().ok_or(VaultError::NoProfile)?;
        let Some(passphrase) = self.ask(EXPORT_PROMPT)? else {
            log::info!("export cancelled at passphrase prompt");
            return Ok(Outcome::Cancelled);
        };

        let envelope = crypto::encrypt(profile, &passphrase)?;
        Ok(Outcome::Completed(ExportDocument::new(envelope)))
    }

    /// Export and write the document to `path`
    pub fn export_to_file(
        &mut self,
        profiles: &impl ProfileStore,
        path: &Path,
    ) -> VaultResult<Outcome<PathBuf>> {
        let document = match self.export(profiles)? {
            Outcome::Completed(document) => document,
            Outcome::Cancelled => return Ok(Outcome::Cancelled),
        };

        write_json_atomic(path, &document)?;
        log::info!("exported encrypted profile to {}", path.display());
        Ok(Outcome::Completed(path.to_path_buf()))
    }

    /// Decrypt an export document and make it the current profile
    pub fn import_document(
        &mut self,
        text: &str,
        profiles: &mut impl ProfileStore,
        options: ImportOptions,
    ) -> VaultResult<Outcome<HealthProfile>> {
        let envelope = extract_envelope(text)?;

        let Some(passphrase) = self.ask(IMPORT_PROMPT)? else {
            log::info!("import cancelled at passphrase prompt");
            return Ok(Outcome::Cancelled);
        };

        let value = crypto::decrypt(&envelope, &passphrase)?;
        let profile = HealthProfile::from_imported(&value);

        if options.save_to_storage {
            let resealed = crypto::encrypt(&profile, &passphrase)?;
            self.store.set(PROFILE_KEY, &resealed)?;
            log::info!("saved imported profile to storage");
        }

        profiles.replace(profile.clone());
        log::info!("imported profile");
        Ok(Outcome::Completed(profile))
    }

    /// Read an export file and import it
    pub fn import_file(
        &mut self,
        path: &Path,
        profiles: &mut impl ProfileStore,
        options: ImportOptions,
    ) -> VaultResult<Outcome<HealthProfile>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| VaultError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        self.import_document(&text, profiles, options)
    }

    /// Decrypt the saved envelope and make it the current profile
    pub fn restore_saved(
        &mut self,
        profiles: &mut impl ProfileStore,
    ) -> VaultResult<Outcome<HealthProfile>> {
        let envelope = self
            .store
            .get(PROFILE_KEY)?
            .ok_or(VaultError::NoSavedProfile)?;

        let Some(passphrase) = self.ask(RESTORE_PROMPT)? else {
            log::info!("restore cancelled at passphrase prompt");
            return Ok(Outcome::Cancelled);
        };

        let value = crypto::decrypt(&envelope, &passphrase)?;
        let profile = HealthProfile::from_imported(&value);

        profiles.replace(profile.clone());
        log::info!("restored saved profile");
        Ok(Outcome::Completed(profile))
    }

    /// Delete the saved envelope, returning whether one existed
    pub fn forget_saved(&mut self) -> VaultResult<bool> {
        let removed = self.store.remove(PROFILE_KEY)?;
        if removed {
            log::info!("removed saved encrypted profile");
        }
        Ok(removed)
    }

    /// Ask for a passphrase; empty input counts as cancelling
    fn ask(&mut self, message: &str) -> VaultResult<Option<SecureString>> {
        Ok(self
            .passphrases
            .obtain(message)?
            .filter(|passphrase| !passphrase.is_empty()))
    }
}
