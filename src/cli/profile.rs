//! Profile CLI commands
//!
//! Implements save, show, export, import and forget on top of
//! [`ProfileVault`](crate::vault::ProfileVault).

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::activity::{ActivityEntry, ActivityEvent, ActivityLogger};
use crate::config::{paths::VaultPaths, settings::Settings};
use crate::display::format_profile_details;
use crate::error::{VaultError, VaultResult};
use crate::models::HealthProfile;
use crate::storage::FileStore;
use crate::vault::{CurrentProfile, ImportOptions, Outcome, PassphraseSource, ProfileVault};

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Encrypt a profile and save it to local storage
    Save {
        /// Plain JSON profile to save
        #[arg(short, long)]
        from: PathBuf,
    },

    /// Decrypt the saved profile and print it
    Show,

    /// Write an encrypted export file
    Export {
        /// Output file (defaults to the configured export file name)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Plain JSON profile to export when nothing is saved yet
        #[arg(short, long)]
        from: Option<PathBuf>,
    },

    /// Decrypt an export file and load it
    Import {
        /// Export file to read
        file: PathBuf,

        /// Also save the imported profile to local storage
        #[arg(short, long)]
        save: bool,
    },

    /// Show whether an encrypted profile is saved
    Status,

    /// Delete the saved encrypted profile
    Forget,
}

/// Handle a profile command
pub fn handle_profile_command(
    paths: &VaultPaths,
    settings: &Settings,
    passphrases: Box<dyn PassphraseSource>,
    cmd: ProfileCommands,
) -> VaultResult<()> {
    paths.ensure_directories()?;
    let mut vault = ProfileVault::new(FileStore::new(paths.storage_file()), passphrases);
    let activity = settings
        .activity_log_enabled
        .then(|| ActivityLogger::new(paths.activity_log()));

    match cmd {
        ProfileCommands::Save { from } => {
            let current = CurrentProfile::with_profile(load_plain_profile(&from)?);

            match vault.save_current(&current)? {
                Outcome::Completed(()) => {
                    println!("Profile saved encrypted in local storage.");
                    println!("Use the same passphrase to restore or export it.");
                    record(&activity, ActivityEntry::new(ActivityEvent::ProfileSaved));
                }
                Outcome::Cancelled => print_cancelled(),
            }
        }

        ProfileCommands::Show => {
            let mut current = CurrentProfile::new();

            match vault.restore_saved(&mut current)? {
                Outcome::Completed(profile) => {
                    print!("{}", format_profile_details(&profile));
                    record(&activity, ActivityEntry::new(ActivityEvent::ProfileRestored));
                }
                Outcome::Cancelled => print_cancelled(),
            }
        }

        ProfileCommands::Export { out, from } => {
            let current = match from {
                Some(path) => CurrentProfile::with_profile(load_plain_profile(&path)?),
                None => CurrentProfile::new(),
            };
            let out = out.unwrap_or_else(|| PathBuf::from(&settings.export_file_name));

            match vault.export_to_file(&current, &out)? {
                Outcome::Completed(path) => {
                    println!("Encrypted profile exported to {}", path.display());
                    record(
                        &activity,
                        ActivityEntry::new(ActivityEvent::ProfileExported)
                            .with_detail(path.display().to_string()),
                    );
                }
                Outcome::Cancelled => print_cancelled(),
            }
        }

        ProfileCommands::Import { file, save } => {
            let options = ImportOptions {
                save_to_storage: save || settings.save_imported_profiles,
            };
            let mut current = CurrentProfile::new();

            match vault.import_file(&file, &mut current, options)? {
                Outcome::Completed(profile) => {
                    println!("Profile imported and loaded successfully.");
                    if options.save_to_storage {
                        println!("It was also saved encrypted in local storage.");
                    }
                    println!();
                    print!("{}", format_profile_details(&profile));
                    record(
                        &activity,
                        ActivityEntry::new(ActivityEvent::ProfileImported)
                            .with_detail(file.display().to_string()),
                    );
                }
                Outcome::Cancelled => print_cancelled(),
            }
        }

        ProfileCommands::Status => {
            if vault.has_saved_profile()? {
                println!("An encrypted profile is saved.");
            } else {
                println!("No encrypted profile is saved.");
                println!("Save one with: biobalance profile save --from <profile.json>");
            }
        }

        ProfileCommands::Forget => {
            if vault.forget_saved()? {
                println!("Saved encrypted profile removed.");
                record(&activity, ActivityEntry::new(ActivityEvent::ProfileForgotten));
            } else {
                println!("No encrypted profile was saved.");
            }
        }
    }

    Ok(())
}

/// Read a plain (unencrypted) profile file, accepting the same shapes as import
fn load_plain_profile(path: &Path) -> VaultResult<HealthProfile> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| VaultError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    Ok(HealthProfile::from_imported(&value))
}

fn print_cancelled() {
    println!("Passphrase not provided. Nothing was changed.");
}

/// Activity log failures are reported but never fail the command
pub(crate) fn record(logger: &Option<ActivityLogger>, entry: ActivityEntry) {
    if let Some(logger) = logger {
        if let Err(e) = logger.log(&entry) {
            log::warn!("could not write activity log: {}", e);
        }
    }
}
