//! Theme CLI commands

use clap::Subcommand;

use crate::activity::{ActivityEntry, ActivityEvent, ActivityLogger};
use crate::config::{paths::VaultPaths, settings::Settings};
use crate::display::format_theme;
use crate::error::VaultResult;
use crate::storage::FileStore;
use crate::theme::{detect_prefers_dark, Theme, ThemePreference};

use super::profile::record;

/// Theme subcommands
#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,

    /// Set the theme
    Set {
        /// light, dark or system
        theme: Theme,
    },

    /// Switch to the next theme (system -> dark -> light -> system)
    #[command(alias = "toggle")]
    Cycle,
}

/// Handle a theme command
pub fn handle_theme_command(
    paths: &VaultPaths,
    settings: &Settings,
    cmd: ThemeCommands,
) -> VaultResult<()> {
    paths.ensure_directories()?;
    let mut preference = ThemePreference::new(FileStore::new(paths.storage_file()));
    let prefers_dark = detect_prefers_dark();
    let activity = settings
        .activity_log_enabled
        .then(|| ActivityLogger::new(paths.activity_log()));

    let changed = match cmd {
        ThemeCommands::Show => None,
        ThemeCommands::Set { theme } => {
            preference.set(theme, prefers_dark)?;
            Some(theme)
        }
        ThemeCommands::Cycle => Some(preference.cycle()?),
    };

    let theme = preference.current()?;
    println!("{}", format_theme(theme, theme.resolve(prefers_dark)));

    if let Some(theme) = changed {
        record(
            &activity,
            ActivityEntry::new(ActivityEvent::ThemeChanged).with_detail(theme.as_str()),
        );
    }

    Ok(())
}
