//! CLI command handlers
//!
//! Bridges clap argument parsing with the vault and theme layers.

pub mod profile;
pub mod theme;

pub use profile::{handle_profile_command, ProfileCommands};
pub use theme::{handle_theme_command, ThemeCommands};
