//! Configuration module for BioBalance Vault
//!
//! - Path resolution for config, data and the activity log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::VaultPaths;
pub use settings::Settings;
