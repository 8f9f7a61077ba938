//! User settings for BioBalance Vault

use serde::{Deserialize, Serialize};

use super::paths::VaultPaths;
use crate::error::VaultError;
use crate::storage::file_io::write_json_atomic;

/// Default file name offered for encrypted exports
pub const DEFAULT_EXPORT_FILE_NAME: &str = "biobalance_profile_encrypted.json";

/// User settings for BioBalance Vault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// File name used when exporting without an explicit path
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Whether an imported profile is also saved to storage by default
    #[serde(default)]
    pub save_imported_profiles: bool,

    /// Whether vault operations are recorded in the activity log
    #[serde(default = "default_true")]
    pub activity_log_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            export_file_name: default_export_file_name(),
            save_imported_profiles: false,
            activity_log_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &VaultPaths) -> Result<Self, VaultError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| VaultError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| VaultError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VaultPaths) -> Result<(), VaultError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.export_file_name, DEFAULT_EXPORT_FILE_NAME);
        assert!(!settings.save_imported_profiles);
        assert!(settings.activity_log_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.save_imported_profiles = true;
        settings.export_file_name = "backup.json".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.save_imported_profiles);
        assert_eq!(loaded.export_file_name, "backup.json");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded.schema_version, 1);
        assert!(loaded.activity_log_enabled);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, VaultError::Config(_)));
    }
}
