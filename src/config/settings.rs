//! Stored user settings
//!
//! A flat JSON record: defaults → config file. Missing file means defaults.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Error, Result};

/// Name of the config file inside the project config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted configuration record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// GitHub personal access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Directory new repositories are created under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_directory: Option<PathBuf>,

    /// Create repositories as private by default
    pub private: bool,
}

impl Settings {
    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load settings from a specific path, falling back to defaults if it doesn't exist
    ///
    /// Relative paths are taken as-is; parent directories are never searched.
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Json::file_exact(path))
            .extract()
            .map_err(|e| {
                ConfigError::LoadFailed(format!("{}: {}", path.display(), e))
            })?;

        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to a specific path
    ///
    /// Writes a sibling temp file and renames it into place.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|_e| {
                Error::Config(ConfigError::DirectoryCreationFailed(parent.to_path_buf()))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, json)
            .map_err(|e| ConfigError::SaveFailed(format!("{}: {}", tmp.display(), e)))?;
        std::fs::rename(&tmp, path)
            .map_err(|e| ConfigError::SaveFailed(format!("{}: {}", path.display(), e)))?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "projectinit", "projectinit").ok_or_else(|| {
            Error::Config(ConfigError::LoadFailed(
                "Could not determine home directory".to_string(),
            ))
        })?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Base directory suggested by the configurator when none is stored
    pub fn default_base_directory() -> PathBuf {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().join("projects"))
            .unwrap_or_else(|| PathBuf::from("projects"))
    }

    /// Stored token, treating an empty string as unset
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.private);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let settings = Settings {
            token: Some("ghp_0123456789abcdef".to_string()),
            base_directory: Some(PathBuf::from("/home/me/code")),
            private: true,
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_absent_fields_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        Settings::default().save_to(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("token"));
        assert!(!raw.contains("base_directory"));
        assert!(raw.contains("\"private\": false"));
    }

    #[test]
    fn test_partial_file_and_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"token": "abc", "editor": "vim"}"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.token(), Some("abc"));
        assert_eq!(loaded.base_directory, None);
        assert!(!loaded.private);
    }

    #[test]
    fn test_invalid_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "this is not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::LoadFailed(_))));
    }

    #[test]
    fn test_empty_token_is_unset() {
        let settings = Settings {
            token: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(settings.token(), None);
    }
}
