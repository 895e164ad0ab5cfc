//! JSON file storage for settings

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::Settings;

pub const SETTINGS_FILE: &str = "settings.json";

/// Settings persisted as `settings.json` in a config directory
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store in the platform config directory
    pub fn new() -> Self {
        Self::in_directory(Settings::get_config_directory())
    }

    pub fn in_directory(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk; `None` if nothing has been saved yet
    pub fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            debug!("No settings file at {:?}", self.path);
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)
            .context(format!("Failed to read settings from {:?}", self.path))?;
        let mut settings: Settings =
            serde_json::from_str(&json).context("Failed to deserialize settings")?;
        // Validate and fix any invalid values after deserialization
        settings.validate();
        Ok(Some(settings))
    }

    /// Saved settings (or defaults) with environment overrides applied
    pub fn load_effective(&self) -> Result<Settings> {
        let mut settings = self.load()?.unwrap_or_default();
        settings.apply_env_overrides();
        settings.validate();
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create config directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json)
            .context(format!("Failed to write settings to {:?}", self.path))?;
        info!("Settings saved to {:?}", self.path);
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::in_directory(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::in_directory(dir.path().join("nested"));
        let settings = Settings {
            api_base_url: "http://192.168.129.119:8080".into(),
            reload_delay_ms: 5000,
            read_only: true,
            ..Default::default()
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), Some(settings));
    }

    #[test]
    fn loaded_values_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::in_directory(dir.path());
        std::fs::write(
            store.path(),
            r#"{"api_base_url":"http://host:8080/","reload_delay_ms":0}"#,
        )
        .unwrap();

        let settings = store.load().unwrap().unwrap();
        assert_eq!(settings.api_base_url, "http://host:8080");
        assert_eq!(settings.reload_delay_ms, 100);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::in_directory(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_err());
    }
}
