//! Application settings management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Where the API server listens when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

pub const ENV_API_URL: &str = "MARINA_API_URL";
pub const ENV_RELOAD_DELAY_MS: &str = "MARINA_RELOAD_DELAY_MS";
pub const ENV_READ_ONLY: &str = "MARINA_READ_ONLY";

/// Application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::System => "System",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light, Theme::System]
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the instance API server, without the `/api/instances` path
    pub api_base_url: String,
    /// Delay between a successful mutation and the follow-up reload (ms)
    pub reload_delay_ms: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Show the list without start/stop/delete buttons
    pub read_only: bool,
    /// Application theme
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            reload_delay_ms: 2000,
            request_timeout_secs: 10,
            read_only: false,
            theme: Theme::Dark,
        }
    }
}

impl Settings {
    /// Directory holding `settings.json`
    pub fn get_config_directory() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Marina")
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate settings and fix any invalid values
    pub fn validate(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        self.reload_delay_ms = self.reload_delay_ms.max(100);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
    }

    /// Apply `MARINA_*` environment variables on top of the loaded values
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }

        if let Some(raw) = lookup(ENV_RELOAD_DELAY_MS) {
            match raw.trim().parse() {
                Ok(ms) => self.reload_delay_ms = ms,
                Err(_) => warn!("Ignoring {}={:?}: not a number", ENV_RELOAD_DELAY_MS, raw),
            }
        }

        if let Some(raw) = lookup(ENV_READ_ONLY) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.read_only = true,
                "0" | "false" | "no" | "off" => self.read_only = false,
                _ => warn!("Ignoring {}={:?}: expected true or false", ENV_READ_ONLY, raw),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8080");
        assert_eq!(settings.reload_delay(), Duration::from_secs(2));
        assert!(!settings.read_only);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"api_base_url":"http://192.168.1.10:8080"}"#).unwrap();
        assert_eq!(settings.api_base_url, "http://192.168.1.10:8080");
        assert_eq!(settings.reload_delay_ms, 2000);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn validate_fixes_values() {
        let mut settings = Settings {
            api_base_url: " http://host:8080/ ".into(),
            reload_delay_ms: 0,
            request_timeout_secs: 0,
            ..Default::default()
        };
        settings.validate();
        assert_eq!(settings.api_base_url, "http://host:8080");
        assert_eq!(settings.reload_delay_ms, 100);
        assert_eq!(settings.request_timeout_secs, 1);

        settings.api_base_url = "  ".into();
        settings.validate();
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn env_overrides_apply() {
        let mut settings = Settings::default();
        settings.apply_overrides(env(&[
            (ENV_API_URL, "http://10.0.0.2:9000"),
            (ENV_RELOAD_DELAY_MS, "5000"),
            (ENV_READ_ONLY, "yes"),
        ]));
        assert_eq!(settings.api_base_url, "http://10.0.0.2:9000");
        assert_eq!(settings.reload_delay_ms, 5000);
        assert!(settings.read_only);
    }

    #[test]
    fn bad_env_values_are_ignored() {
        let mut settings = Settings::default();
        settings.apply_overrides(env(&[
            (ENV_RELOAD_DELAY_MS, "soon"),
            (ENV_READ_ONLY, "maybe"),
        ]));
        assert_eq!(settings, Settings::default());
    }
}
