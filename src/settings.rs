//! User settings stored as settings.json in the app data directory

use crate::constants::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    #[default]
    Low,
    High,
}

impl ContrastMode {
    pub fn toggled(self) -> Self {
        match self {
            ContrastMode::Low => ContrastMode::High,
            ContrastMode::High => ContrastMode::Low,
        }
    }
}

/// Display preferences, re-applied on every launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub contrast: ContrastMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Identity
    pub user_id: Option<String>,

    // Appearance
    pub theme: ThemeMode,
    pub contrast: ContrastMode,

    // Backend
    pub backend_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            user_id: None,
            theme: ThemeMode::Light,
            contrast: ContrastMode::Low,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            theme: self.theme,
            contrast: self.contrast,
        }
    }

    /// Stored identity, ignoring blank values left by hand edits
    pub fn stored_user_id(&self) -> Option<String> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    /// Backend URL for this session; the environment wins over the file
    pub fn effective_backend_url(&self) -> String {
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                info!(url = %url, "Backend URL overridden from environment");
                url.trim().to_string()
            }
            _ => self.backend_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.user_id, None);
        assert_eq!(settings.theme, ThemeMode::Light);
        assert_eq!(settings.contrast, ContrastMode::Low);
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            user_id: Some("alice".into()),
            theme: ThemeMode::Dark,
            contrast: ContrastMode::High,
            ..Settings::default()
        };
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.stored_user_id().as_deref(), Some("alice"));
        assert_eq!(
            loaded.preferences(),
            Preferences { theme: ThemeMode::Dark, contrast: ContrastMode::High }
        );
    }

    #[test]
    fn preferences_persist_as_plain_strings() {
        let dir = tempfile::tempdir().unwrap();
        Settings { theme: ThemeMode::Dark, ..Settings::default() }.save(dir.path());
        let raw = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["contrast"], "low");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"contrast":"high"}"#).unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.contrast, ContrastMode::High);
        assert_eq!(loaded.theme, ThemeMode::Light);
        assert_eq!(loaded.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        assert_eq!(Settings::load(dir.path()).user_id, None);
    }

    #[test]
    fn blank_stored_user_id_counts_as_missing() {
        let settings = Settings { user_id: Some("   ".into()), ..Settings::default() };
        assert_eq!(settings.stored_user_id(), None);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ContrastMode::High.toggled().toggled(), ContrastMode::High);
    }
}
