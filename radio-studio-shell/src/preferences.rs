//! Shell preferences - persisted user settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Dark mode enabled
    pub dark_mode: bool,
}

impl Preferences {
    fn prefs_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("radio-studio");
        path.push("preferences.json");
        Some(path)
    }

    /// Load from disk, defaults on any problem
    pub fn load() -> Self {
        let prefs_path = match Self::prefs_path() {
            Some(path) => path,
            None => {
                ::log::warn!("Cannot determine config directory, using default preferences");
                return Self::default();
            }
        };

        match fs::read_to_string(&prefs_path) {
            Ok(content) => match serde_json::from_str::<Preferences>(&content) {
                Ok(prefs) => prefs,
                Err(e) => {
                    ::log::warn!("Failed to parse preferences: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                ::log::warn!("Failed to read preferences: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save to disk, best effort
    pub fn save(&self) {
        let prefs_path = match Self::prefs_path() {
            Some(path) => path,
            None => return,
        };

        if let Some(parent) = prefs_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                ::log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(&prefs_path, json) {
                    ::log::warn!("Failed to save preferences: {}", e);
                }
            }
            Err(e) => {
                ::log::warn!("Failed to serialize preferences: {}", e);
            }
        }
    }
}
