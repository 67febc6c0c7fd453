//! Station configuration - where the generation service lives.
//!
//! Read from `<config_dir>/radio-studio/station.json`; the file is created
//! by hand, everything falls back to defaults when it is absent or broken.
//! `RADIO_STATION_ENDPOINT` overrides the endpoint regardless of the file,
//! which is the quickest way to point the studio at another service.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the generate endpoint
pub const ENDPOINT_ENV_VAR: &str = "RADIO_STATION_ENDPOINT";

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_EPISODE_SECS: u32 = 12 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// Generate endpoint URL
    pub endpoint: String,
    /// Timeout for the generate call; rendering a full episode is slow
    pub request_timeout_secs: u64,
    /// Episode length in seconds, the basis for the per-segment time labels
    pub episode_secs: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            episode_secs: DEFAULT_EPISODE_SECS,
        }
    }
}

impl StationConfig {
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("radio-studio");
        path.push("station.json");
        Some(path)
    }

    /// Load from disk, falling back to defaults on any problem, then apply
    /// the environment override.
    pub fn load() -> Self {
        let mut config = Self::load_file();
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.trim().is_empty() {
                ::log::info!("Endpoint overridden by {}: {}", ENDPOINT_ENV_VAR, endpoint);
                config.endpoint = endpoint;
            }
        }
        config
    }

    fn load_file() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => {
                ::log::warn!("Cannot determine config directory, using default station config");
                return Self::default();
            }
        };

        match fs::read_to_string(&config_path) {
            Ok(content) => match serde_json::from_str::<StationConfig>(&content) {
                Ok(config) => {
                    ::log::info!("Loaded station config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    ::log::warn!("Failed to parse station config: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                ::log::warn!("Failed to read station config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StationConfig::default();

        assert_eq!(config.endpoint, "http://localhost:8000/generate");
        assert_eq!(config.episode_secs, 720);
        assert_eq!(config.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: StationConfig =
            serde_json::from_str(r#"{"endpoint": "http://radio.example/generate"}"#).unwrap();

        assert_eq!(config.endpoint, "http://radio.example/generate");
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.episode_secs, 720);
    }
}
