//! Recent episodes manager.
//!
//! Remembers the last few episodes the user saved to disk and persists the
//! list so it survives restarts.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Maximum number of episodes to remember
const MAX_RECENT_EPISODES: usize = 5;

/// One saved episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEpisode {
    /// Where the audio file was saved
    pub path: PathBuf,
    /// File name (for display)
    pub name: String,
    /// How many topics the episode covered
    pub topic_count: usize,
    /// How many hosts were on air
    pub host_count: usize,
    /// Unix timestamp of the save
    pub saved_at: u64,
}

impl RecentEpisode {
    pub fn new(path: PathBuf, topic_count: usize, host_count: usize) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("episode")
            .to_string();

        Self {
            path,
            name,
            topic_count,
            host_count,
            saved_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    /// One-line summary for the screen
    pub fn format_display(&self) -> String {
        format!(
            "{} • {} topics • {} hosts",
            self.name, self.topic_count, self.host_count
        )
    }
}

/// Persisted most-recent-first episode list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentEpisodesManager {
    episodes: Vec<RecentEpisode>,
}

impl RecentEpisodesManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn store_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("radio-studio");
        path.push("recent_episodes.json");
        Some(path)
    }

    /// Load from disk, starting fresh on any problem
    pub fn load() -> Self {
        let store_path = match Self::store_path() {
            Some(path) => path,
            None => {
                ::log::warn!("Cannot determine config directory, starting with empty episode list");
                return Self::new();
            }
        };

        match fs::read_to_string(&store_path) {
            Ok(content) => match serde_json::from_str::<RecentEpisodesManager>(&content) {
                Ok(manager) => {
                    ::log::info!("Loaded {} recent episodes", manager.episodes.len());
                    manager
                }
                Err(e) => {
                    ::log::warn!("Failed to parse recent episodes: {}, starting fresh", e);
                    Self::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::new(),
            Err(e) => {
                ::log::warn!("Failed to read recent episodes: {}, starting fresh", e);
                Self::new()
            }
        }
    }

    /// Save to disk, best effort
    pub fn save(&self) {
        let store_path = match Self::store_path() {
            Some(path) => path,
            None => return,
        };

        if let Some(parent) = store_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                ::log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(&store_path, json) {
                    ::log::warn!("Failed to save recent episodes: {}", e);
                }
            }
            Err(e) => {
                ::log::warn!("Failed to serialize recent episodes: {}", e);
            }
        }
    }

    /// Record a saved episode, most recent first, and persist
    pub fn add(&mut self, episode: RecentEpisode) {
        self.episodes.retain(|e| e.path != episode.path);
        self.episodes.insert(0, episode);
        if self.episodes.len() > MAX_RECENT_EPISODES {
            self.episodes.truncate(MAX_RECENT_EPISODES);
        }
        self.save();
    }

    /// All remembered episodes, most recent first
    pub fn get_all(&self) -> &[RecentEpisode] {
        &self.episodes
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}
