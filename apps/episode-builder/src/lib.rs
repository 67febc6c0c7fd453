//! Episode Builder - configure and generate synthetic radio episodes
//!
//! This app provides:
//! - An episode configuration form (topics, hosts with personas, style)
//! - The draggable, lockable segment-duration mixer
//! - Submission to the remote generation service over HTTP
//! - Playback of the returned episode and save-to-disk

pub mod episode_form;
pub mod generate_client;
pub mod recent_episodes;
pub mod screen;
pub mod segment_mix;
pub mod station;

pub use screen::EpisodeScreen;

// Re-export form types
pub use episode_form::{EpisodeDraft, FormError, Host};

// Re-export generation client types
pub use generate_client::{EpisodeRequest, GenerateClient, GenerateError, GeneratedAudio};

// Re-export mixer state machine
pub use segment_mix::{DragSession, SegmentMix, MAX_SEGMENT_PCT, MIN_SEGMENT_PCT, TOTAL_TOLERANCE};

pub use recent_episodes::{RecentEpisode, RecentEpisodesManager};
pub use station::StationConfig;

use makepad_widgets::Cx;
use radio_widgets::{AppInfo, StudioApp};

/// Episode Builder app descriptor
pub struct EpisodeBuilderApp;

impl StudioApp for EpisodeBuilderApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Episode Builder",
            id: "episode-builder",
            description: "Configure a radio episode and generate it via the station service",
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}

/// Register all Episode Builder widgets with Makepad
pub fn live_design(cx: &mut Cx) {
    EpisodeBuilderApp::live_design(cx);
}
