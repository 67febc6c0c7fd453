//! Episode Builder Screen
//!
//! Split into sub-modules:
//! - `design.rs` - UI layout and styling (live_design! DSL)
//! - `mixer.rs` - the draggable segment mixer widget
//!
//! This module wires the form, the mixer, and the generation flow
//! together. The generate call runs on a worker thread and reports back
//! over a channel drained by a poll timer; a wrapping request id discards
//! outcomes from superseded requests.

pub mod design; // Public for Makepad live_design path resolution
pub mod mixer;

use crate::episode_form::{EpisodeDraft, DEFAULT_HOSTS, DEFAULT_STYLE, DEFAULT_TOPICS};
use crate::generate_client::{EpisodeRequest, GenerateClient, GeneratedAudio};
use crate::recent_episodes::{RecentEpisode, RecentEpisodesManager};
use crate::station::StationConfig;
use crossbeam_channel::{unbounded, Receiver};
use makepad_widgets::*;
use mixer::{SegmentMixerAction, SegmentMixerWidgetExt};
use radio_widgets::audio_player::{AudioClip, AudioPlayer};
use radio_widgets::StateChangeListener;
use std::fs;
use std::thread;

/// Register live design for this module
pub fn live_design(cx: &mut Cx) {
    mixer::live_design(cx);
    design::live_design(cx);
}

#[derive(Debug)]
enum GenerateOutcome {
    Success {
        request_id: u64,
        audio: GeneratedAudio,
    },
    Error {
        request_id: u64,
        message: String,
    },
}

impl GenerateOutcome {
    fn request_id(&self) -> u64 {
        match self {
            GenerateOutcome::Success { request_id, .. } => *request_id,
            GenerateOutcome::Error { request_id, .. } => *request_id,
        }
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct EpisodeScreen {
    #[deref]
    view: View,

    #[rust]
    initialized: bool,
    #[rust]
    station: StationConfig,

    // Generation flow
    #[rust]
    generate_rx: Option<Receiver<GenerateOutcome>>,
    #[rust]
    poll_timer: Timer,
    #[rust]
    request_id: u64,
    #[rust]
    is_generating: bool,

    // Latest result
    #[rust]
    episode: Option<GeneratedAudio>,
    #[rust]
    clip: Option<AudioClip>,
    #[rust]
    last_draft: Option<EpisodeDraft>,

    // Playback
    #[rust]
    audio_player: AudioPlayer,
    #[rust]
    playback_timer: Timer,

    // Recent episodes (boxed to avoid Live derive issues)
    #[rust]
    recent: Option<Box<RecentEpisodesManager>>,
}

impl Widget for EpisodeScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        if !self.initialized {
            self.initialized = true;
            self.init_screen(cx);
        }

        if self.poll_timer.is_event(event).is_some() {
            self.poll_generate(cx);
        }

        if self.playback_timer.is_event(event).is_some() {
            if !self.audio_player.is_playing() {
                cx.stop_timer(self.playback_timer);
                self.set_status(cx, "Ready");
                self.view.redraw(cx);
            }
        }

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => &[],
        };

        for action in actions {
            if let SegmentMixerAction::Changed = action.as_widget_action().cast() {
                self.update_mix_summary(cx);
            }
        }

        if self
            .view
            .button(ids!(content_scroll.controls_card.controls_row.generate_button))
            .clicked(actions)
        {
            self.handle_generate(cx);
        }

        if self
            .view
            .button(ids!(content_scroll.output_card.playback_row.play_button))
            .clicked(actions)
        {
            self.handle_play(cx);
        }

        if self
            .view
            .button(ids!(content_scroll.output_card.playback_row.stop_button))
            .clicked(actions)
        {
            self.handle_stop(cx);
        }

        if self
            .view
            .button(ids!(content_scroll.output_card.playback_row.open_button))
            .clicked(actions)
        {
            self.handle_open_in_player(cx);
        }

        if self
            .view
            .button(ids!(content_scroll.output_card.playback_row.save_button))
            .clicked(actions)
        {
            self.handle_save(cx);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl EpisodeScreen {
    /// One-time setup on the first event: station config, seed form
    /// values, recent list, button states.
    fn init_screen(&mut self, cx: &mut Cx) {
        self.station = StationConfig::load();

        self.view
            .text_input(ids!(content_scroll.form_card.topics_input))
            .set_text(cx, DEFAULT_TOPICS);
        self.view
            .text_input(ids!(content_scroll.form_card.hosts_input))
            .set_text(cx, DEFAULT_HOSTS);
        self.view
            .text_input(ids!(content_scroll.form_card.style_input))
            .set_text(cx, DEFAULT_STYLE);

        self.view
            .segment_mixer(ids!(content_scroll.mixer_card.mixer))
            .set_episode_secs(cx, self.station.episode_secs);
        self.update_mix_summary(cx);

        self.recent = Some(Box::new(RecentEpisodesManager::load()));
        self.update_recent_list(cx);

        self.set_output_enabled(cx, false);
        self.view.redraw(cx);
    }

    fn handle_generate(&mut self, cx: &mut Cx) {
        if self.is_generating {
            return;
        }

        let topics = self
            .view
            .text_input(ids!(content_scroll.form_card.topics_input))
            .text();
        let hosts = self
            .view
            .text_input(ids!(content_scroll.form_card.hosts_input))
            .text();
        let style = self
            .view
            .text_input(ids!(content_scroll.form_card.style_input))
            .text();

        let draft = match EpisodeDraft::from_inputs(&topics, &hosts, &style) {
            Ok(draft) => draft,
            Err(e) => {
                self.set_status(cx, &e.to_string());
                self.view.redraw(cx);
                return;
            }
        };

        let mix = self
            .view
            .segment_mixer(ids!(content_scroll.mixer_card.mixer))
            .mix();
        let request = EpisodeRequest::new(&draft, &mix);
        self.last_draft = Some(draft);

        self.is_generating = true;
        self.episode = None;
        self.clip = None;
        self.audio_player.stop();
        self.set_status(cx, "Generating episode…");
        self.view
            .button(ids!(content_scroll.controls_card.controls_row.generate_button))
            .set_enabled(cx, false);
        self.set_output_enabled(cx, false);

        self.start_generate(cx, request);
        self.view.redraw(cx);
    }

    fn start_generate(&mut self, cx: &mut Cx, request: EpisodeRequest) {
        let (tx, rx) = unbounded();
        self.generate_rx = Some(rx);
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        let endpoint = self.station.endpoint.clone();
        let timeout = self.station.timeout();

        self.poll_timer = cx.start_interval(0.1);

        thread::spawn(move || {
            let outcome = match GenerateClient::new(endpoint, timeout)
                .and_then(|client| client.generate(&request))
            {
                Ok(audio) => GenerateOutcome::Success { request_id, audio },
                Err(e) => GenerateOutcome::Error {
                    request_id,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(outcome);
        });
    }

    fn poll_generate(&mut self, cx: &mut Cx) {
        let rx = match self.generate_rx.as_ref() {
            Some(rx) => rx.clone(),
            None => return,
        };

        while let Ok(outcome) = rx.try_recv() {
            if outcome.request_id() != self.request_id {
                continue;
            }

            cx.stop_timer(self.poll_timer);
            self.is_generating = false;
            self.view
                .button(ids!(content_scroll.controls_card.controls_row.generate_button))
                .set_enabled(cx, true);

            match outcome {
                GenerateOutcome::Success { audio, .. } => {
                    self.clip = match AudioClip::from_wav_bytes(&audio.bytes) {
                        Ok(clip) => Some(clip),
                        Err(e) => {
                            ::log::info!("Episode is not in-app playable ({}), use the system player", e);
                            None
                        }
                    };

                    let info = match &self.clip {
                        Some(clip) => format!(
                            "{} KB · {:.0}s · playable in app",
                            audio.bytes.len() / 1024,
                            clip.duration_secs()
                        ),
                        None => format!(
                            "{} KB · {} · use Open in Player",
                            audio.bytes.len() / 1024,
                            audio.content_type.as_deref().unwrap_or("unknown type")
                        ),
                    };
                    self.view
                        .label(ids!(content_scroll.output_card.episode_info))
                        .set_text(cx, &info);

                    self.episode = Some(audio);
                    self.set_output_enabled(cx, true);
                    self.set_status(cx, "Episode ready");
                }
                GenerateOutcome::Error { message, .. } => {
                    self.set_status(cx, &format!("Generation request failed: {}", message));
                }
            }

            self.view.redraw(cx);
        }
    }

    fn handle_play(&mut self, cx: &mut Cx) {
        let clip = match &self.clip {
            Some(clip) => clip.clone(),
            None => {
                if self.episode.is_some() {
                    self.set_status(cx, "This episode can't play in app, use Open in Player");
                } else {
                    self.set_status(cx, "Generate an episode first");
                }
                self.view.redraw(cx);
                return;
            }
        };

        match self.audio_player.play(&clip) {
            Ok(()) => {
                self.playback_timer = cx.start_interval(0.25);
                self.set_status(cx, "Playing episode…");
            }
            Err(e) => {
                ::log::error!("Playback failed: {}", e);
                self.set_status(cx, &format!("Playback failed: {}", e));
            }
        }
        self.view.redraw(cx);
    }

    fn handle_stop(&mut self, cx: &mut Cx) {
        self.audio_player.stop();
        cx.stop_timer(self.playback_timer);
        self.set_status(cx, "Ready");
        self.view.redraw(cx);
    }

    /// Hand the episode bytes to the system's default audio player
    fn handle_open_in_player(&mut self, cx: &mut Cx) {
        let episode = match &self.episode {
            Some(episode) => episode,
            None => {
                self.set_status(cx, "Generate an episode first");
                self.view.redraw(cx);
                return;
            }
        };

        let path = std::env::temp_dir().join(format!(
            "radio-episode-{}.{}",
            chrono::Local::now().format("%Y%m%d-%H%M%S"),
            episode.suggested_extension()
        ));

        if let Err(e) = fs::write(&path, &episode.bytes) {
            ::log::error!("Failed to write temp episode: {}", e);
            self.set_status(cx, &format!("Failed to write temp file: {}", e));
            self.view.redraw(cx);
            return;
        }

        match open::that(&path) {
            Ok(()) => {
                ::log::info!("Opened {} in system player", path.display());
                self.set_status(cx, "Opened in system player");
            }
            Err(e) => {
                ::log::error!("Failed to open system player: {}", e);
                self.set_status(cx, &format!("Failed to open player: {}", e));
            }
        }
        self.view.redraw(cx);
    }

    fn handle_save(&mut self, cx: &mut Cx) {
        let episode = match &self.episode {
            Some(episode) => episode.clone(),
            None => {
                self.set_status(cx, "Generate an episode first");
                self.view.redraw(cx);
                return;
            }
        };

        let default_name = format!(
            "radio-episode-{}.{}",
            chrono::Local::now().format("%Y%m%d-%H%M%S"),
            episode.suggested_extension()
        );

        let file_handle = rfd::FileDialog::new()
            .add_filter("Audio", &["mp3", "wav", "ogg"])
            .set_file_name(&default_name)
            .set_title("Save Episode")
            .save_file();

        let path = match file_handle {
            Some(path) => path,
            None => {
                ::log::info!("Save dialog cancelled");
                return;
            }
        };

        if let Err(e) = fs::write(&path, &episode.bytes) {
            ::log::error!("Failed to save episode: {}", e);
            self.set_status(cx, &format!("Failed to save: {}", e));
            self.view.redraw(cx);
            return;
        }

        ::log::info!("Saved episode to {}", path.display());
        self.set_status(cx, "Episode saved");

        let (topic_count, host_count) = self
            .last_draft
            .as_ref()
            .map(|draft| (draft.topics.len(), draft.hosts.len()))
            .unwrap_or((0, 0));
        if let Some(ref mut recent) = self.recent {
            recent.add(RecentEpisode::new(path, topic_count, host_count));
        }
        self.update_recent_list(cx);
        self.view.redraw(cx);
    }

    fn update_mix_summary(&mut self, cx: &mut Cx) {
        let mix = self
            .view
            .segment_mixer(ids!(content_scroll.mixer_card.mixer))
            .mix();
        let summary = mix
            .entries()
            .iter()
            .map(|(name, pct)| format!("{} {:.1}%", name.replace('_', " "), pct))
            .collect::<Vec<_>>()
            .join("  ·  ");
        self.view
            .label(ids!(content_scroll.mixer_card.mix_summary))
            .set_text(cx, &summary);
    }

    fn update_recent_list(&mut self, cx: &mut Cx) {
        let text = match &self.recent {
            Some(recent) if !recent.is_empty() => recent
                .get_all()
                .iter()
                .map(|episode| episode.format_display())
                .collect::<Vec<_>>()
                .join("\n"),
            _ => "No episodes saved yet".to_string(),
        };
        self.view
            .label(ids!(content_scroll.recent_card.recent_list))
            .set_text(cx, &text);
    }

    fn set_status(&mut self, cx: &mut Cx, text: &str) {
        self.view
            .label(ids!(content_scroll.controls_card.controls_row.status_label))
            .set_text(cx, text);
    }

    fn set_output_enabled(&mut self, cx: &mut Cx, enabled: bool) {
        self.view
            .button(ids!(content_scroll.output_card.playback_row.play_button))
            .set_enabled(cx, enabled);
        self.view
            .button(ids!(content_scroll.output_card.playback_row.stop_button))
            .set_enabled(cx, enabled);
        self.view
            .button(ids!(content_scroll.output_card.playback_row.open_button))
            .set_enabled(cx, enabled);
        self.view
            .button(ids!(content_scroll.output_card.playback_row.save_button))
            .set_enabled(cx, enabled);
    }
}

impl EpisodeScreenRef {
    pub fn update_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.apply_over(
                cx,
                live! {
                    draw_bg: { dark_mode: (dark_mode) }
                },
            );

            inner.view.label(ids!(header.title)).apply_over(
                cx,
                live! {
                    draw_text: { dark_mode: (dark_mode) }
                },
            );
            inner.view.label(ids!(header.description)).apply_over(
                cx,
                live! {
                    draw_text: { dark_mode: (dark_mode) }
                },
            );

            // Cards
            inner.view.view(ids!(content_scroll.form_card)).apply_over(
                cx,
                live! {
                    draw_bg: { dark_mode: (dark_mode) }
                },
            );
            inner.view.view(ids!(content_scroll.mixer_card)).apply_over(
                cx,
                live! {
                    draw_bg: { dark_mode: (dark_mode) }
                },
            );
            inner
                .view
                .view(ids!(content_scroll.controls_card))
                .apply_over(
                    cx,
                    live! {
                        draw_bg: { dark_mode: (dark_mode) }
                    },
                );
            inner
                .view
                .view(ids!(content_scroll.output_card))
                .apply_over(
                    cx,
                    live! {
                        draw_bg: { dark_mode: (dark_mode) }
                    },
                );
            inner
                .view
                .view(ids!(content_scroll.recent_card))
                .apply_over(
                    cx,
                    live! {
                        draw_bg: { dark_mode: (dark_mode) }
                    },
                );

            // Labels
            inner
                .view
                .label(ids!(content_scroll.form_card.form_title))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.form_card.topics_label))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.form_card.hosts_label))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.form_card.style_label))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.mixer_card.mixer_title))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.mixer_card.mixer_hint))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.mixer_card.mix_summary))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.controls_card.controls_row.status_label))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.output_card.output_title))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.output_card.episode_info))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.recent_card.recent_title))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });
            inner
                .view
                .label(ids!(content_scroll.recent_card.recent_list))
                .apply_over(cx, live! { draw_text: { dark_mode: (dark_mode) } });

            inner
                .view
                .segment_mixer(ids!(content_scroll.mixer_card.mixer))
                .update_dark_mode(cx, dark_mode);

            inner.view.redraw(cx);
        }
    }
}

impl StateChangeListener for EpisodeScreenRef {
    fn on_dark_mode_change(&self, cx: &mut Cx, dark_mode: f64) {
        self.update_dark_mode(cx, dark_mode);
    }
}
