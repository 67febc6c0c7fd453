//! # Radio Widgets
//!
//! Shared building blocks for Radio Studio applications:
//!
//! - [`theme`] - color palette, fonts, and dark mode support
//! - [`app_trait`] - plugin app interface (`StudioApp`, `AppRegistry`)
//! - [`audio_player`] - WAV clip decoding and cpal playback engine
//!
//! Apps register their widgets through [`StudioApp::live_design`] and the
//! shell queries metadata through [`AppRegistry`]. Theme constants are
//! consumed from `live_design!` blocks:
//!
//! ```rust,ignore
//! live_design! {
//!     use radio_widgets::theme::*;
//!
//!     MyPanel = <RoundedView> {
//!         draw_bg: { color: (PANEL_BG) }
//!         label = <Label> {
//!             draw_text: { color: (TEXT_PRIMARY) }
//!         }
//!     }
//! }
//! ```

pub mod app_trait;
pub mod audio_player;
pub mod theme;

pub use app_trait::{AppInfo, AppRegistry, StateChangeListener, StudioApp};
pub use audio_player::{AudioClip, AudioError, AudioPlayer};

use makepad_widgets::Cx;

/// Register all shared widgets with Makepad.
///
/// Call during `LiveRegister::live_register`, before any app registers its
/// own widgets: the theme provides the fonts and color constants everything
/// else refers to.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
}
