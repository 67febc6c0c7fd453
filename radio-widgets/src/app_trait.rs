//! Plugin app interface for the Radio Studio shell.
//!
//! Makepad's `live_design!` macro resolves widget types at compile time, so
//! the shell still imports each app's screen type directly. What this trait
//! standardizes is everything else: metadata for the registry and a single
//! entry point for widget registration.

use makepad_widgets::Cx;

/// Metadata about a registered app
#[derive(Clone, Debug)]
pub struct AppInfo {
    /// Display name shown in UI
    pub name: &'static str,
    /// Unique identifier for the app
    pub id: &'static str,
    /// Description of the app
    pub description: &'static str,
}

/// Trait for apps hosted by the Radio Studio shell
///
/// # Example
/// ```ignore
/// impl StudioApp for EpisodeBuilderApp {
///     fn info() -> AppInfo {
///         AppInfo {
///             name: "Episode Builder",
///             id: "episode-builder",
///             description: "Configure and generate radio episodes",
///         }
///     }
///
///     fn live_design(cx: &mut Cx) {
///         screen::live_design(cx);
///     }
/// }
/// ```
pub trait StudioApp {
    /// Returns metadata about this app
    fn info() -> AppInfo
    where
        Self: Sized;

    /// Register this app's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Registry of installed apps.
///
/// Apps are still linked at compile time; the registry exists for runtime
/// metadata queries (window titles, about panels).
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Register an app in the registry
    pub fn register(&mut self, info: AppInfo) {
        self.apps.push(info);
    }

    /// Get all registered apps
    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    /// Find an app by ID
    pub fn find_by_id(&self, id: &str) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Number of registered apps
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for screens that respond to global state changes.
///
/// The shell calls this when the dark mode setting flips so every visible
/// screen can re-mix its shader colors.
///
/// # Example
/// ```ignore
/// impl StateChangeListener for EpisodeScreenRef {
///     fn on_dark_mode_change(&self, cx: &mut Cx, dark_mode: f64) {
///         if let Some(mut inner) = self.borrow_mut() {
///             inner.view.apply_over(cx, live!{
///                 draw_bg: { dark_mode: (dark_mode) }
///             });
///         }
///     }
/// }
/// ```
pub trait StateChangeListener {
    /// Called when dark mode setting changes
    ///
    /// # Arguments
    /// * `cx` - Makepad context for applying UI updates
    /// * `dark_mode` - Dark mode value (0.0 = light, 1.0 = dark)
    fn on_dark_mode_change(&self, cx: &mut Cx, dark_mode: f64);
}
