//! Radio Studio theme - color palette, fonts, and dark mode support.
//!
//! Every color comes in a light/dark pair; widgets mix between the two with
//! a `dark_mode` instance uniform:
//!
//! ```rust,ignore
//! draw_bg: {
//!     instance dark_mode: 0.0
//!     fn pixel(self) -> vec4 {
//!         return mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
//!     }
//! }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;

    // ------------------------------------------------------------------
    // Fonts
    // ------------------------------------------------------------------

    pub FONT_REGULAR = <THEME_FONT_REGULAR> {}
    pub FONT_MEDIUM = <THEME_FONT_REGULAR> {}
    pub FONT_SEMIBOLD = <THEME_FONT_BOLD> {}
    pub FONT_BOLD = <THEME_FONT_BOLD> {}

    // ------------------------------------------------------------------
    // Base palette (slate scale)
    // ------------------------------------------------------------------

    pub SLATE_50 = #f8fafc
    pub SLATE_100 = #f1f5f9
    pub SLATE_200 = #e2e8f0
    pub SLATE_300 = #cbd5e1
    pub SLATE_500 = #64748b
    pub SLATE_700 = #334155
    pub SLATE_800 = #1e293b
    pub SLATE_900 = #0f172a

    pub GRAY_100 = #f3f4f6
    pub GRAY_700 = #374151

    pub BLUE_500 = #3b82f6
    pub BLUE_600 = #x2563eb
    pub RED_500 = #ef4444
    pub WHITE = #ffffff

    // ------------------------------------------------------------------
    // Semantic colors (light / dark pairs)
    // ------------------------------------------------------------------

    // Window background
    pub DARK_BG = #f8fafc
    pub DARK_BG_DARK = #0f172a

    // Panel / card background
    pub PANEL_BG = #ffffff
    pub PANEL_BG_DARK = #1e293b

    // Text
    pub TEXT_PRIMARY = #0f172a
    pub TEXT_PRIMARY_DARK = #f1f5f9
    pub TEXT_SECONDARY = #64748b
    pub TEXT_SECONDARY_DARK = #94a3b8

    // Lines
    pub BORDER = #e2e8f0
    pub BORDER_DARK = #334155
    pub DIVIDER = #e2e8f0
    pub DIVIDER_DARK = #334155
}
