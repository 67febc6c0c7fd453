//! Radio Studio App - main application shell
//!
//! Hosts the installed apps in a single window with a header bar and a
//! persisted dark mode toggle. Apps register through the `StudioApp`
//! trait; widget types are still imported at compile time (Makepad
//! constraint).

use makepad_widgets::*;

use crate::preferences::Preferences;
use episode_builder::screen::EpisodeScreenWidgetExt;
use episode_builder::EpisodeBuilderApp;
use radio_widgets::{AppRegistry, StudioApp};

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use radio_widgets::theme::*;

    use episode_builder::screen::design::EpisodeScreen;

    App = {{App}} {
        ui: <Window> {
            window: { title: "Radio Studio", inner_size: vec2(1100, 860) }
            pass: { clear_color: (DARK_BG) }

            body = <View> {
                width: Fill, height: Fill
                flow: Down

                header_bar = <View> {
                    width: Fill, height: 52
                    flow: Right
                    padding: {left: 20, right: 20}
                    align: {y: 0.5}
                    spacing: 10
                    show_bg: true
                    draw_bg: {
                        instance dark_mode: 0.0
                        fn pixel(self) -> vec4 {
                            let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                            sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 0.0);
                            sdf.fill(mix((SLATE_50), (SLATE_800), self.dark_mode));
                            // Bottom border
                            sdf.rect(0., self.rect_size.y - 1.0, self.rect_size.x, 1.0);
                            sdf.fill(mix((DIVIDER), (DIVIDER_DARK), self.dark_mode));
                            return sdf.result;
                        }
                    }

                    brand = <Label> {
                        text: "📻 Radio Studio"
                        draw_text: {
                            instance dark_mode: 0.0
                            text_style: <FONT_BOLD>{ font_size: 16.0 }
                            fn get_color(self) -> vec4 {
                                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                            }
                        }
                    }

                    filler = <View> { width: Fill, height: Fit }

                    theme_toggle = <Button> {
                        width: 36, height: 32
                        text: "🌙"
                        draw_text: {
                            text_style: <FONT_REGULAR>{ font_size: 14.0 }
                        }
                        draw_bg: {
                            instance dark_mode: 0.0
                            instance hover: 0.0
                            fn pixel(self) -> vec4 {
                                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                                let normal = mix((SLATE_50), (SLATE_800), self.dark_mode);
                                let hovered = mix((SLATE_200), (SLATE_700), self.dark_mode);
                                sdf.fill(mix(normal, hovered, self.hover));
                                return sdf.result;
                            }
                        }
                    }
                }

                screen = <EpisodeScreen> {}
            }
        }
    }
}

#[derive(Live)]
pub struct App {
    #[live]
    ui: WidgetRef,
    /// Registry of installed apps (populated on init)
    #[rust]
    app_registry: AppRegistry,
    /// Dark mode state
    #[rust]
    dark_mode: bool,
    /// Whether the initial theme has been applied (on first draw)
    #[rust]
    theme_initialized: bool,
}

impl LiveHook for App {
    fn after_new_from_doc(&mut self, _cx: &mut Cx) {
        self.app_registry.register(EpisodeBuilderApp::info());
        ::log::info!("Registered {} app(s)", self.app_registry.len());

        let prefs = Preferences::load();
        self.dark_mode = prefs.dark_mode;
    }
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        // Core widget libraries first, theme before anything that uses it
        makepad_widgets::live_design(cx);
        radio_widgets::live_design(cx);

        // Apps register via the StudioApp trait
        <EpisodeBuilderApp as StudioApp>::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        self.ui.handle_event(cx, event, &mut Scope::empty());

        // Apply the persisted theme once the widgets exist
        if !self.theme_initialized {
            if let Event::Draw(_) = event {
                self.theme_initialized = true;
                self.apply_dark_mode(cx);
            }
        }

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => &[],
        };

        if self
            .ui
            .button(ids!(body.header_bar.theme_toggle))
            .clicked(actions)
        {
            self.dark_mode = !self.dark_mode;
            Preferences {
                dark_mode: self.dark_mode,
            }
            .save();
            self.apply_dark_mode(cx);
        }
    }
}

impl App {
    fn apply_dark_mode(&mut self, cx: &mut Cx) {
        let dark_mode = if self.dark_mode { 1.0 } else { 0.0 };

        self.ui.view(ids!(body.header_bar)).apply_over(
            cx,
            live! {
                draw_bg: { dark_mode: (dark_mode) }
            },
        );
        self.ui.label(ids!(body.header_bar.brand)).apply_over(
            cx,
            live! {
                draw_text: { dark_mode: (dark_mode) }
            },
        );
        self.ui
            .button(ids!(body.header_bar.theme_toggle))
            .apply_over(
                cx,
                live! {
                    draw_bg: { dark_mode: (dark_mode) }
                },
            );
        self.ui
            .button(ids!(body.header_bar.theme_toggle))
            .set_text(cx, if self.dark_mode { "☀" } else { "🌙" });

        self.ui
            .episode_screen(ids!(body.screen))
            .update_dark_mode(cx, dark_mode);

        self.ui.redraw(cx);
    }
}

app_main!(App);
