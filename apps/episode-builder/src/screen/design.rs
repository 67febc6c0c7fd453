//! Episode Builder UI design - Makepad live_design DSL

use super::EpisodeScreen;
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use radio_widgets::theme::*;
    use crate::screen::mixer::SegmentMixer;

    // Local layout constants
    SECTION_SPACING = 14.0
    PANEL_RADIUS = 8.0
    PANEL_PADDING = 18.0

    // Section title inside a card
    SectionTitle = <Label> {
        draw_text: {
            instance dark_mode: 0.0
            text_style: <FONT_SEMIBOLD>{ font_size: 15.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }
    }

    // Field caption above an input
    FieldLabel = <Label> {
        draw_text: {
            instance dark_mode: 0.0
            text_style: <FONT_REGULAR>{ font_size: 13.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }
    }

    // Dimmed helper text
    HintLabel = <Label> {
        draw_text: {
            instance dark_mode: 0.0
            text_style: <FONT_REGULAR>{ font_size: 11.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
            }
        }
    }

    // Card container shared by all sections
    Card = <RoundedView> {
        width: Fill, height: Fit
        padding: (PANEL_PADDING)
        flow: Down
        spacing: 10
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            border_radius: (PANEL_RADIUS)
            fn get_color(self) -> vec4 {
                return mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
            }
        }
    }

    ActionButton = <Button> {
        width: Fit, height: 34
        padding: {left: 14, right: 14}
        draw_text: {
            text_style: <FONT_MEDIUM>{ font_size: 13.0 }
            color: (WHITE)
        }
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                sdf.fill((BLUE_500));
                return sdf.result;
            }
        }
    }

    pub EpisodeScreen = {{EpisodeScreen}} {
        width: Fill, height: Fill
        flow: Down
        padding: 24
        spacing: (SECTION_SPACING)
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((DARK_BG), (DARK_BG_DARK), self.dark_mode);
            }
        }

        // Header
        header = <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 12
            align: {y: 0.5}

            icon_label = <Label> {
                text: "📻"
                draw_text: {
                    text_style: <FONT_BOLD>{ font_size: 26.0 }
                }
            }

            title = <Label> {
                text: "Episode Builder"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: <FONT_BOLD>{ font_size: 24.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            description = <Label> {
                text: "Configure a synthetic episode and send it to the station"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: <FONT_REGULAR>{ font_size: 13.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }
        }

        content_scroll = <ScrollYView> {
            width: Fill, height: Fill
            flow: Down
            spacing: (SECTION_SPACING)

            // Episode configuration form
            form_card = <Card> {
                form_title = <SectionTitle> { text: "Episode Configuration" }

                topics_label = <FieldLabel> { text: "Topics (one per line)" }
                topics_input = <TextInput> {
                    width: Fill, height: 76
                    empty_message: "One topic per line"
                }

                hosts_label = <FieldLabel> { text: "Hosts (Name|Persona per line)" }
                hosts_input = <TextInput> {
                    width: Fill, height: 76
                    empty_message: "One host per line in format: Name|Persona"
                }

                style_label = <FieldLabel> { text: "Station Style" }
                style_input = <TextInput> {
                    width: Fill, height: 36
                    empty_message: "e.g. chill night radio"
                }
            }

            // Segment mixer
            mixer_card = <Card> {
                mixer_title = <SectionTitle> { text: "Segment Mix" }
                mixer_hint = <HintLabel> {
                    text: "Drag a segment to resize it. Double-click a segment to lock or unlock its share."
                }

                mixer = <SegmentMixer> {}

                mix_summary = <HintLabel> { text: "" }
            }

            // Generate controls
            controls_card = <Card> {
                controls_row = <View> {
                    width: Fill, height: Fit
                    flow: Right
                    spacing: 12
                    align: {y: 0.5}

                    generate_button = <ActionButton> {
                        text: "Generate Episode"
                    }

                    status_label = <Label> {
                        text: "Ready"
                        draw_text: {
                            instance dark_mode: 0.0
                            text_style: <FONT_REGULAR>{ font_size: 13.0 }
                            fn get_color(self) -> vec4 {
                                return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                            }
                        }
                    }
                }
            }

            // Generated episode playback and export
            output_card = <Card> {
                output_title = <SectionTitle> { text: "Generated Episode" }

                episode_info = <HintLabel> { text: "No episode yet. Configure the form above and hit Generate." }

                playback_row = <View> {
                    width: Fill, height: Fit
                    flow: Right
                    spacing: 10
                    align: {y: 0.5}

                    play_button = <ActionButton> { text: "▶ Play" }
                    stop_button = <ActionButton> { text: "■ Stop" }
                    open_button = <ActionButton> { text: "Open in Player" }
                    save_button = <ActionButton> { text: "Save Episode…" }
                }
            }

            // Recent episodes
            recent_card = <Card> {
                recent_title = <SectionTitle> { text: "Recent Episodes" }
                recent_list = <HintLabel> { text: "No episodes saved yet" }
            }
        }
    }
}
