//! Segment mixer widget - the draggable airtime bar.
//!
//! Draws one proportional block per segment and routes pointer input into
//! the [`SegmentMix`] state machine: single press starts a drag on the
//! segment under the pointer, moves resize it, double tap toggles its
//! lock. Committed changes emit [`SegmentMixerAction::Changed`] so the
//! screen can refresh its summary.

use crate::segment_mix::{DragSession, SegmentMix};
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use radio_widgets::theme::FONT_SEMIBOLD;
    use radio_widgets::theme::FONT_REGULAR;

    pub SegmentMixer = {{SegmentMixer}} {
        width: Fill, height: 96

        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix(#e2e8f0, #334155, self.dark_mode);
            }
        }

        draw_segment: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(1., 1., self.rect_size.x - 2.0, self.rect_size.y - 2.0, 3.0);
                sdf.fill(self.color);
                return sdf.result;
            }
        }

        draw_name: {
            text_style: <FONT_SEMIBOLD>{ font_size: 10.0 }
            color: #ffffff
        }

        draw_meta: {
            text_style: <FONT_REGULAR>{ font_size: 9.0 }
            color: #ffffffd0
        }
    }
}

/// Actions emitted by the mixer
#[derive(Clone, Debug, DefaultNone)]
pub enum SegmentMixerAction {
    None,
    /// A lock toggled or a drag frame committed
    Changed,
}

#[derive(Live, LiveHook, Widget)]
pub struct SegmentMixer {
    #[redraw]
    #[live]
    draw_bg: DrawColor,
    #[live]
    draw_segment: DrawColor,
    #[live]
    draw_name: DrawText,
    #[live]
    draw_meta: DrawText,
    #[walk]
    walk: Walk,
    #[layout]
    layout: Layout,

    #[rust(SegmentMix::default_episode())]
    mix: SegmentMix,
    #[rust]
    drag: Option<DragSession>,
    #[rust(720u32)]
    episode_secs: u32,
}

impl Widget for SegmentMixer {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let uid = self.widget_uid();
        match event.hits(cx, self.draw_bg.area()) {
            Hit::FingerDown(fd) => {
                let rect = self.draw_bg.area().rect(cx);
                if let Some(name) = self.segment_at(&rect, fd.abs.x) {
                    if fd.tap_count == 2 {
                        // Second tap of a double tap: the press already
                        // opened a drag session, drop it and flip the lock
                        self.drag = None;
                        self.mix.toggle_lock(&name);
                        cx.widget_action(uid, &scope.path, SegmentMixerAction::Changed);
                        self.draw_bg.redraw(cx);
                    } else {
                        self.drag = self.mix.begin_drag(&name, fd.abs.x, rect.size.x);
                    }
                }
            }
            Hit::FingerMove(fm) => {
                if let Some(session) = self.drag.clone() {
                    if self.mix.update_drag(&session, fm.abs.x) {
                        cx.widget_action(uid, &scope.path, SegmentMixerAction::Changed);
                        self.draw_bg.redraw(cx);
                    }
                }
            }
            Hit::FingerUp(_) => {
                self.drag = None;
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, _scope: &mut Scope, walk: Walk) -> DrawStep {
        self.draw_bg.begin(cx, walk, self.layout);
        let rect = cx.turtle().rect();

        let mut x = rect.pos.x;
        for (idx, (name, pct)) in self.mix.entries().to_vec().iter().enumerate() {
            let width = rect.size.x * pct / 100.0;
            let block = Rect {
                pos: dvec2(x, rect.pos.y),
                size: dvec2(width.max(2.0), rect.size.y),
            };

            let locked = self.mix.is_locked(name);
            self.draw_segment.color = Self::block_color(idx, locked);
            self.draw_segment.draw_abs(cx, block);

            let label = if locked {
                format!("{} 🔒", display_name(name))
            } else {
                display_name(name)
            };
            let seconds = SegmentMix::seconds_for(*pct, self.episode_secs);
            let meta = format!("{:.1}% · {}s", pct, seconds);

            let text_pos = block.pos + dvec2(8.0, 12.0);
            self.draw_name.draw_abs(cx, text_pos, &label);
            self.draw_meta.draw_abs(cx, text_pos + dvec2(0.0, 20.0), &meta);

            x += width;
        }

        self.draw_bg.end(cx);
        DrawStep::done()
    }
}

impl SegmentMixer {
    /// Block fill per segment position, dimmed while locked
    fn block_color(idx: usize, locked: bool) -> Vec4 {
        let palette = [
            vec4(0.24, 0.51, 0.96, 1.0), // blue
            vec4(0.06, 0.73, 0.50, 1.0), // green
            vec4(0.96, 0.62, 0.07, 1.0), // amber
            vec4(0.55, 0.36, 0.96, 1.0), // purple
            vec4(0.93, 0.27, 0.51, 1.0), // pink
        ];
        let base = palette[idx % palette.len()];
        if locked {
            vec4(base.x * 0.55, base.y * 0.55, base.z * 0.55, 1.0)
        } else {
            base
        }
    }

    /// Which segment the given absolute x coordinate falls into
    fn segment_at(&self, rect: &Rect, abs_x: f64) -> Option<String> {
        if rect.size.x <= 0.0 {
            return None;
        }
        let pct_at = (abs_x - rect.pos.x) / rect.size.x * 100.0;
        let mut cursor = 0.0;
        for (name, pct) in self.mix.entries() {
            cursor += pct;
            if pct_at < cursor {
                return Some(name.clone());
            }
        }
        // Pointer sits past the last boundary (rounding); treat as the
        // last segment
        self.mix
            .entries()
            .last()
            .map(|(name, _)| name.clone())
    }
}

fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

impl SegmentMixerRef {
    /// Snapshot of the current mix, read at submit time
    pub fn mix(&self) -> SegmentMix {
        self.borrow()
            .map(|inner| inner.mix.clone())
            .unwrap_or_default()
    }

    /// Episode length used for the per-segment time labels
    pub fn set_episode_secs(&self, cx: &mut Cx, secs: u32) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.episode_secs = secs;
            inner.draw_bg.redraw(cx);
        }
    }

    pub fn update_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.draw_bg.apply_over(
                cx,
                live! {
                    dark_mode: (dark_mode)
                },
            );
            inner.draw_bg.redraw(cx);
        }
    }
}
