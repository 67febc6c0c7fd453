//! Segment mix state machine - proportional airtime allocation.
//!
//! An episode is divided into named segments, each holding a percentage of
//! total airtime. The user resizes one segment by dragging; the change is
//! compensated evenly across the other unlocked segments so the total stays
//! at 100. Locked segments never move.
//!
//! The drag session is an explicit value handed back to the caller by
//! [`SegmentMix::begin_drag`] and passed into every update, not a hidden
//! shared cell. An update either commits whole or leaves the mix untouched:
//! when clamping pushes the tentative total outside the tolerance, the
//! frame is discarded, which can visibly stall dragging near the bounds.
//! That stall is intended behavior, not something to smooth over.

use std::collections::HashSet;

/// Floor for every segment during redistribution
pub const MIN_SEGMENT_PCT: f64 = 5.0;
/// Ceiling for the actively dragged segment
pub const MAX_SEGMENT_PCT: f64 = 70.0;
/// Maximum drift from 100 a committed update may leave behind
pub const TOTAL_TOLERANCE: f64 = 0.1;

/// Transient record of an in-progress drag.
///
/// Captures the pointer origin, the container width used to convert pixels
/// to percentage points, and the dragged segment's width at drag start.
#[derive(Clone, Debug)]
pub struct DragSession {
    segment: String,
    start_x: f64,
    container_width: f64,
    initial_pct: f64,
}

impl DragSession {
    /// Name of the segment being dragged
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

/// Ordered segment percentages plus the lock set
#[derive(Clone, Debug)]
pub struct SegmentMix {
    segments: Vec<(String, f64)>,
    locked: HashSet<String>,
}

impl SegmentMix {
    /// Build a mix from ordered (name, percentage) pairs
    pub fn new(segments: &[(&str, f64)]) -> Self {
        Self {
            segments: segments
                .iter()
                .map(|(name, pct)| (name.to_string(), *pct))
                .collect(),
            locked: HashSet::new(),
        }
    }

    /// The standard episode layout
    pub fn default_episode() -> Self {
        Self::new(&[
            ("cold_open", 10.0),
            ("topic", 50.0),
            ("banter", 15.0),
            ("ad", 10.0),
            ("outro", 15.0),
        ])
    }

    /// Ordered (name, percentage) entries
    pub fn entries(&self) -> &[(String, f64)] {
        &self.segments
    }

    /// Current percentage of a segment
    pub fn percentage(&self, name: &str) -> Option<f64> {
        self.segments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, pct)| *pct)
    }

    /// Sum of all segment percentages
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|(_, pct)| pct).sum()
    }

    pub fn is_locked(&self, name: &str) -> bool {
        self.locked.contains(name)
    }

    /// Flip a segment's lock. Locked segments are exempt from
    /// redistribution and cannot be dragged. Any number may be locked.
    pub fn toggle_lock(&mut self, name: &str) {
        if !self.segments.iter().any(|(n, _)| n == name) {
            return;
        }
        if !self.locked.remove(name) {
            self.locked.insert(name.to_string());
        }
    }

    /// Open a drag session on a segment.
    ///
    /// Returns `None` for a locked or unknown segment and for a degenerate
    /// container width; the caller treats that as a silent no-op.
    pub fn begin_drag(
        &self,
        name: &str,
        pointer_x: f64,
        container_width: f64,
    ) -> Option<DragSession> {
        if self.is_locked(name) || container_width <= 0.0 {
            return None;
        }
        let initial_pct = self.percentage(name)?;
        Some(DragSession {
            segment: name.to_string(),
            start_x: pointer_x,
            container_width,
            initial_pct,
        })
    }

    /// Apply one pointer-move frame of a drag session.
    ///
    /// The dragged segment's proposed width is the session baseline plus
    /// the pointer displacement converted to percentage points, clamped to
    /// [`MIN_SEGMENT_PCT`, `MAX_SEGMENT_PCT`]. The difference against the
    /// segment's current width is split evenly across the other unlocked
    /// segments, each clamped at the floor. The new state commits only if
    /// the resulting total is within [`TOTAL_TOLERANCE`] of 100.
    ///
    /// Returns whether the frame was committed.
    pub fn update_drag(&mut self, session: &DragSession, pointer_x: f64) -> bool {
        if self.is_locked(&session.segment) {
            return false;
        }
        let old_width = match self.percentage(&session.segment) {
            Some(pct) => pct,
            None => return false,
        };

        let delta_pct = (pointer_x - session.start_x) / session.container_width * 100.0;
        let new_width = (session.initial_pct + delta_pct).clamp(MIN_SEGMENT_PCT, MAX_SEGMENT_PCT);
        let difference = new_width - old_width;

        let adjustable: Vec<String> = self
            .segments
            .iter()
            .map(|(name, _)| name.clone())
            .filter(|name| name != &session.segment && !self.locked.contains(name))
            .collect();
        if adjustable.is_empty() {
            return false;
        }

        let adjustment = -difference / adjustable.len() as f64;
        let tentative: Vec<(String, f64)> = self
            .segments
            .iter()
            .map(|(name, pct)| {
                let pct = if name == &session.segment {
                    new_width
                } else if adjustable.contains(name) {
                    (pct + adjustment).max(MIN_SEGMENT_PCT)
                } else {
                    *pct
                };
                (name.clone(), pct)
            })
            .collect();

        let total: f64 = tentative.iter().map(|(_, pct)| pct).sum();
        if (total - 100.0).abs() >= TOTAL_TOLERANCE {
            return false;
        }

        self.segments = tentative;
        true
    }

    /// Display-only conversion of a percentage to whole seconds
    pub fn seconds_for(percentage: f64, total_secs: u32) -> u32 {
        (percentage / 100.0 * total_secs as f64).round() as u32
    }
}

impl Default for SegmentMix {
    fn default() -> Self {
        Self::default_episode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drag `name` horizontally by `pct_points` percentage points in a
    /// 1000px container and report whether the frame committed.
    fn drag_by(mix: &mut SegmentMix, name: &str, pct_points: f64) -> bool {
        let session = match mix.begin_drag(name, 0.0, 1000.0) {
            Some(session) => session,
            None => return false,
        };
        let committed = mix.update_drag(&session, pct_points * 10.0);
        // end of drag: session is simply dropped
        committed
    }

    #[test]
    fn test_even_split_two_segments() {
        let mut mix = SegmentMix::new(&[("a", 50.0), ("b", 50.0)]);

        assert!(drag_by(&mut mix, "a", 10.0));
        assert!((mix.percentage("a").unwrap() - 60.0).abs() < 1e-9);
        assert!((mix.percentage("b").unwrap() - 40.0).abs() < 1e-9);
        assert!((mix.total() - 100.0).abs() < TOTAL_TOLERANCE);
    }

    #[test]
    fn test_total_stays_at_100_across_frames() {
        let mut mix = SegmentMix::default_episode();
        let session = mix.begin_drag("topic", 0.0, 1000.0).unwrap();

        for step in 1..=40 {
            let committed = mix.update_drag(&session, step as f64 * 2.5);
            if committed {
                assert!((mix.total() - 100.0).abs() < TOTAL_TOLERANCE);
            }
            for (_, pct) in mix.entries() {
                assert!(*pct >= MIN_SEGMENT_PCT - 1e-9);
            }
        }
    }

    #[test]
    fn test_dragged_segment_clamped_to_ceiling() {
        let mut mix = SegmentMix::new(&[("a", 50.0), ("b", 50.0)]);
        let session = mix.begin_drag("a", 0.0, 1000.0).unwrap();

        // +40 points requested, ceiling holds it at 70
        mix.update_drag(&session, 400.0);
        assert!((mix.percentage("a").unwrap() - 70.0).abs() < 1e-9);
        assert!((mix.percentage("b").unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_floor_clamp_rejects_frame() {
        // c sits at the floor, so compensating a +10 drag would need c to
        // go below 5; the clamp breaks the total and the frame is dropped
        let mut mix = SegmentMix::new(&[("a", 50.0), ("b", 45.0), ("c", 5.0)]);

        assert!(!drag_by(&mut mix, "a", 10.0));
        assert!((mix.percentage("a").unwrap() - 50.0).abs() < 1e-9);
        assert!((mix.percentage("b").unwrap() - 45.0).abs() < 1e-9);
        assert!((mix.percentage("c").unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_toggle_lock_twice_is_identity() {
        let mut mix = SegmentMix::default_episode();
        let before: Vec<(String, f64)> = mix.entries().to_vec();

        mix.toggle_lock("banter");
        assert!(mix.is_locked("banter"));
        mix.toggle_lock("banter");
        assert!(!mix.is_locked("banter"));
        assert_eq!(mix.entries(), &before[..]);
    }

    #[test]
    fn test_locked_segment_cannot_start_drag() {
        let mut mix = SegmentMix::default_episode();
        mix.toggle_lock("ad");

        assert!(mix.begin_drag("ad", 0.0, 1000.0).is_none());
        assert!((mix.percentage("ad").unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_locked_segment_never_moves_during_others_drag() {
        let mut mix = SegmentMix::default_episode();
        mix.toggle_lock("ad");

        assert!(drag_by(&mut mix, "topic", 6.0));
        assert!((mix.percentage("ad").unwrap() - 10.0).abs() < 1e-9);
        assert!((mix.percentage("topic").unwrap() - 56.0).abs() < 1e-9);
        assert!((mix.total() - 100.0).abs() < TOTAL_TOLERANCE);
    }

    #[test]
    fn test_drag_rejected_when_everything_else_locked() {
        let mut mix = SegmentMix::default_episode();
        for name in ["cold_open", "banter", "ad", "outro"] {
            mix.toggle_lock(name);
        }
        let before: Vec<(String, f64)> = mix.entries().to_vec();

        assert!(!drag_by(&mut mix, "topic", 5.0));
        assert_eq!(mix.entries(), &before[..]);
    }

    #[test]
    fn test_unknown_segment() {
        let mut mix = SegmentMix::default_episode();
        assert!(mix.begin_drag("jingle", 0.0, 1000.0).is_none());
        mix.toggle_lock("jingle");
        assert!(!mix.is_locked("jingle"));
    }

    #[test]
    fn test_zero_width_container() {
        let mix = SegmentMix::default_episode();
        assert!(mix.begin_drag("topic", 0.0, 0.0).is_none());
    }

    #[test]
    fn test_negative_drag_redistributes_up() {
        let mut mix = SegmentMix::new(&[("a", 50.0), ("b", 25.0), ("c", 25.0)]);

        assert!(drag_by(&mut mix, "a", -20.0));
        assert!((mix.percentage("a").unwrap() - 30.0).abs() < 1e-9);
        assert!((mix.percentage("b").unwrap() - 35.0).abs() < 1e-9);
        assert!((mix.percentage("c").unwrap() - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_seconds_for() {
        assert_eq!(SegmentMix::seconds_for(50.0, 720), 360);
        assert_eq!(SegmentMix::seconds_for(15.0, 720), 108);
        assert_eq!(SegmentMix::seconds_for(33.3, 60), 20);
        assert_eq!(SegmentMix::seconds_for(0.0, 720), 0);
    }
}
