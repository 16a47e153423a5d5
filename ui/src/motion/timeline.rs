//! Scroll-scrubbed timelines for the individual sections. Each function maps
//! a trigger progress in `[0, 1]` onto the values a section renders.

use super::easing::Ease;
use super::lerp;
use super::scroll_trigger::{Anchor, Edge, End, ScrollTrigger};
use super::scrub::Scrub;

/// Local progress of a tween placed at `position` with `duration` on a
/// timeline currently at `time`.
fn tween(time: f64, position: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return if time >= position { 1.0 } else { 0.0 };
    }
    ((time - position) / duration).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Hero card fan

pub const CARD_FAN_TRIGGER: ScrollTrigger = ScrollTrigger::new(
    Anchor::new(Edge::Top, 0.65),
    End::Anchor(Anchor::new(Edge::Center, 0.5)),
);
pub const CARD_FAN_SCRUB: Scrub = Scrub::Lag(1.2);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub x_percent: f64,
    pub rotation: f64,
    pub z_index: u8,
}

impl CardPose {
    pub fn style(&self) -> String {
        format!(
            "transform: translateX({:.3}%) rotate({:.3}deg); z-index: {};",
            self.x_percent, self.rotation, self.z_index
        )
    }
}

/// Outer cards start stacked behind the middle one and fan out to their
/// resting positions. The middle card never moves and stays on top, with
/// the left card above the right one.
pub fn card_fan(progress: f64) -> [CardPose; 3] {
    let u = Ease::Power1Out.apply(progress);
    [
        CardPose {
            x_percent: lerp(80.0, 0.0, u),
            rotation: lerp(8.0, 0.0, u),
            z_index: 2,
        },
        CardPose {
            x_percent: 0.0,
            rotation: 0.0,
            z_index: 3,
        },
        CardPose {
            x_percent: lerp(-80.0, 0.0, u),
            rotation: lerp(-8.0, 0.0, u),
            z_index: 1,
        },
    ]
}

// ---------------------------------------------------------------------------
// Mission statement word scrub

pub const MISSION_TRIGGER: ScrollTrigger = ScrollTrigger::new(
    Anchor::new(Edge::Top, 0.8),
    End::Anchor(Anchor::new(Edge::Bottom, 0.8)),
);
pub const MISSION_SCRUB: Scrub = Scrub::Lag(1.5);

/// A row of tweens sharing duration and ease, each starting `stagger` after
/// the previous, squeezed into one scroll range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggeredScrub {
    pub duration: f64,
    pub stagger: f64,
    pub ease: Ease,
    pub from: f64,
    pub to: f64,
}

impl StaggeredScrub {
    pub const MISSION_WORDS: StaggeredScrub = StaggeredScrub {
        duration: 0.5,
        stagger: 0.05,
        ease: Ease::Power2InOut,
        from: 0.15,
        to: 1.0,
    };

    fn total(&self, count: usize) -> f64 {
        self.duration + self.stagger * count.saturating_sub(1) as f64
    }

    pub fn value(&self, index: usize, count: usize, progress: f64) -> f64 {
        let time = progress.clamp(0.0, 1.0) * self.total(count);
        let local = tween(time, index as f64 * self.stagger, self.duration);
        lerp(self.from, self.to, self.ease.apply(local))
    }

    pub fn values(&self, count: usize, progress: f64) -> Vec<f64> {
        (0..count).map(|i| self.value(i, count, progress)).collect()
    }
}

// ---------------------------------------------------------------------------
// Expanding video panel

pub const EXPANDING_PANEL_TRIGGER: ScrollTrigger = ScrollTrigger::new(
    Anchor::new(Edge::Top, 0.6),
    End::Anchor(Anchor::new(Edge::Top, 0.2)),
);
pub const EXPANDING_PANEL_SCRUB: Scrub = Scrub::Locked;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelFrame {
    pub width_percent: f64,
    pub radius_px: f64,
}

impl PanelFrame {
    pub fn style(&self) -> String {
        format!(
            "width: {:.3}%; border-radius: {:.3}px;",
            self.width_percent, self.radius_px
        )
    }
}

pub fn expanding_panel(progress: f64) -> PanelFrame {
    let p = progress.clamp(0.0, 1.0);
    PanelFrame {
        width_percent: lerp(52.0, 100.0, p),
        radius_px: lerp(38.0, 0.0, p),
    }
}

// ---------------------------------------------------------------------------
// Scrolling video cross-fade

/// Scroll distance over which the story section stays pinned.
pub const STORY_SCROLL_DISTANCE: f64 = 2000.0;
pub const STORY_TRIGGER: ScrollTrigger =
    ScrollTrigger::new(Anchor::new(Edge::Top, 0.0), End::Distance(STORY_SCROLL_DISTANCE));
pub const STORY_SCRUB: Scrub = Scrub::Lag(1.0);

const STORY_TIMELINE_LENGTH: f64 = 2.5;
const STORY_TRANSITIONS: [f64; 2] = [1.0, 2.0];
const STORY_TRANSITION_DURATION: f64 = 0.5;
const DIMMED_LABEL: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotStyle {
    pub label_opacity: f64,
    pub video_opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossfadeFrame {
    pub slots: [SlotStyle; 3],
    /// The slot currently in front. Ties at a transition midpoint go to the
    /// incoming slot.
    pub active: usize,
}

/// Three labels with a video each. Slot 0 starts in front; slot 1 takes over
/// in the first transition and slot 2 in the second.
pub fn crossfade(progress: f64) -> CrossfadeFrame {
    let time = progress.clamp(0.0, 1.0) * STORY_TIMELINE_LENGTH;
    let [a, b] = STORY_TRANSITIONS
        .map(|position| Ease::Power1Out.apply(tween(time, position, STORY_TRANSITION_DURATION)));

    let video = [1.0 - a, a - b, b];
    let label = video.map(|v| lerp(DIMMED_LABEL, 1.0, v));
    let active = if b >= 0.5 {
        2
    } else if a >= 0.5 {
        1
    } else {
        0
    };

    CrossfadeFrame {
        slots: [0, 1, 2].map(|i| SlotStyle {
            label_opacity: label[i],
            video_opacity: video[i],
        }),
        active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_fan_endpoints() {
        let start = card_fan(0.0);
        assert_eq!(start[0].x_percent, 80.0);
        assert_eq!(start[0].rotation, 8.0);
        assert_eq!(start[2].x_percent, -80.0);
        assert_eq!(start[2].rotation, -8.0);

        for pose in card_fan(1.0) {
            assert_eq!(pose.x_percent, 0.0);
            assert_eq!(pose.rotation, 0.0);
        }
    }

    #[test]
    fn middle_card_stays_on_top() {
        for step in 0..=10 {
            let poses = card_fan(step as f64 / 10.0);
            assert_eq!(poses[1].x_percent, 0.0);
            assert!(poses[1].z_index > poses[0].z_index && poses[1].z_index > poses[2].z_index);
        }
    }

    #[test]
    fn left_card_stacks_above_right() {
        let stack: Vec<u8> = card_fan(0.5).iter().map(|pose| pose.z_index).collect();
        assert_eq!(stack, [2, 3, 1]);
    }

    #[test]
    fn mission_words_run_from_dim_to_full() {
        let scrub = StaggeredScrub::MISSION_WORDS;
        let count = 40;
        assert!(scrub.values(count, 0.0).iter().all(|&v| (v - 0.15).abs() < 1e-12));
        assert!(scrub.values(count, 1.0).iter().all(|&v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn earlier_words_lead_later_ones() {
        let scrub = StaggeredScrub::MISSION_WORDS;
        for step in 0..=20 {
            let values = scrub.values(12, step as f64 / 20.0);
            for pair in values.windows(2) {
                assert!(pair[0] >= pair[1]);
            }
        }
    }

    #[test]
    fn expanding_panel_endpoints() {
        assert_eq!(expanding_panel(0.0), PanelFrame { width_percent: 52.0, radius_px: 38.0 });
        assert_eq!(expanding_panel(1.0), PanelFrame { width_percent: 100.0, radius_px: 0.0 });
        assert_eq!(expanding_panel(0.5).width_percent, 76.0);
    }

    #[test]
    fn crossfade_endpoints() {
        let start = crossfade(0.0);
        assert_eq!(start.active, 0);
        assert_eq!(start.slots[0].label_opacity, 1.0);
        assert_eq!(start.slots[1].label_opacity, 0.3);
        assert_eq!(start.slots[0].video_opacity, 1.0);

        let end = crossfade(1.0);
        assert_eq!(end.active, 2);
        assert_eq!(end.slots[2].label_opacity, 1.0);
        assert_eq!(end.slots[0].video_opacity, 0.0);
        assert_eq!(end.slots[1].video_opacity, 0.0);
    }

    #[test]
    fn first_two_fifths_hold_the_first_slot() {
        for step in 0..=40 {
            assert_eq!(crossfade(step as f64 / 100.0), crossfade(0.0));
        }
    }

    #[test]
    fn exactly_one_slot_leads_at_any_progress() {
        for step in 0..=1000 {
            let frame = crossfade(step as f64 / 1000.0);
            let lead = frame.slots[frame.active].video_opacity;
            for (i, slot) in frame.slots.iter().enumerate() {
                assert!(slot.video_opacity <= lead + 1e-12);
                assert!((0.0..=1.0).contains(&slot.label_opacity));
                if i != frame.active {
                    assert!(slot.label_opacity <= frame.slots[frame.active].label_opacity + 1e-12);
                }
            }
            let fully_lit = frame.slots.iter().filter(|s| s.label_opacity >= 1.0 - 1e-12).count();
            assert!(fully_lit <= 1);
        }
    }

    #[test]
    fn video_opacities_sum_to_one() {
        for step in 0..=100 {
            let frame = crossfade(step as f64 / 100.0);
            let sum: f64 = frame.slots.iter().map(|s| s.video_opacity).sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }
}
