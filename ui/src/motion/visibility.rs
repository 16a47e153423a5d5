//! Show/hide state for the floating navigation bar.

use super::spring::SpringCurve;
use super::MotionSupport;

/// Page progress above which the navigation bar is shown.
pub const NAV_THRESHOLD: f64 = 0.05;

pub fn nav_visible(page_progress: f64) -> bool {
    page_progress > NAV_THRESHOLD
}

/// Remembers the last visibility so that callers only react to changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavVisibility {
    visible: bool,
}

impl NavVisibility {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the new visibility when it differs from the previous one.
    pub fn observe(&mut self, page_progress: f64) -> Option<bool> {
        let visible = nav_visible(page_progress);
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}

/// Inline style for the bar. Without motion support the bar is always shown.
pub fn nav_style(support: MotionSupport, visible: bool) -> &'static str {
    match (support, visible) {
        (MotionSupport::Unavailable, _) => "opacity: 1; transform: translateY(0px);",
        (MotionSupport::Available, true) => {
            "opacity: 1; transform: translateY(0px); transition: transform 0.6s ease-out, opacity 0.6s ease-out;"
        }
        (MotionSupport::Available, false) => {
            "opacity: 0; transform: translateY(20px); pointer-events: none; transition: transform 0.6s ease-out, opacity 0.6s ease-out;"
        }
    }
}

/// Inline style for the white highlight behind the active link. The
/// highlight is one link wide and slides on a spring when the active link
/// changes; with no active link it fades out in place.
pub fn nav_pill_style(support: MotionSupport, active: Option<usize>, count: usize) -> String {
    let width = 100.0 / count.max(1) as f64;
    let (offset, opacity) = match active {
        Some(index) => (index.min(count.saturating_sub(1)) as f64 * 100.0, 1),
        None => (0.0, 0),
    };
    let transition = match support {
        MotionSupport::Unavailable => String::new(),
        MotionSupport::Available => {
            let curve = SpringCurve::nav_pill();
            format!(
                " transition: transform {:.3}s {}, opacity 0.2s ease-out;",
                curve.duration, curve.easing
            )
        }
    };
    format!("width: {width:.3}%; transform: translateX({offset:.0}%); opacity: {opacity};{transition}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!nav_visible(0.0));
        assert!(!nav_visible(0.05));
        assert!(!nav_visible(0.049));
        assert!(nav_visible(0.0501));
        assert!(nav_visible(0.051));
        assert!(nav_visible(1.0));
    }

    #[test]
    fn only_changes_are_reported() {
        let mut nav = NavVisibility::default();
        assert_eq!(nav.observe(0.01), None);
        assert_eq!(nav.observe(0.2), Some(true));
        assert_eq!(nav.observe(0.3), None);
        assert_eq!(nav.observe(0.9), None);
        assert_eq!(nav.observe(0.05), Some(false));
        assert_eq!(nav.observe(0.0), None);
        assert!(!nav.is_visible());
    }

    #[test]
    fn visible_iff_past_threshold() {
        let mut nav = NavVisibility::default();
        for step in 0..=200 {
            let progress = ((step * 37) % 101) as f64 / 100.0;
            nav.observe(progress);
            assert_eq!(nav.is_visible(), progress > NAV_THRESHOLD);
        }
    }

    #[test]
    fn static_bar_is_always_shown() {
        assert!(nav_style(MotionSupport::Unavailable, false).starts_with("opacity: 1"));
        assert!(nav_style(MotionSupport::Available, false).starts_with("opacity: 0"));
    }

    #[test]
    fn highlight_sits_under_the_active_link() {
        let first = nav_pill_style(MotionSupport::Unavailable, Some(0), 2);
        let second = nav_pill_style(MotionSupport::Unavailable, Some(1), 2);
        assert_eq!(first, "width: 50.000%; transform: translateX(0%); opacity: 1;");
        assert_eq!(second, "width: 50.000%; transform: translateX(100%); opacity: 1;");
    }

    #[test]
    fn highlight_moves_on_the_nav_spring() {
        let style = nav_pill_style(MotionSupport::Available, Some(1), 2);
        let curve = SpringCurve::nav_pill();
        assert!(style.contains(&format!("transform {:.3}s {}", curve.duration, curve.easing)));
        assert!(curve.easing.starts_with("linear(0.0000"));
    }

    #[test]
    fn highlight_hides_without_an_active_link() {
        let style = nav_pill_style(MotionSupport::Unavailable, None, 2);
        assert!(style.contains("opacity: 0;"));
        let clamped = nav_pill_style(MotionSupport::Unavailable, Some(5), 2);
        assert!(clamped.contains("translateX(100%)"));
    }
}
