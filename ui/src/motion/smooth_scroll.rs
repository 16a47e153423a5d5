//! Eased window scrolling driven by wheel input.

use super::easing::Ease;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScrollOptions {
    /// Seconds for one scroll animation.
    pub duration: f64,
    pub ease: Ease,
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            ease: Ease::ExpoScroll,
            wheel_multiplier: 1.0,
        }
    }
}

/// Tracks where the window is and where it is heading. Every wheel event
/// restarts the animation from the current position towards the new target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimator {
    options: SmoothScrollOptions,
    current: f64,
    from: f64,
    target: f64,
    elapsed: f64,
    animating: bool,
}

impl ScrollAnimator {
    pub fn new(options: SmoothScrollOptions, position: f64) -> Self {
        Self {
            options,
            current: position,
            from: position,
            target: position,
            elapsed: 0.0,
            animating: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Adopts the real scroll position while idle, e.g. after keyboard or
    /// scrollbar scrolling.
    pub fn sync(&mut self, position: f64) {
        if !self.animating {
            self.current = position;
            self.from = position;
            self.target = position;
        }
    }

    /// Adds a wheel delta; `limit` is the largest valid scroll offset.
    pub fn wheel(&mut self, delta_y: f64, limit: f64) {
        let target = (self.target + delta_y * self.options.wheel_multiplier).clamp(0.0, limit.max(0.0));
        self.animate_to(target);
    }

    pub fn scroll_to(&mut self, position: f64, immediate: bool) {
        if immediate {
            self.current = position;
            self.from = position;
            self.target = position;
            self.animating = false;
        } else {
            self.animate_to(position);
        }
    }

    fn animate_to(&mut self, target: f64) {
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.animating = self.from != target;
    }

    /// Advances by `dt` seconds and returns the position to scroll to, or
    /// `None` when idle.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        if !self.animating {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let t = if self.options.duration > 0.0 {
            (self.elapsed / self.options.duration).min(1.0)
        } else {
            1.0
        };
        if t >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            self.current = self.from + (self.target - self.from) * self.options.ease.apply(t);
        }
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> ScrollAnimator {
        ScrollAnimator::new(SmoothScrollOptions::default(), 0.0)
    }

    #[test]
    fn idle_animator_does_nothing() {
        assert_eq!(animator().tick(0.016), None);
    }

    #[test]
    fn wheel_reaches_target_after_duration() {
        let mut scroll = animator();
        scroll.wheel(500.0, 4000.0);
        let mut last = 0.0;
        let mut frames = 0;
        while let Some(y) = scroll.tick(1.0 / 60.0) {
            assert!(y >= last && y <= 500.0);
            last = y;
            frames += 1;
        }
        assert_eq!(last, 500.0);
        assert!((70..=74).contains(&frames));
    }

    #[test]
    fn wheel_is_clamped_to_the_page() {
        let mut scroll = animator();
        scroll.wheel(-300.0, 4000.0);
        assert_eq!(scroll.tick(1.0 / 60.0), None);
        scroll.wheel(9000.0, 4000.0);
        assert_eq!(scroll.target(), 4000.0);
    }

    #[test]
    fn consecutive_wheels_accumulate() {
        let mut scroll = animator();
        scroll.wheel(100.0, 4000.0);
        scroll.tick(0.1);
        scroll.wheel(100.0, 4000.0);
        assert_eq!(scroll.target(), 200.0);
    }

    #[test]
    fn immediate_scroll_jumps() {
        let mut scroll = animator();
        scroll.wheel(800.0, 4000.0);
        scroll.tick(0.1);
        scroll.scroll_to(0.0, true);
        assert_eq!(scroll.position(), 0.0);
        assert_eq!(scroll.tick(0.016), None);
    }

    #[test]
    fn sync_only_while_idle() {
        let mut scroll = animator();
        scroll.sync(250.0);
        assert_eq!(scroll.position(), 250.0);
        scroll.wheel(100.0, 4000.0);
        scroll.sync(0.0);
        assert_eq!(scroll.target(), 350.0);
    }
}
