//! Smoothing between raw scroll progress and the progress an animation shows.

/// How an animation follows its trigger's progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scrub {
    /// Exactly tracks scroll.
    Locked,
    /// Catches up to scroll over roughly this many seconds.
    Lag(f64),
}

/// Follows a target with exponential decay. The first sample snaps, so a page
/// opened halfway down does not animate in from zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubSmoother {
    scrub: Scrub,
    value: Option<f64>,
}

/// Time constants per lag second; after `lag` seconds about 98% of a jump
/// has been covered.
const RATE_PER_LAG: f64 = 4.0;
const SNAP_EPSILON: f64 = 1e-4;

impl ScrubSmoother {
    pub fn new(scrub: Scrub) -> Self {
        Self { scrub, value: None }
    }

    pub fn value(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Feeds the latest raw progress and returns the smoothed one.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let next = match (self.scrub, self.value) {
            (_, None) | (Scrub::Locked, _) => target,
            (Scrub::Lag(lag), _) if lag <= 0.0 => target,
            (Scrub::Lag(lag), Some(current)) => {
                let blend = 1.0 - (-dt.max(0.0) * RATE_PER_LAG / lag).exp();
                let next = current + (target - current) * blend;
                if (target - next).abs() < SNAP_EPSILON {
                    target
                } else {
                    next
                }
            }
        };
        self.value = Some(next);
        next
    }

    pub fn is_settled(&self, target: f64) -> bool {
        self.value == Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_snaps() {
        let mut smoother = ScrubSmoother::new(Scrub::Lag(1.2));
        assert_eq!(smoother.step(0.7, 0.016), 0.7);
    }

    #[test]
    fn locked_tracks_exactly() {
        let mut smoother = ScrubSmoother::new(Scrub::Locked);
        smoother.step(0.0, 0.016);
        assert_eq!(smoother.step(0.4, 0.016), 0.4);
    }

    #[test]
    fn lag_approaches_without_overshoot() {
        let mut smoother = ScrubSmoother::new(Scrub::Lag(1.0));
        smoother.step(0.0, 0.016);
        let mut last = 0.0;
        for _ in 0..30 {
            let value = smoother.step(1.0, 1.0 / 60.0);
            assert!(value > last && value <= 1.0);
            last = value;
        }
        assert!(last < 1.0);
        for _ in 0..300 {
            smoother.step(1.0, 1.0 / 60.0);
        }
        assert!(smoother.is_settled(1.0));
    }

    #[test]
    fn most_of_a_jump_is_covered_within_the_lag() {
        let mut smoother = ScrubSmoother::new(Scrub::Lag(1.2));
        smoother.step(0.0, 0.016);
        for _ in 0..72 {
            smoother.step(1.0, 1.0 / 60.0);
        }
        assert!(smoother.value() > 0.95);
    }
}
