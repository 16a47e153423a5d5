//! Damped spring, used for the pointer glow, the nav highlight and
//! spring-eased word reveals.

use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Pointer-following glow behind the hero and the logo header.
    pub const POINTER: SpringConfig = SpringConfig {
        stiffness: 150.0,
        damping: 20.0,
        mass: 0.5,
    };

    /// Word reveals that enter on a spring.
    pub const WORDS: SpringConfig = SpringConfig {
        stiffness: 100.0,
        damping: 12.0,
        mass: 1.0,
    };

    /// Highlight that slides between navigation links.
    pub const NAV_PILL: SpringConfig = SpringConfig {
        stiffness: 500.0,
        damping: 35.0,
        mass: 1.0,
    };
}

const MAX_STEP: f64 = 1.0 / 240.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Advances the spring towards `target` by `dt` seconds.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -self.config.stiffness * (self.value - target) - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        self.value
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.value - target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

/// A spring response from 0 to 1, flattened into a CSS `linear()` easing so
/// transitions can follow it without a per-frame loop.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringCurve {
    pub duration: f64,
    pub easing: String,
}

const CURVE_SAMPLE_RATE: f64 = 60.0;
const CURVE_MAX_DURATION: f64 = 4.0;

impl SpringCurve {
    pub fn from_config(config: SpringConfig) -> Self {
        let mut spring = Spring::new(config, 0.0);
        let dt = 1.0 / CURVE_SAMPLE_RATE;
        let mut points = vec![0.0];
        let mut elapsed = 0.0;
        while elapsed < CURVE_MAX_DURATION {
            spring.step(1.0, dt);
            elapsed += dt;
            points.push(spring.value());
            if spring.is_settled(1.0) {
                break;
            }
        }
        if let Some(last) = points.last_mut() {
            *last = 1.0;
        }

        let stops = points
            .iter()
            .map(|p| format!("{:.4}", p))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            duration: elapsed,
            easing: format!("linear({stops})"),
        }
    }

    /// Curve for [`SpringConfig::WORDS`], computed once.
    pub fn words() -> &'static SpringCurve {
        static CURVE: OnceLock<SpringCurve> = OnceLock::new();
        CURVE.get_or_init(|| SpringCurve::from_config(SpringConfig::WORDS))
    }

    pub fn nav_pill() -> &'static SpringCurve {
        static CURVE: OnceLock<SpringCurve> = OnceLock::new();
        CURVE.get_or_init(|| SpringCurve::from_config(SpringConfig::NAV_PILL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::POINTER, 0.0);
        for _ in 0..240 {
            spring.step(300.0, 1.0 / 60.0);
        }
        assert!(spring.is_settled(300.0));
    }

    #[test]
    fn underdamped_word_spring_overshoots() {
        let mut spring = Spring::new(SpringConfig::WORDS, 0.0);
        let mut peak: f64 = 0.0;
        for _ in 0..120 {
            peak = peak.max(spring.step(1.0, 1.0 / 60.0));
        }
        assert!(peak > 1.0);
    }

    #[test]
    fn step_is_independent_of_frame_slicing() {
        let mut coarse = Spring::new(SpringConfig::POINTER, 0.0);
        let mut fine = coarse;
        coarse.step(10.0, 0.1);
        for _ in 0..10 {
            fine.step(10.0, 0.01);
        }
        assert!((coarse.value() - fine.value()).abs() < 0.05);
    }

    #[test]
    fn word_curve_is_a_css_linear_function() {
        let curve = SpringCurve::words();
        assert!(curve.easing.starts_with("linear(0.0000, "));
        assert!(curve.easing.ends_with("1.0000)"));
        assert!(curve.duration > 0.5 && curve.duration <= CURVE_MAX_DURATION + 0.1);
    }
}
