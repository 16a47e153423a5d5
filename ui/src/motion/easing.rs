//! Easing curves used by scroll-linked tweens and CSS transitions.

/// A named easing curve, usable both in Rust (`apply`) and in CSS (`css`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `1 - (1 - t)^2`, the default for scroll-linked tweens.
    Power1Out,
    /// Cubic in/out.
    Power2InOut,
    /// `min(1, 1.001 - 2^(-10t))`, used by the smooth scroll controller.
    ExpoScroll,
}

impl Ease {
    /// Maps `t` in `[0, 1]` onto the curve. Inputs outside the range are clamped.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::EaseOut => CubicBezier::EASE_OUT.solve(t),
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::ExpoScroll => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
        }
    }

    /// CSS `<easing-function>` for the same curve.
    pub fn css(&self) -> &'static str {
        match self {
            Ease::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Ease::Power1Out => "cubic-bezier(0.5, 1, 0.89, 1)",
            Ease::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Ease::ExpoScroll => "cubic-bezier(0.16, 1, 0.3, 1)",
        }
    }
}

/// Unit cubic bezier from (0,0) to (1,1), solved for y given x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    fn slope(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    }

    pub fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton first, bisection if the slope flattens out.
        let mut s = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, s) - x;
            if err.abs() < 1e-7 {
                return Self::sample(self.y1, self.y2, s);
            }
            let d = Self::slope(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..50 {
            let value = Self::sample(self.x1, self.x2, s);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [
        Ease::EaseOut,
        Ease::Power1Out,
        Ease::Power2InOut,
        Ease::ExpoScroll,
    ];

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 0.01, "{ease:?}");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for ease in ALL {
            let mut last = ease.apply(0.0);
            for i in 1..=200 {
                let value = ease.apply(i as f64 / 200.0);
                assert!(value + 1e-9 >= last, "{ease:?} at {i}");
                last = value;
            }
        }
    }

    #[test]
    fn inputs_are_clamped() {
        assert_eq!(Ease::Power1Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power1Out.apply(7.0), 1.0);
    }

    #[test]
    fn power2_in_out_is_symmetric() {
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-12);
        let a = Ease::Power2InOut.apply(0.2);
        let b = Ease::Power2InOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ease_out_is_ahead_of_linear() {
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!(Ease::EaseOut.apply(t) > t);
        }
    }
}
