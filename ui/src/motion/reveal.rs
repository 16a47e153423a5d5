//! Time-based reveals: word-by-word text, fade-ups and form fields.
//!
//! These run as CSS transitions. A component renders its tokens in the
//! hidden pose, flips them to shown once (on mount or on first entering the
//! viewport), and the browser interpolates with a per-token delay.

use super::easing::Ease;
use super::scroll_trigger::InView;
use super::spring::SpringCurve;
use super::MotionSupport;

/// Splits on single spaces. The tokens joined with `" "` give back the input,
/// and there is always one more token than there are spaces.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Where a reveal currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum RevealPhase {
    /// Motion is unavailable: render the final pose with no transition.
    Static,
    Hidden,
    Shown,
}

impl RevealPhase {
    pub fn new(support: MotionSupport, revealed: bool) -> Self {
        match (support, revealed) {
            (MotionSupport::Unavailable, _) => RevealPhase::Static,
            (MotionSupport::Available, false) => RevealPhase::Hidden,
            (MotionSupport::Available, true) => RevealPhase::Shown,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealCurve {
    Spring,
    Ease { ease: Ease, duration: f64 },
}

/// How a group of tokens enters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    /// Starting downward offset in pixels.
    pub offset_y: f64,
    /// Seconds between consecutive tokens.
    pub stagger: f64,
    /// Seconds before the first token.
    pub delay: f64,
    pub curve: RevealCurve,
}

impl Reveal {
    /// Word reveals on a spring.
    pub const SPRING_WORDS: Reveal = Reveal {
        offset_y: 20.0,
        stagger: 0.03,
        delay: 0.0,
        curve: RevealCurve::Spring,
    };

    /// Word reveals with a fixed half-second ease-out.
    pub const EASE_WORDS: Reveal = Reveal {
        offset_y: 20.0,
        stagger: 0.03,
        delay: 0.0,
        curve: RevealCurve::Ease {
            ease: Ease::EaseOut,
            duration: 0.5,
        },
    };

    /// Hero header blocks (logo and intro) on mount.
    pub const HERO_FADE: Reveal = Reveal {
        offset_y: 16.0,
        stagger: 0.0,
        delay: 0.1,
        curve: RevealCurve::Ease {
            ease: Ease::EaseOut,
            duration: 0.6,
        },
    };

    /// Hero title words on mount.
    pub const HERO_TITLE: Reveal = Reveal {
        offset_y: 24.0,
        stagger: 0.15,
        delay: 0.0,
        curve: RevealCurve::Ease {
            ease: Ease::EaseOut,
            duration: 0.6,
        },
    };

    /// Large page titles.
    pub const TITLE_WORDS: Reveal = Reveal {
        offset_y: 30.0,
        stagger: 0.1,
        delay: 0.0,
        curve: RevealCurve::Ease {
            ease: Ease::EaseOut,
            duration: 0.8,
        },
    };

    /// A single block fading up.
    pub const FADE_UP: Reveal = Reveal {
        offset_y: 20.0,
        stagger: 0.0,
        delay: 0.0,
        curve: RevealCurve::Ease {
            ease: Ease::EaseOut,
            duration: 0.6,
        },
    };

    /// Contact form fields, one after another.
    pub const FORM_FIELDS: Reveal = Reveal {
        offset_y: 30.0,
        stagger: 0.1,
        delay: 0.0,
        curve: RevealCurve::Ease {
            ease: Ease::EaseOut,
            duration: 0.8,
        },
    };

    /// Element-entry condition for scroll-started reveals.
    pub const ENTRY: InView = InView::amount(0.8);

    pub const fn with_delay(self, delay: f64) -> Self {
        Self {
            offset_y: self.offset_y,
            stagger: self.stagger,
            delay,
            curve: self.curve,
        }
    }

    /// Delay before token `index` starts moving.
    pub fn token_delay(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    fn timing(&self) -> (f64, String) {
        match self.curve {
            RevealCurve::Spring => {
                let curve = SpringCurve::words();
                (curve.duration, curve.easing.clone())
            }
            RevealCurve::Ease { ease, duration } => (duration, ease.css().to_string()),
        }
    }

    /// Inline style for token `index`.
    pub fn token_style(&self, phase: RevealPhase, index: usize) -> String {
        match phase {
            RevealPhase::Static => String::new(),
            RevealPhase::Hidden => format!(
                "opacity: 0; transform: translateY({}px);",
                self.offset_y
            ),
            RevealPhase::Shown => {
                let (duration, easing) = self.timing();
                let delay = self.token_delay(index);
                format!(
                    "opacity: 1; transform: translateY(0px); transition: opacity {duration:.3}s {easing} {delay:.3}s, transform {duration:.3}s {easing} {delay:.3}s;"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_round_trips() {
        for text in [
            "",
            "one",
            "Let's talk",
            "double  space",
            " leading and trailing ",
            "Post Labs is rethinking how digital media works for Canadians.",
        ] {
            let tokens = split_words(text);
            assert_eq!(tokens.len(), text.matches(' ').count() + 1);
            assert_eq!(tokens.join(" "), text);
        }
    }

    #[test]
    fn unavailable_motion_is_static() {
        assert_eq!(RevealPhase::new(MotionSupport::Unavailable, false), RevealPhase::Static);
        assert_eq!(RevealPhase::new(MotionSupport::Unavailable, true), RevealPhase::Static);
        assert_eq!(RevealPhase::new(MotionSupport::Available, false), RevealPhase::Hidden);
        assert_eq!(RevealPhase::new(MotionSupport::Available, true), RevealPhase::Shown);
    }

    #[test]
    fn static_tokens_carry_no_inline_style() {
        assert!(Reveal::SPRING_WORDS.token_style(RevealPhase::Static, 3).is_empty());
    }

    #[test]
    fn hidden_tokens_sit_below_and_transparent() {
        let style = Reveal::TITLE_WORDS.token_style(RevealPhase::Hidden, 0);
        assert_eq!(style, "opacity: 0; transform: translateY(30px);");
    }

    #[test]
    fn stagger_runs_left_to_right() {
        let reveal = Reveal::EASE_WORDS.with_delay(0.2);
        assert_eq!(reveal.token_delay(0), 0.2);
        assert!((reveal.token_delay(10) - 0.5).abs() < 1e-12);
        let style = reveal.token_style(RevealPhase::Shown, 10);
        assert!(style.contains("0.500s cubic-bezier(0, 0, 0.58, 1) 0.500s"));
    }

    #[test]
    fn spring_tokens_use_the_spring_curve() {
        let style = Reveal::SPRING_WORDS.token_style(RevealPhase::Shown, 0);
        assert!(style.contains("linear(0.0000"));
        assert!(style.starts_with("opacity: 1;"));
    }
}
