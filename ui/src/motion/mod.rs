//! Scroll and time driven animation model.
//!
//! Everything in here is plain math over scroll offsets, element rectangles
//! and elapsed time, so it can be tested without a browser. The hooks in
//! `crate::hooks` sample the browser and feed these types once per frame.

pub mod easing;
pub mod reveal;
pub mod scroll_trigger;
pub mod scrub;
pub mod smooth_scroll;
pub mod spring;
pub mod timeline;
pub mod viewport;
pub mod visibility;

use std::sync::OnceLock;

use crate::compat;
use crate::config::SiteConfig;

/// Whether animated sections should animate or render their final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum MotionSupport {
    Available,
    Unavailable,
}

#[derive(Debug)]
pub struct MotionEngine {
    support: MotionSupport,
}

static ENGINE: OnceLock<MotionEngine> = OnceLock::new();

impl MotionEngine {
    /// One-time initialization, called by the entry point before launch.
    /// Later calls return the engine built by the first call.
    pub fn init(config: &SiteConfig) -> &'static MotionEngine {
        let mut created = false;
        let engine = ENGINE.get_or_init(|| {
            created = true;
            MotionEngine {
                support: detect_support(config.reduced_motion(), compat::prefers_reduced_motion()),
            }
        });
        if created {
            dioxus_logger::tracing::info!("motion engine initialized: {:?}", engine.support);
        } else {
            dioxus_logger::tracing::debug!("motion engine already initialized");
        }
        engine
    }

    /// Support level of the initialized engine. Before `init` nothing animates.
    pub fn current() -> MotionSupport {
        ENGINE
            .get()
            .map(|engine| engine.support)
            .unwrap_or(MotionSupport::Unavailable)
    }

    pub fn support(&self) -> MotionSupport {
        self.support
    }
}

/// `browser_reduced_motion` is `None` when there is no browser to ask.
fn detect_support(config_reduced_motion: bool, browser_reduced_motion: Option<bool>) -> MotionSupport {
    match (config_reduced_motion, browser_reduced_motion) {
        (false, Some(false)) => MotionSupport::Available,
        _ => MotionSupport::Unavailable,
    }
}

/// Linear interpolation.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = SiteConfig::default();
        let first = MotionEngine::init(&config);
        let second = MotionEngine::init(&config);
        assert!(std::ptr::eq(first, second));
        assert_eq!(MotionEngine::current(), first.support());
    }

    #[test]
    fn support_requires_a_browser_without_reduced_motion() {
        assert_eq!(detect_support(false, Some(false)), MotionSupport::Available);
        assert_eq!(detect_support(false, Some(true)), MotionSupport::Unavailable);
        assert_eq!(detect_support(false, None), MotionSupport::Unavailable);
        assert_eq!(detect_support(true, Some(false)), MotionSupport::Unavailable);
    }

    #[test]
    fn native_builds_render_statically() {
        let config = SiteConfig::default();
        assert!(MotionEngine::init(&config).support().is_unavailable());
    }
}
