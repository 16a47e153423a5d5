use dioxus::prelude::*;

use crate::motion::{MotionEngine, MotionSupport};

/// Motion support as seen when the component mounted.
pub fn use_motion_support() -> MotionSupport {
    use_hook(MotionEngine::current)
}
