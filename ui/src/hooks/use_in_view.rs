use dioxus::prelude::*;

use crate::compat;
use crate::hooks::use_motion_support;
use crate::motion::scroll_trigger::{InView, InViewLatch};

/// Becomes `true` the first time element `id` satisfies `condition` and stays
/// `true`. Sampling stops once it has fired.
pub fn use_in_view(id: String, condition: InView) -> Signal<bool> {
    let support = use_motion_support();
    let mut seen = use_signal(|| support.is_unavailable());

    use_future(move || {
        let id = id.clone();
        async move {
            if *seen.peek() {
                return;
            }
            let mut latch = InViewLatch::new(condition);
            loop {
                compat::next_frame().await;
                let (Some(viewport), Some(rect)) = (compat::viewport(), compat::element_rect(&id)) else {
                    continue;
                };
                if latch.observe(rect, viewport) {
                    seen.set(true);
                    return;
                }
            }
        }
    });

    seen
}

/// Becomes `true` shortly after mount, once the hidden pose has been painted,
/// so mount-time reveals get a transition to run.
pub fn use_reveal_on_mount() -> Signal<bool> {
    let support = use_motion_support();
    let mut revealed = use_signal(|| support.is_unavailable());

    use_future(move || async move {
        if *revealed.peek() {
            return;
        }
        compat::next_frame().await;
        compat::next_frame().await;
        revealed.set(true);
    });

    revealed
}
