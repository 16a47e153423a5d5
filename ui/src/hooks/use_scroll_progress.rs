use dioxus::prelude::*;
use web_time::Instant;

use crate::compat;
use crate::hooks::use_motion_support;
use crate::motion::scroll_trigger::ScrollTrigger;
use crate::motion::scrub::{Scrub, ScrubSmoother};

/// Progress of the element `id` through `trigger`, smoothed by `scrub` and
/// sampled once per animation frame.
///
/// Without motion support the value is fixed at 1.0 so that sections render
/// their final state. The frame loop ends when the component unmounts.
pub fn use_scroll_progress(id: String, trigger: ScrollTrigger, scrub: Scrub) -> Signal<f64> {
    let support = use_motion_support();
    let mut progress = use_signal(|| if support.is_available() { 0.0 } else { 1.0 });

    use_future(move || {
        let id = id.clone();
        async move {
            if support.is_unavailable() {
                return;
            }
            let mut smoother = ScrubSmoother::new(scrub);
            let mut last = Instant::now();
            loop {
                compat::next_frame().await;
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f64();
                last = now;

                let (Some(viewport), Some(rect)) = (compat::viewport(), compat::element_rect(&id)) else {
                    continue;
                };
                let target = trigger.progress(rect, viewport);
                if smoother.is_settled(target) {
                    continue;
                }
                let value = smoother.step(target, dt);
                if *progress.peek() != value {
                    progress.set(value);
                }
            }
        }
    });

    progress
}
