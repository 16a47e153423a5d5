use dioxus::prelude::*;

use crate::compat;
use crate::hooks::use_motion_support;
use crate::motion::visibility::NavVisibility;

/// Whether the floating nav bar should show, from page scroll progress.
/// The signal only changes when visibility flips.
pub fn use_nav_visibility() -> Signal<bool> {
    let support = use_motion_support();
    let mut visible = use_signal(|| false);

    use_future(move || async move {
        if support.is_unavailable() {
            return;
        }
        let mut nav = NavVisibility::default();
        loop {
            compat::next_frame().await;
            let Some(viewport) = compat::viewport() else {
                continue;
            };
            if let Some(now_visible) = nav.observe(viewport.page_progress()) {
                visible.set(now_visible);
            }
        }
    });

    visible
}
