use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::hooks::use_motion_support;

/// Thin bar above every page. Its id is the page's "top" anchor.
#[component]
pub fn AnnouncementBar() -> Element {
    let app_state = use_context::<AppState>();
    let support = use_motion_support();
    let message = app_state.config.announcement().to_string();

    rsx! {
        section {
            id: "top",
            class: if support.is_available() { "announcement-bar motion" } else { "announcement-bar" },
            role: "region",
            "aria-label": "Announcement",
            div {
                class: "announcement-message",
                p { "{message}" }
            }
        }
    }
}
