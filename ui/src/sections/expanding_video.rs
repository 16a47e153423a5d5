use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::content::assets;
use crate::hooks::{use_element_id, use_scroll_progress};
use crate::motion::timeline::{expanding_panel, EXPANDING_PANEL_SCRUB, EXPANDING_PANEL_TRIGGER};

/// A rounded video panel that widens to full bleed as it scrolls up.
#[component]
pub fn ExpandingVideo() -> Element {
    let app_state = use_context::<AppState>();
    let id = use_element_id("expanding-video");
    let progress = use_scroll_progress(id.clone(), EXPANDING_PANEL_TRIGGER, EXPANDING_PANEL_SCRUB);
    let frame = expanding_panel(progress()).style();

    rsx! {
        section {
            id: "{id}",
            class: "expanding-video",
            div {
                class: "expanding-video-sticky",
                div {
                    class: "expanding-video-frame",
                    style: "{frame}",
                    video {
                        class: "cover-video",
                        src: app_state.asset(assets::EXPANDING_VIDEO),
                        poster: app_state.asset(assets::EXPANDING_VIDEO_POSTER),
                        autoplay: true,
                        muted: true,
                        r#loop: true,
                        playsinline: true,
                    }
                }
            }
        }
    }
}
