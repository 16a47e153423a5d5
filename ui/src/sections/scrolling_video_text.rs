//=============================================================================
// File: src/sections/scrolling_video_text.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::content::{self, assets};
use crate::hooks::{use_element_id, use_scroll_progress};
use crate::motion::timeline::{crossfade, STORY_SCROLL_DISTANCE, STORY_SCRUB, STORY_TRIGGER};

/// "Built for Scale / Creators / Canada". The section pins for a fixed scroll
/// distance while each label brings its own video to the front.
#[component]
pub fn ScrollingVideoText() -> Element {
    let app_state = use_context::<AppState>();
    let id = use_element_id("story");
    let progress = use_scroll_progress(id.clone(), STORY_TRIGGER, STORY_SCRUB);
    let frame = crossfade(progress());

    let section_style = format!("height: calc(100vh + {STORY_SCROLL_DISTANCE}px);");
    let videos: Vec<(String, String)> = assets::STORY_VIDEOS
        .iter()
        .zip(frame.slots.iter())
        .map(|(src, slot)| (app_state.asset(src), format!("opacity: {:.3};", slot.video_opacity)))
        .collect();
    let labels: Vec<(&'static str, String, bool)> = content::STORY_LABELS
        .iter()
        .zip(frame.slots.iter())
        .enumerate()
        .map(|(i, (label, slot))| (*label, format!("opacity: {:.3};", slot.label_opacity), i == frame.active))
        .collect();

    rsx! {
        section {
            id: "{id}",
            class: "story",
            style: "{section_style}",
            div {
                class: "story-sticky",
                div {
                    class: "story-videos",
                    for (i, (src, style)) in videos.into_iter().enumerate() {
                        video {
                            key: "{i}",
                            class: "cover-video story-video",
                            style: "{style}",
                            src: "{src}",
                            autoplay: true,
                            muted: true,
                            r#loop: true,
                            playsinline: true,
                        }
                    }
                }
                div {
                    class: "container story-text",
                    p { class: "story-lead", {content::STORY_LEAD} }
                    ul {
                        class: "story-labels",
                        for (label, style, active) in labels {
                            li {
                                key: "{label}",
                                class: if active { "story-label active" } else { "story-label" },
                                style: "{style}",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
