use dioxus::prelude::*;

use super::IN_VIEW_INSET;
use crate::components::floating_grid::FloatingGrid;
use crate::components::primitives::CdnImage;
use crate::components::word_reveal::InViewWords;
use crate::content::{self, Align, Feature};
use crate::motion::reveal::Reveal;

#[component]
fn FeatureBlock(index: usize) -> Element {
    let Some(Feature { text, icon, align }) = content::FEATURES.get(index) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: if *align == Align::Right { "feature right" } else { "feature left" },
            CdnImage { class: "feature-icon", path: *icon }
            InViewWords {
                text: *text,
                reveal: Reveal::EASE_WORDS,
                condition: IN_VIEW_INSET,
                class: "feature-text",
            }
        }
    }
}

#[component]
pub fn FeatureText() -> Element {
    rsx! {
        section {
            class: "features",
            FloatingGrid {}
            div {
                class: "container features-list",
                for index in 0..content::FEATURES.len() {
                    FeatureBlock { key: "{index}", index }
                }
            }
        }
    }
}
