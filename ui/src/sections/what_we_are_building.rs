use dioxus::prelude::*;

use crate::components::primitives::Container;
use super::IN_VIEW_INSET;
use crate::components::word_reveal::RevealWords;
use crate::hooks::{use_element_id, use_in_view, use_motion_support};
use crate::motion::reveal::{split_words, Reveal, RevealPhase};

const FIRST_LINE: &str = "What We're";
const SECOND_LINE: &str = "Building";

#[component]
pub fn WhatWeAreBuilding() -> Element {
    let id = use_element_id("building");
    let support = use_motion_support();
    let seen = use_in_view(id.clone(), IN_VIEW_INSET);
    let phase = RevealPhase::new(support, seen());

    // The second line continues the first line's stagger.
    let offset = split_words(FIRST_LINE).len();
    let second_style = Reveal::TITLE_WORDS.token_style(phase, offset);

    rsx! {
        section {
            class: "what-we-are-building",
            Container {
                h2 {
                    id: "{id}",
                    class: "section-title",
                    RevealWords { text: FIRST_LINE, reveal: Reveal::TITLE_WORDS, phase }
                    br {}
                    span { class: "word", style: "{second_style}", {SECOND_LINE} }
                }
            }
        }
    }
}
