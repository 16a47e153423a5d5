//! Components for time-based reveals of words and blocks.

#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::hooks::{use_element_id, use_in_view, use_motion_support};
use crate::motion::reveal::{split_words, Reveal, RevealPhase};
use crate::motion::scroll_trigger::InView;

/// The words of `text` as individually animated spans. The caller supplies
/// the enclosing element.
#[component]
pub fn RevealWords(text: &'static str, reveal: Reveal, phase: RevealPhase) -> Element {
    rsx! {
        for (i, word) in split_words(text).into_iter().enumerate() {
            span {
                key: "{i}",
                class: "word",
                style: reveal.token_style(phase, i),
                "{word}"
            }
        }
    }
}

/// A paragraph whose words rise in, left to right, the first time it is seen.
#[component]
pub fn InViewWords(
    text: &'static str,
    reveal: Reveal,
    #[props(default = Reveal::ENTRY)] condition: InView,
    #[props(default)] class: &'static str,
) -> Element {
    let id = use_element_id("words");
    let support = use_motion_support();
    let seen = use_in_view(id.clone(), condition);
    let phase = RevealPhase::new(support, seen());

    rsx! {
        p {
            id: "{id}",
            class: "{class}",
            RevealWords { text, reveal, phase }
        }
    }
}

/// One block that moves as a single token.
#[component]
pub fn RevealBlock(
    reveal: Reveal,
    phase: RevealPhase,
    #[props(default)] index: usize,
    #[props(default)] class: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "reveal-block {class}",
            style: reveal.token_style(phase, index),
            {children}
        }
    }
}

/// A block that fades up the first time it is seen.
#[component]
pub fn InViewBlock(
    #[props(default = Reveal::FADE_UP)] reveal: Reveal,
    #[props(default = Reveal::ENTRY)] condition: InView,
    #[props(default)] class: &'static str,
    children: Element,
) -> Element {
    let id = use_element_id("block");
    let support = use_motion_support();
    let seen = use_in_view(id.clone(), condition);
    let phase = RevealPhase::new(support, seen());

    rsx! {
        div {
            id: "{id}",
            class: "reveal-block {class}",
            style: reveal.token_style(phase, 0),
            {children}
        }
    }
}
