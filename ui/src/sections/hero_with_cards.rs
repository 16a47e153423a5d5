//=============================================================================
// File: src/sections/hero_with_cards.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::floating_grid::FloatingGrid;
use crate::components::pointer_glow::GlowArea;
use crate::components::primitives::CdnImage;
use crate::components::word_reveal::{RevealBlock, RevealWords};
use crate::content::{self, assets};
use crate::hooks::{use_element_id, use_motion_support, use_reveal_on_mount, use_scroll_progress};
use crate::motion::reveal::{Reveal, RevealPhase};
use crate::motion::timeline::{card_fan, CARD_FAN_SCRUB, CARD_FAN_TRIGGER};

const GLOW_RADIUS: f64 = 600.0;
const GLOW_SIZE: f64 = 1500.0;

/// The three cards fan out from a stack and settle into a row as the
/// container scrolls into the middle of the screen.
#[component]
fn CardFan() -> Element {
    let id = use_element_id("card-fan");
    let progress = use_scroll_progress(id.clone(), CARD_FAN_TRIGGER, CARD_FAN_SCRUB);
    let poses = card_fan(progress());

    let cards: Vec<(&'static str, &'static str, String)> = content::HERO_CARDS
        .iter()
        .zip(poses.iter())
        .map(|(card, pose)| (card.icon, card.text, pose.style()))
        .collect();

    rsx! {
        div {
            id: "{id}",
            class: "hero-cards",
            for (i, (icon, text, style)) in cards.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "hero-card",
                    style: "{style}",
                    CdnImage { class: "hero-card-icon", path: icon }
                    p { "{text}" }
                }
            }
        }
    }
}

#[component]
pub fn HeroWithCards() -> Element {
    let support = use_motion_support();
    let mounted = use_reveal_on_mount();
    let phase = RevealPhase::new(support, mounted());

    rsx! {
        section {
            class: "hero",
            GlowArea {
                radius: GLOW_RADIUS,
                size: GLOW_SIZE,
                class: "hero-glow-area",
                FloatingGrid {}
                div {
                    class: "container hero-content",
                    RevealBlock {
                        reveal: Reveal::HERO_FADE,
                        phase,
                        CdnImage { class: "hero-logo", path: assets::LOGO, alt: "Post Labs logo" }
                    }
                    RevealBlock {
                        reveal: Reveal::HERO_FADE,
                        phase,
                        p { class: "hero-intro", {content::INTRO} }
                    }
                    h1 { class: "sr-only", {content::HERO_TITLE} }
                    div {
                        class: "hero-title",
                        "aria-hidden": "true",
                        RevealWords { text: content::HERO_TITLE, reveal: Reveal::HERO_TITLE, phase }
                    }
                    CdnImage { class: "down-arrow", path: assets::DOWN_ARROW }
                    CardFan {}
                }
            }
        }
    }
}
