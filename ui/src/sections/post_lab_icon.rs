use dioxus::prelude::*;

use crate::components::floating_grid::FloatingGrid;
use crate::components::pointer_glow::GlowArea;
use crate::components::primitives::CdnImage;
use crate::components::word_reveal::RevealBlock;
use crate::content::{self, assets};
use crate::hooks::{use_motion_support, use_reveal_on_mount};
use crate::motion::reveal::{Reveal, RevealPhase};

/// Logo header shared by the Contact and Privacy Policy pages.
#[component]
pub fn PostLabIcon() -> Element {
    let support = use_motion_support();
    let mounted = use_reveal_on_mount();
    let phase = RevealPhase::new(support, mounted());

    rsx! {
        section {
            class: "post-lab-icon",
            GlowArea {
                radius: 450.0,
                size: 900.0,
                FloatingGrid {}
                div {
                    class: "container post-lab-icon-content",
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
                }
            }
        }
    }
}
