use dioxus::prelude::*;

use crate::components::primitives::Container;
use crate::components::word_reveal::RevealWords;
use crate::hooks::{use_motion_support, use_reveal_on_mount};
use crate::motion::reveal::{Reveal, RevealPhase};

#[component]
pub fn LetsTalk() -> Element {
    let support = use_motion_support();
    let mounted = use_reveal_on_mount();
    let phase = RevealPhase::new(support, mounted());

    rsx! {
        section {
            class: "page-title",
            Container {
                h1 {
                    class: "display-title",
                    RevealWords { text: "Let's Talk", reveal: Reveal::TITLE_WORDS, phase }
                }
            }
        }
    }
}
