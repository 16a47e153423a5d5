use dioxus::prelude::*;

use crate::components::word_reveal::{InViewBlock, InViewWords};
use crate::content::{self, Audience};
use crate::motion::reveal::Reveal;

const AUDIENCE_WORDS: Reveal = Reveal::SPRING_WORDS.with_delay(0.04);

#[component]
fn AudienceColumn(audience: &'static Audience) -> Element {
    let mailto = format!("mailto:{}", audience.email);

    rsx! {
        div {
            class: "cta-column",
            InViewBlock {
                h3 { class: "cta-heading", {audience.heading} }
            }
            InViewWords { text: audience.text, reveal: AUDIENCE_WORDS, class: "cta-text" }
            InViewBlock {
                a { class: "cta-email", href: "{mailto}", {audience.email} }
            }
        }
    }
}

/// Investor and builder calls to action above the footer.
#[component]
pub fn ContactCta() -> Element {
    rsx! {
        section {
            class: "contact-cta",
            div {
                class: "container cta-grid",
                AudienceColumn { audience: &content::INVESTORS }
                AudienceColumn { audience: &content::BUILDERS }
            }
            div { class: "cta-gradient", "aria-hidden": "true" }
        }
    }
}
