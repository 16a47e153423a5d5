use dioxus::prelude::*;

use crate::components::word_reveal::InViewWords;
use crate::content::{self, ContactChannel};
use crate::hooks::use_viewport_class;
use crate::motion::reveal::Reveal;
use crate::motion::viewport::pin_style;

#[component]
fn Channel(channel: &'static ContactChannel) -> Element {
    rsx! {
        li {
            class: "contact-channel",
            p { class: "contact-channel-label", {channel.label} }
            if let Some(email) = channel.email {
                a { href: "mailto:{email}", "{email}" }
            }
            if let Some(note) = channel.note {
                p { class: "contact-channel-note", "{note}" }
            }
        }
    }
}

/// Heading pinned beside the contact introduction on wide screens.
#[component]
pub fn ContactInfo() -> Element {
    let viewport_class = use_viewport_class();
    let heading_style = pin_style(viewport_class(), "20vh");

    rsx! {
        section {
            class: "contact-info",
            div {
                class: "container two-column",
                div {
                    h2 { class: "pinned-heading", style: "{heading_style}", {content::CONTACT_HEADING} }
                }
                div {
                    InViewWords { text: content::CONTACT_TEXT, reveal: Reveal::SPRING_WORDS, class: "contact-text" }
                    ul {
                        class: "contact-channels",
                        for (i, channel) in content::CONTACT_CHANNELS.iter().enumerate() {
                            Channel { key: "{i}", channel }
                        }
                    }
                }
            }
        }
    }
}
