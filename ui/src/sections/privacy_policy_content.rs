use dioxus::prelude::*;

use crate::components::primitives::Container;
use crate::content::{Block, Inline, PrivacySection, PRIVACY_SECTIONS};
use crate::hooks::use_viewport_class;
use crate::motion::viewport::pin_style;

#[component]
fn InlineRun(inline: &'static Inline) -> Element {
    match inline {
        Inline::Text(text) => rsx! { {*text} },
        Inline::Strong(text) => rsx! { strong { {*text} } },
        Inline::Link { label, href, external } => {
            if *external {
                rsx! { a { href: *href, target: "_blank", rel: "noopener noreferrer", {*label} } }
            } else {
                rsx! { a { href: *href, {*label} } }
            }
        }
        Inline::Break => rsx! { br {} },
    }
}

#[component]
fn BlockView(block: &'static Block) -> Element {
    match block {
        Block::Paragraph(runs) => rsx! {
            p {
                for (i, inline) in runs.iter().enumerate() {
                    InlineRun { key: "{i}", inline }
                }
            }
        },
        Block::Ordered(items) => rsx! {
            ol {
                for (i, item) in items.iter().enumerate() {
                    li { key: "{i}", {*item} }
                }
            }
        },
        Block::Bullets(items) => rsx! {
            ul {
                for (i, item) in items.iter().enumerate() {
                    li { key: "{i}", {*item} }
                }
            }
        },
    }
}

#[component]
fn PolicySection(section: &'static PrivacySection, heading_style: String) -> Element {
    rsx! {
        div {
            class: "privacy-section two-column",
            div {
                h2 { class: "pinned-heading privacy-heading", style: "{heading_style}", {section.title} }
            }
            div {
                class: "privacy-body",
                for (i, block) in section.body.iter().enumerate() {
                    BlockView { key: "{i}", block }
                }
            }
        }
    }
}

/// The privacy policy text. Headings stick to the top of the window on wide
/// screens while their section scrolls past.
#[component]
pub fn PrivacyPolicyContent() -> Element {
    let viewport_class = use_viewport_class();
    let heading_style = pin_style(viewport_class(), "0");

    rsx! {
        section {
            class: "privacy-policy",
            Container {
                for (i, section) in PRIVACY_SECTIONS.iter().enumerate() {
                    PolicySection { key: "{i}", section, heading_style: heading_style.clone() }
                }
            }
        }
    }
}
