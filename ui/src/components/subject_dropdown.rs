#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::icons::Chevron;
use crate::forms::{Subject, SUBJECT_PLACEHOLDER};

/// Custom select for the contact form subject. Clicking anywhere outside the
/// open list closes it.
#[component]
pub fn SubjectDropdown(selected: Signal<Option<Subject>>, #[props(default)] invalid: bool) -> Element {
    let mut selected = selected;
    let mut is_open = use_signal(|| false);
    let label = selected()
        .map(|subject| subject.to_string())
        .unwrap_or_else(|| SUBJECT_PLACEHOLDER.to_string());

    rsx! {
        div {
            class: "subject-dropdown",
            button {
                id: "subject",
                r#type: "button",
                class: if invalid { "contact-form-field dropdown-button invalid" } else { "contact-form-field dropdown-button" },
                "aria-haspopup": "listbox",
                "aria-expanded": "{is_open}",
                onclick: move |_| is_open.toggle(),
                span { "{label}" }
                Chevron { open: is_open() }
            }
            if is_open() {
                // Backdrop to catch clicks outside the list
                div {
                    class: "dropdown-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                ul {
                    class: "dropdown-menu",
                    role: "listbox",
                    for subject in Subject::all() {
                        li {
                            key: "{subject}",
                            role: "option",
                            "aria-selected": if selected() == Some(subject) { "true" } else { "false" },
                            onclick: move |_| {
                                selected.set(Some(subject));
                                is_open.set(false);
                            },
                            "{subject}"
                        }
                    }
                }
            }
        }
    }
}
