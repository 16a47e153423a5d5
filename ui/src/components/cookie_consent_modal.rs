//! Cookie preferences dialog. Choices live in `AppStateMut` for the session
//! and are never written anywhere.

#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::icons::Chevron;
use super::primitives::{Button, ButtonKind, Modal};
use crate::app_state_mut::AppStateMut;
use crate::consent::{ConsentCategory, CookiePreferences};

#[component]
fn CookieOption(category: ConsentCategory, preferences: Signal<CookiePreferences>) -> Element {
    let mut preferences = preferences;
    let mut is_open = use_signal(|| true);
    let enabled = preferences.read().is_enabled(category);
    let title = category.to_string();

    rsx! {
        div {
            class: "cookie-option",
            div {
                class: "cookie-option-row",
                button {
                    class: "cookie-option-toggle",
                    r#type: "button",
                    "aria-expanded": "{is_open}",
                    onclick: move |_| is_open.toggle(),
                    Chevron { open: is_open() }
                    span { "{title}" }
                }
                if category.is_locked() {
                    span { class: "cookie-always-active", "Always Active" }
                } else {
                    label {
                        class: "switch",
                        input {
                            r#type: "checkbox",
                            class: "sr-only",
                            "aria-label": "{title}",
                            checked: enabled,
                            onchange: move |_| {
                                preferences.write().toggle(category);
                            },
                        }
                        span { class: "switch-track" }
                    }
                }
            }
            if is_open() {
                p { class: "cookie-option-description", {category.description()} }
            }
        }
    }
}

#[component]
pub fn CookieConsentModal(is_open: Signal<bool>) -> Element {
    let mut is_open = is_open;
    let app_state_mut = use_context::<AppStateMut>();
    let mut preferences = app_state_mut.cookie_preferences;

    let actions = rsx! {
        div {
            class: "modal-actions",
            Button {
                kind: ButtonKind::Outline,
                on_click: move |_| {
                    preferences.write().accept_all();
                    dioxus_logger::tracing::info!("cookie preferences: accept all");
                    is_open.set(false);
                },
                "Accept All"
            }
            Button {
                kind: ButtonKind::Outline,
                on_click: move |_| {
                    preferences.write().reject_all();
                    dioxus_logger::tracing::info!("cookie preferences: reject all");
                    is_open.set(false);
                },
                "Reject All"
            }
        }
        Button {
            kind: ButtonKind::Solid,
            on_click: move |_| {
                preferences.peek().save();
                is_open.set(false);
            },
            "Save Settings"
        }
    };

    rsx! {
        Modal {
            is_open,
            title: "Cookie preferences",
            footer: actions,
            section {
                h3 { "You control your data" }
                p {
                    "You can control how your data is used on our website. Learn more below about the cookies we use and choose which cookies work for you."
                }
            }
            div {
                class: "cookie-options",
                for category in ConsentCategory::all() {
                    CookieOption { key: "{category}", category, preferences }
                }
            }
            section {
                h3 { "More information" }
                p {
                    "For any queries concerning our policy on cookies and your choices, please contact us."
                }
            }
        }
    }
}
