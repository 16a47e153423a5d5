#![allow(non_snake_case)]

use chrono::Datelike;
use dioxus::prelude::*;

use super::icons::MarqueeArrow;
use super::primitives::CdnImage;
use super::route_link::RouteLink;
use crate::app_state_mut::AppStateMut;
use crate::content::{self, assets};
use crate::forms::{submit_newsletter, FormError, NewsletterSignup};
use crate::routes::Route;

#[component]
fn MarqueeItem() -> Element {
    rsx! {
        div {
            class: "marquee-text",
            {content::MARQUEE_TEXT}
            RouteLink { class: "marquee-contact", to: Route::Contact {}, "Contact Us" }
        }
        div { class: "marquee-arrow", MarqueeArrow {} }
    }
}

const SUBSCRIBED: &str = "Thanks for subscribing.";

/// Validates and submits a newsletter address, returning the confirmation.
fn subscribe(email: &str) -> Result<&'static str, FormError> {
    let signup = NewsletterSignup::parse(email)?;
    submit_newsletter(&signup);
    Ok(SUBSCRIBED)
}

#[component]
fn NewsletterForm() -> Element {
    let mut email = use_signal(String::new);
    let mut message = use_signal(|| None::<String>);

    rsx! {
        div {
            class: "newsletter",
            h3 { "Sign Up for Our Newsletter" }
            form {
                class: "newsletter-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let value = email.peek().clone();
                    match subscribe(&value) {
                        Ok(confirmation) => {
                            email.set(String::new());
                            message.set(Some(confirmation.to_string()));
                        }
                        Err(e) => message.set(Some(e.to_string())),
                    }
                },
                input {
                    r#type: "email",
                    placeholder: "Email Address",
                    "aria-label": "Email Address",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                button { r#type: "submit", "aria-label": "Submit", "→" }
            }
            if let Some(text) = message() {
                p { class: "newsletter-message", role: "status", "{text}" }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let year = chrono::Local::now().year();
    let company = content::COMPANY;
    let designer = content::DESIGNER;

    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "marquee",
                div {
                    class: "marquee-inner",
                    MarqueeItem {}
                    MarqueeItem {}
                }
            }
            div {
                class: "container footer-main",
                div {
                    CdnImage { class: "footer-logo", path: assets::LOGO_WHITE, alt: "Post Labs logo white" }
                }
                div {
                    ul {
                        class: "footer-links",
                        li { RouteLink { class: "footer-link", to: Route::About {}, "About" } }
                        li { RouteLink { class: "footer-link", to: Route::Contact {}, "Contact" } }
                        li { RouteLink { class: "footer-link", to: Route::PrivacyPolicy {}, "Privacy Policy" } }
                        li {
                            a {
                                class: "footer-link",
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    app_state_mut.cookie_modal_open.set(true);
                                },
                                "Cookie Policy"
                            }
                        }
                    }
                    NewsletterForm {}
                }
            }
            div {
                class: "footer-bottom",
                div {
                    class: "container footer-bottom-row",
                    p { "© {year} {company} All rights reserved." }
                    p {
                        "Designed by "
                        a {
                            href: content::DESIGNER_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{designer}"
                        }
                        "."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_is_confirmed() {
        assert_eq!(subscribe(" reader@example.ca "), Ok(SUBSCRIBED));
    }

    #[test]
    fn bad_addresses_report_the_failing_check() {
        assert_eq!(subscribe(""), Err(FormError::MissingEmail));
        assert_eq!(subscribe("nope"), Err(FormError::InvalidEmail));
    }
}
