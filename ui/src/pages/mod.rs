// One component per route. Each page is its fixed sequence of sections.

#![allow(non_snake_case)]

pub mod about;
pub mod contact;
pub mod not_found;
pub mod privacy_policy;

pub use about::About;
pub use contact::Contact;
pub use not_found::NotFound;
pub use privacy_policy::PrivacyPolicy;

use dioxus::prelude::*;

use crate::routes::Page;
use crate::sections::SectionView;

/// Renders the sections of `page` in order.
#[component]
pub fn PageSections(page: Page) -> Element {
    rsx! {
        div {
            class: "page",
            for (i, kind) in page.sections().iter().enumerate() {
                SectionView { key: "{i}", kind: *kind }
            }
        }
    }
}
