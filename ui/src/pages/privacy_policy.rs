#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::PageSections;
use crate::routes::Page;

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! {
        PageSections { page: Page::PrivacyPolicy }
    }
}
