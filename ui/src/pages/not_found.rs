#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use super::PageSections;
use crate::routes::{Page, Route};

/// Unknown paths show the About page and the address bar is corrected to
/// `/about`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_hook(move || {
        info!("unknown path /{}; showing About", segments.join("/"));
        navigator().replace(Route::About {});
    });

    rsx! {
        PageSections { page: Page::About }
    }
}
