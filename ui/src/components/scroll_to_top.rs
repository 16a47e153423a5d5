#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::hooks::SmoothScroll;
use crate::routes::Route;

/// Resets the scroll position whenever the route changes.
#[component]
pub fn ScrollToTop(controller: SmoothScroll) -> Element {
    let route = use_route::<Route>();

    use_effect(use_reactive((&route,), move |(route,)| {
        dioxus_logger::tracing::debug!("navigated to {route}; resetting scroll");
        controller.scroll_to_top();
    }));

    rsx! {}
}
