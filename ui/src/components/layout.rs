#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::cookie_consent_modal::CookieConsentModal;
use super::footer::Footer;
use super::nav_bar::NavBar;
use super::scroll_to_top::ScrollToTop;
use crate::app_state_mut::AppStateMut;
use crate::hooks::{use_motion_support, SmoothScroll};
use crate::routes::Route;

/// Frame shared by every page: nav bar, main content and footer.
#[component]
pub fn Layout() -> Element {
    let controller = use_context::<SmoothScroll>();
    let app_state_mut = use_context::<AppStateMut>();
    let support = use_motion_support();

    rsx! {
        ScrollToTop { controller }
        div {
            class: "page-shell",
            NavBar {}
            main {
                class: if support.is_available() { "page-main motion" } else { "page-main" },
                Outlet::<Route> {}
            }
            Footer {}
        }
        if (app_state_mut.cookie_modal_open)() {
            CookieConsentModal { is_open: app_state_mut.cookie_modal_open }
        }
    }
}
