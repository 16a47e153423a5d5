// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod config;
pub mod consent;
pub mod content;
pub mod forms;
pub mod hooks;
pub mod motion;
mod pages;
pub mod routes;
mod sections;

use app_state::AppState;
use app_state_mut::AppStateMut;
use config::SiteConfig;
use consent::CookiePreferences;
use routes::Route;

const FONT_URL: &str = "https://fonts.googleapis.com/css2?family=Inter+Tight:wght@400;500;600&display=swap";

#[component]
pub fn App() -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(SiteConfig::from_env()));

    let cookie_modal_open = use_signal(|| false);
    let cookie_preferences = use_signal(CookiePreferences::default);
    use_context_provider(|| AppStateMut {
        cookie_modal_open,
        cookie_preferences,
    });

    let smooth_scroll = hooks::use_smooth_scroll();
    use_context_provider(|| smooth_scroll.clone());

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Post Labs" }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "stylesheet", href: FONT_URL }
        document::Stylesheet {
            href: asset!("/assets/main.css"),
        }
        Router::<Route> {}
    }
}
