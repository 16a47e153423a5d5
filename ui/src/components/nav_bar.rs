//! Floating pill navigation at the bottom of the viewport.

#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::route_link::RouteLink;
use crate::hooks::{use_body_style, use_motion_support, use_nav_visibility};
use crate::motion::visibility::{nav_pill_style, nav_style};
use crate::routes::Route;

/// Space kept free at the bottom of the page for the bar.
const NAV_CLEARANCE: &str = "88px";

#[derive(Clone, PartialEq)]
struct NavLink {
    label: &'static str,
    to: Route,
}

fn nav_links() -> [NavLink; 2] {
    [
        NavLink {
            label: "About",
            to: Route::About {},
        },
        NavLink {
            label: "Contact",
            to: Route::Contact {},
        },
    ]
}

/// Shown once the page has been scrolled past 5% and hidden again above it.
/// A white highlight slides under the link of the current page.
#[component]
pub fn NavBar() -> Element {
    let support = use_motion_support();
    let visible = use_nav_visibility();
    use_body_style("padding-bottom", NAV_CLEARANCE, true);
    let current = use_route::<Route>();
    let links = nav_links();
    let active = links.iter().position(|link| link.to.page() == current.page());
    let highlight = nav_pill_style(support, active, links.len());

    rsx! {
        nav {
            class: "nav-bar",
            role: "navigation",
            "aria-label": "Primary",
            style: nav_style(support, visible()),
            div {
                class: "nav-pill",
                ul {
                    li {
                        class: "nav-pill-highlight",
                        "aria-hidden": "true",
                        style: "{highlight}",
                    }
                    for link in links {
                        li {
                            key: "{link.label}",
                            RouteLink {
                                class: "nav-link",
                                to: link.to,
                                span { class: "nav-link-label", "{link.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
