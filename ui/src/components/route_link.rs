#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::routes::Route;

#[derive(Props, Clone, PartialEq)]
pub struct RouteLinkProps {
    pub to: Route,

    #[props(default)]
    pub class: &'static str,

    /// Runs before navigating.
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,

    pub children: Element,
}

/// An anchor to an internal page. Keeps a real `href` for middle-click and
/// crawlers, navigates client-side on a plain click, and marks itself with
/// `aria-current="page"` when its route is the current one. Modified clicks
/// are left to the browser so ctrl/cmd-click still opens a new tab.
/// Clicks the browser turns into a new tab, window or download.
fn opens_natively(modifiers: Modifiers) -> bool {
    modifiers.intersects(Modifiers::CONTROL | Modifiers::META | Modifiers::SHIFT | Modifiers::ALT)
}

#[component]
pub fn RouteLink(props: RouteLinkProps) -> Element {
    let current = use_route::<Route>();
    let is_current = current.page() == props.to.page();
    let href = props.to.to_string();

    rsx! {
        a {
            href: "{href}",
            class: if is_current { "{props.class} active" } else { "{props.class}" },
            "aria-current": if is_current { Some("page") } else { None },
            onclick: move |evt: MouseEvent| {
                if opens_natively(evt.modifiers()) {
                    return;
                }
                evt.prevent_default();
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
                navigator().push(props.to.clone());
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_clicks_navigate_in_app() {
        assert!(!opens_natively(Modifiers::empty()));
    }

    #[test]
    fn modified_clicks_are_left_to_the_browser() {
        assert!(opens_natively(Modifiers::CONTROL));
        assert!(opens_natively(Modifiers::META));
        assert!(opens_natively(Modifiers::SHIFT));
        assert!(opens_natively(Modifiers::ALT));
        assert!(opens_natively(Modifiers::CONTROL | Modifiers::SHIFT));
    }
}
