//! Small building blocks shared by the sections.

#![allow(non_snake_case)]

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::hooks::use_body_style;

//=============================================================================
// Layout
//=============================================================================

/// Centered content column, 1400px wide at most.
#[component]
pub fn Container(#[props(default)] class: String, children: Element) -> Element {
    rsx! { div { class: "container {class}", {children} } }
}

/// An image served from the asset CDN. A failed load leaves the alt text in
/// place and is logged.
#[component]
pub fn CdnImage(path: &'static str, #[props(default)] alt: &'static str, #[props(default)] class: &'static str) -> Element {
    let app_state = use_context::<AppState>();
    let src = app_state.asset(path);

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| dioxus_logger::tracing::warn!("asset failed to load: {path}"),
        }
    }
}

//=============================================================================
// Buttons
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub enum ButtonKind {
    /// Bordered pill that fills black on hover.
    #[default]
    Outline,
    /// Solid dark pill.
    Solid,
    /// Bare icon button.
    Icon,
}

impl ButtonKind {
    fn class(&self) -> &'static str {
        match self {
            ButtonKind::Outline => "btn btn-outline",
            ButtonKind::Solid => "btn btn-solid",
            ButtonKind::Icon => "btn-icon",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    kind: ButtonKind,
    #[props(default = "button".to_string())]
    button_type: String,
    #[props(optional)]
    aria_label: Option<String>,
}

pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.kind.class(),
            r#type: "{props.button_type}",
            "aria-label": props.aria_label.clone(),
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

//=============================================================================
// Modal
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
    #[props(optional)]
    footer: Option<Element>,
}

/// Dialog over a dimmed backdrop. Closes on backdrop click, the close button
/// or Escape. Page scrolling is locked while it is mounted, and its body
/// scrolls natively (`data-scroll-prevent`).
pub fn Modal(mut props: ModalProps) -> Element {
    use_body_style("overflow", "hidden", true);

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            autofocus: true,
            onclick: move |_| props.is_open.set(false),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    props.is_open.set(false);
                }
            },
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                onclick: |evt| evt.stop_propagation(),
                header {
                    class: "modal-header",
                    h2 { "{props.title}" }
                    Button {
                        kind: ButtonKind::Icon,
                        aria_label: "Close",
                        on_click: move |_| props.is_open.set(false),
                        super::icons::CloseIcon {}
                    }
                }
                div {
                    class: "modal-body",
                    "data-scroll-prevent": "true",
                    {props.children}
                }
                if let Some(actions) = props.footer {
                    footer { class: "modal-footer", {actions} }
                }
            }
        }
    }
}
