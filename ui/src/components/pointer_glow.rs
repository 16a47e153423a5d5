#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::compat;
use crate::hooks::{use_element_id, use_motion_support, use_pointer_spring};
use crate::motion::spring::SpringConfig;

/// A region with a soft yellow glow that trails the pointer. `radius` is the
/// offset that centers the glow on the pointer; `size` is its diameter.
#[component]
pub fn GlowArea(radius: f64, size: f64, #[props(default)] class: &'static str, children: Element) -> Element {
    let id = use_element_id("glow-area");
    let support = use_motion_support();
    let mut spring = use_pointer_spring(SpringConfig::POINTER);
    let (x, y) = spring.position();
    let glow_style = format!("width: {size}px; height: {size}px; transform: translate({x:.1}px, {y:.1}px);");
    let area_id = id.clone();

    rsx! {
        div {
            id: "{id}",
            class: "glow-area {class}",
            onmousemove: move |evt: MouseEvent| {
                let Some((left, top)) = compat::element_origin(&area_id) else {
                    return;
                };
                let client = evt.client_coordinates();
                spring.aim(client.x - left - radius, client.y - top - radius);
            },
            if support.is_available() {
                div {
                    class: "pointer-glow",
                    "aria-hidden": "true",
                    style: "{glow_style}",
                }
            }
            {children}
        }
    }
}
