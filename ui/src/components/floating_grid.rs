#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Faint vertical column lines drawn behind a section's content.
#[component]
pub fn FloatingGrid(#[props(default = 4)] columns: usize) -> Element {
    rsx! {
        div {
            class: "floating-grid-layer",
            "aria-hidden": "true",
            div {
                class: "floating-grid",
                for i in 0..columns {
                    div {
                        key: "{i}",
                        class: if i == 0 { "floating-grid-col first" } else if i + 1 == columns { "floating-grid-col last" } else { "floating-grid-col" },
                    }
                }
            }
        }
    }
}
