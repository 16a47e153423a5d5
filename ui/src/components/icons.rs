#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn MarqueeArrow() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "100%",
            height: "100%",
            "viewBox": "0 0 57 57",
            fill: "none",
            path {
                d: "M5.09082 0.823242L50.0605 45.7861L49.667 2.61621L49.665 2.36133L49.9199 2.36426L55.5625 2.42969L55.8076 2.43262L55.8096 2.67773L56.25 55.998L56.252 56.252L55.998 56.25C49.1732 56.1848 39.2577 56.1118 29.3418 56.0303L29.0938 56.0273V56.0107C19.2533 55.93 9.4295 55.8577 2.66113 55.793L2.41699 55.791L2.41309 55.5479L2.32422 49.9463L2.31934 49.6895L2.57617 49.6924C8.9767 49.7576 16.4211 49.815 24.0859 49.8721L34.5908 49.9512L44.9131 50.043L45.791 50.0527L0.823242 5.08984L0.646484 4.91309L0.823242 4.73633L4.7373 0.823242L4.91406 0.646484L5.09082 0.823242Z",
                fill: "white",
                stroke: "white",
                "stroke-width": "0.5",
            }
        }
    }
}

/// Down chevron; rotates half a turn when `open`.
#[component]
pub fn Chevron(open: bool) -> Element {
    rsx! {
        svg {
            class: if open { "chevron open" } else { "chevron" },
            "viewBox": "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            polyline { points: "6 9 12 15 18 9" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "30",
            height: "31",
            "viewBox": "0 0 30 31",
            fill: "none",
            path {
                "fill-rule": "evenodd",
                "clip-rule": "evenodd",
                d: "M19 12.2655L11.6557 19.6098L11 18.9541L18.3443 11.6098L19 12.2655Z",
                fill: "currentColor",
            }
            path {
                "fill-rule": "evenodd",
                "clip-rule": "evenodd",
                d: "M18.3444 19.6099L11.0001 12.2656L11.6558 11.6099L19.0001 18.9542L18.3444 19.6099Z",
                fill: "currentColor",
            }
        }
    }
}
