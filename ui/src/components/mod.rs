//! Shared components: primitives, navigation, footer, reveals and the page
//! frame. Page sections live in `crate::sections`.
pub mod cookie_consent_modal;
pub mod floating_grid;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod nav_bar;
pub mod pointer_glow;
pub mod primitives;
pub mod route_link;
pub mod scroll_to_top;
pub mod subject_dropdown;
pub mod word_reveal;
