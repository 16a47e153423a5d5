pub mod use_body_style;
pub mod use_element_id;
pub mod use_in_view;
pub mod use_motion_support;
pub mod use_nav_visibility;
pub mod use_pointer_spring;
pub mod use_scroll_progress;
pub mod use_smooth_scroll;
pub mod use_viewport_class;

pub use use_body_style::use_body_style;
pub use use_element_id::use_element_id;
pub use use_in_view::{use_in_view, use_reveal_on_mount};
pub use use_motion_support::use_motion_support;
pub use use_nav_visibility::use_nav_visibility;
pub use use_pointer_spring::{use_pointer_spring, PointerSpring};
pub use use_scroll_progress::use_scroll_progress;
pub use use_smooth_scroll::{use_smooth_scroll, SmoothScroll};
pub use use_viewport_class::use_viewport_class;
