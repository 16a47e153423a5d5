//! Wide/narrow layout switch for behaviors that only apply on large screens.

/// Width at which pinning turns on.
pub const WIDE_BREAKPOINT: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ViewportClass {
    #[default]
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width >= WIDE_BREAKPOINT {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }
}

/// Inline style for an element that stays pinned `top` below the viewport
/// top while its container scrolls past. Only wide viewports pin.
pub fn pin_style(class: ViewportClass, top: &str) -> String {
    match class {
        ViewportClass::Wide => format!("position: sticky; top: {top};"),
        ViewportClass::Narrow => "position: relative;".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1440.0), ViewportClass::Wide);
    }

    #[test]
    fn only_wide_viewports_pin() {
        assert_eq!(pin_style(ViewportClass::Wide, "20vh"), "position: sticky; top: 20vh;");
        assert!(!pin_style(ViewportClass::Narrow, "20vh").contains("sticky"));
    }
}
