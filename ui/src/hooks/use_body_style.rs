use dioxus::prelude::*;

use crate::compat::BodyStyleGuard;

/// Holds `property: value` on `<body>` while `active` is true and while the
/// component is mounted. The previous value comes back afterwards.
pub fn use_body_style(property: &'static str, value: &'static str, active: bool) {
    let mut guard = use_signal(|| None::<BodyStyleGuard>);

    use_effect(use_reactive((&active,), move |(active,)| {
        // Drop the old guard first so the original value is what gets saved.
        guard.set(None);
        if active {
            guard.set(BodyStyleGuard::set(property, value));
        }
    }));
}
