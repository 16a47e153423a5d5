use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A DOM id that is unique for the lifetime of the page.
pub fn next_element_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Stable id for an element the motion hooks need to measure.
pub fn use_element_id(prefix: &'static str) -> String {
    use_hook(|| next_element_id(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let a = next_element_id("hero-cards");
        let b = next_element_id("hero-cards");
        assert_ne!(a, b);
        assert!(a.starts_with("hero-cards-"));
    }
}
