use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;
use crate::motion::viewport::ViewportClass;

const RESIZE_POLL: Duration = Duration::from_millis(250);

/// Current wide/narrow class of the window, re-checked while mounted.
/// Without a browser the class stays `Narrow`.
pub fn use_viewport_class() -> Signal<ViewportClass> {
    let mut class = use_signal(|| {
        compat::viewport()
            .map(|vp| ViewportClass::from_width(vp.width))
            .unwrap_or_default()
    });

    use_future(move || async move {
        loop {
            let Some(vp) = compat::viewport() else {
                return;
            };
            let current = ViewportClass::from_width(vp.width);
            if *class.peek() != current {
                dioxus_logger::tracing::debug!("viewport class changed to {current:?}");
                class.set(current);
            }
            compat::sleep(RESIZE_POLL).await;
        }
    });

    class
}
