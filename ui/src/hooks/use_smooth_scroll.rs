use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use web_time::Instant;

use crate::compat::{self, EventListenerGuard};
use crate::hooks::use_motion_support;
use crate::motion::smooth_scroll::{ScrollAnimator, SmoothScrollOptions};

/// Handle to the page's smooth scroll controller. Cloning shares the same
/// controller.
#[derive(Clone)]
pub struct SmoothScroll {
    animator: Rc<RefCell<ScrollAnimator>>,
}

impl PartialEq for SmoothScroll {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.animator, &other.animator)
    }
}

impl SmoothScroll {
    /// Jumps to the top without easing, cancelling any wheel animation.
    pub fn scroll_to_top(&self) {
        self.animator.borrow_mut().scroll_to(0.0, true);
        compat::scroll_window_to(0.0);
    }
}

/// Creates the controller. Call once, at the application root: it takes over
/// wheel input for the whole window until the root unmounts.
pub fn use_smooth_scroll() -> SmoothScroll {
    let support = use_motion_support();
    let handle = use_hook(|| {
        let position = compat::viewport().map(|vp| vp.scroll_y).unwrap_or(0.0);
        SmoothScroll {
            animator: Rc::new(RefCell::new(ScrollAnimator::new(
                SmoothScrollOptions::default(),
                position,
            ))),
        }
    });

    let animator = handle.animator.clone();
    let _listener: Rc<Option<EventListenerGuard>> = use_hook(move || {
        if support.is_unavailable() {
            return Rc::new(None);
        }
        let listener = compat::on_wheel(move |delta_y| {
            let limit = compat::viewport()
                .map(|vp| vp.document_height - vp.height)
                .unwrap_or(0.0);
            animator.borrow_mut().wheel(delta_y, limit);
        });
        if listener.is_some() {
            dioxus_logger::tracing::info!("smooth scroll controller attached");
        }
        Rc::new(listener)
    });

    let animator = handle.animator.clone();
    use_future(move || {
        let animator = animator.clone();
        async move {
            if support.is_unavailable() {
                return;
            }
            let mut last = Instant::now();
            loop {
                compat::next_frame().await;
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f64();
                last = now;

                let mut animator = animator.borrow_mut();
                match animator.tick(dt) {
                    Some(y) => compat::scroll_window_to(y),
                    None => {
                        if let Some(viewport) = compat::viewport() {
                            animator.sync(viewport.scroll_y);
                        }
                    }
                }
            }
        }
    });

    use_drop(|| dioxus_logger::tracing::debug!("smooth scroll controller released"));

    handle
}
