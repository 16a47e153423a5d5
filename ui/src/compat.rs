//! Browser access for the motion hooks, with a native fallback.
//!
//! The native side has no window: every query returns `None`, which makes the
//! animated sections render their final state.

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Pause between samples when there is no animation frame to wait for.
pub const FRAME: std::time::Duration = std::time::Duration::from_millis(16);

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AddEventListenerOptions, CssStyleDeclaration, EventTarget, WheelEvent};

    use crate::motion::scroll_trigger::{Rect, Viewport};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Resolves on the next animation frame.
    pub async fn next_frame() {
        let Some(window) = web_sys::window() else {
            sleep(super::FRAME).await;
            return;
        };
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if window.request_animation_frame(&resolve).is_err() {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        let _ = JsFuture::from(promise).await;
    }

    pub fn viewport() -> Option<Viewport> {
        let window = web_sys::window()?;
        let document_height = window.document()?.document_element()?.scroll_height() as f64;
        Some(Viewport {
            scroll_y: window.scroll_y().ok()?,
            width: window.inner_width().ok()?.as_f64()?,
            height: window.inner_height().ok()?.as_f64()?,
            document_height,
        })
    }

    fn element(id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    pub fn element_rect(id: &str) -> Option<Rect> {
        let rect = element(id)?.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            height: rect.height(),
        })
    }

    /// Top-left corner of the element in client coordinates.
    pub fn element_origin(id: &str) -> Option<(f64, f64)> {
        let rect = element(id)?.get_bounding_client_rect();
        Some((rect.left(), rect.top()))
    }

    pub fn scroll_window_to(y: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, y);
        }
    }

    pub fn prefers_reduced_motion() -> Option<bool> {
        let query = web_sys::window()?
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()??;
        Some(query.matches())
    }

    fn body_style() -> Option<CssStyleDeclaration> {
        Some(web_sys::window()?.document()?.body()?.style())
    }

    /// Sets one inline style property on `<body>` and restores the previous
    /// value when dropped.
    pub struct BodyStyleGuard {
        property: &'static str,
        previous: String,
    }

    impl BodyStyleGuard {
        pub fn set(property: &'static str, value: &str) -> Option<Self> {
            let style = body_style()?;
            let previous = style.get_property_value(property).unwrap_or_default();
            style.set_property(property, value).ok()?;
            Some(Self { property, previous })
        }
    }

    impl Drop for BodyStyleGuard {
        fn drop(&mut self) {
            let Some(style) = body_style() else {
                return;
            };
            if self.previous.is_empty() {
                let _ = style.remove_property(self.property);
            } else {
                let _ = style.set_property(self.property, &self.previous);
            }
        }
    }

    /// Removes its listener when dropped.
    pub struct EventListenerGuard {
        target: EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl Drop for EventListenerGuard {
        fn drop(&mut self) {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }

    /// True when the event started inside an element that keeps native
    /// scrolling, such as an open modal.
    fn inside_scroll_prevent(event: &web_sys::Event) -> bool {
        event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest("[data-scroll-prevent]").ok().flatten())
            .is_some()
    }

    fn wheel_delta_pixels(event: &WheelEvent) -> f64 {
        match event.delta_mode() {
            WheelEvent::DOM_DELTA_LINE => event.delta_y() * 16.0,
            WheelEvent::DOM_DELTA_PAGE => {
                let page = web_sys::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64())
                    .unwrap_or(800.0);
                event.delta_y() * page
            }
            _ => event.delta_y(),
        }
    }

    /// Takes over wheel scrolling on the window. `handler` receives the
    /// vertical delta in pixels. Pinch-zoom and wheel events inside
    /// `[data-scroll-prevent]` keep their native behavior.
    pub fn on_wheel(mut handler: impl FnMut(f64) + 'static) -> Option<EventListenerGuard> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            if wheel.ctrl_key() || inside_scroll_prevent(&event) {
                return;
            }
            event.prevent_default();
            handler(wheel_delta_pixels(wheel));
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(EventListenerGuard {
            target: window.into(),
            event: "wheel",
            closure,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use crate::motion::scroll_trigger::{Rect, Viewport};

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn next_frame() {
        sleep(super::FRAME).await;
    }

    pub fn viewport() -> Option<Viewport> {
        None
    }

    pub fn element_rect(_id: &str) -> Option<Rect> {
        None
    }

    pub fn element_origin(_id: &str) -> Option<(f64, f64)> {
        None
    }

    pub fn scroll_window_to(_y: f64) {}

    pub fn prefers_reduced_motion() -> Option<bool> {
        None
    }

    pub struct BodyStyleGuard;

    impl BodyStyleGuard {
        pub fn set(_property: &'static str, _value: &str) -> Option<Self> {
            None
        }
    }

    pub struct EventListenerGuard;

    pub fn on_wheel(_handler: impl FnMut(f64) + 'static) -> Option<EventListenerGuard> {
        None
    }
}
