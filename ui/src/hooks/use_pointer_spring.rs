use dioxus::prelude::*;
use web_time::Instant;

use crate::compat;
use crate::hooks::use_motion_support;
use crate::motion::spring::{Spring, SpringConfig};

/// A 2D point that follows the pointer on a spring.
#[derive(Clone, Copy)]
pub struct PointerSpring {
    target: Signal<(f64, f64)>,
    position: Signal<(f64, f64)>,
}

impl PointerSpring {
    /// Moves the spring's target; the position catches up frame by frame.
    pub fn aim(&mut self, x: f64, y: f64) {
        self.target.set((x, y));
    }

    pub fn position(&self) -> (f64, f64) {
        (self.position)()
    }
}

pub fn use_pointer_spring(config: SpringConfig) -> PointerSpring {
    let support = use_motion_support();
    let target = use_signal(|| (0.0, 0.0));
    let mut position = use_signal(|| (0.0, 0.0));

    use_future(move || async move {
        if support.is_unavailable() {
            return;
        }
        let mut x = Spring::new(config, 0.0);
        let mut y = Spring::new(config, 0.0);
        let mut last = Instant::now();
        loop {
            compat::next_frame().await;
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f64();
            last = now;

            let (tx, ty) = *target.peek();
            if x.is_settled(tx) && y.is_settled(ty) {
                continue;
            }
            position.set((x.step(tx, dt), y.step(ty, dt)));
        }
    });

    PointerSpring { target, position }
}
