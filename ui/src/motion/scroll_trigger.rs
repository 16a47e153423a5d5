//! Mapping an element's scroll position onto a 0..1 progress value.
//!
//! A trigger is described the way designers usually write it, e.g.
//! "top 65%" to "center 50%": the element's top edge meeting the line 65%
//! down the viewport starts the range, its center meeting the middle ends it.

/// Window scroll state, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    /// How far the whole page has been scrolled, 0 at the top and 1 at the
    /// bottom. Pages that cannot scroll report 0.
    pub fn page_progress(&self) -> f64 {
        let scrollable = self.document_height - self.height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

/// Element bounds relative to the viewport, as returned by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn offset(&self, height: f64) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => height / 2.0,
            Edge::Bottom => height,
        }
    }
}

/// An element edge paired with a line in the viewport (0.0 = top, 1.0 = bottom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    pub viewport: f64,
}

impl Anchor {
    pub const fn new(edge: Edge, viewport: f64) -> Self {
        Self { edge, viewport }
    }

    /// Window scroll offset at which this anchor is met.
    fn scroll_offset(&self, rect: Rect, viewport: Viewport) -> f64 {
        let document_top = viewport.scroll_y + rect.top;
        document_top + self.edge.offset(rect.height) - self.viewport * viewport.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum End {
    Anchor(Anchor),
    /// A fixed number of pixels of scrolling after the start.
    Distance(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: Anchor,
    pub end: End,
}

impl ScrollTrigger {
    pub const fn new(start: Anchor, end: End) -> Self {
        Self { start, end }
    }

    /// Start and end scroll offsets for an element measured at `rect`.
    pub fn range(&self, rect: Rect, viewport: Viewport) -> (f64, f64) {
        let start = self.start.scroll_offset(rect, viewport);
        let end = match self.end {
            End::Anchor(anchor) => anchor.scroll_offset(rect, viewport),
            End::Distance(pixels) => start + pixels,
        };
        (start, end)
    }

    /// Progress of the element through the trigger range, clamped to `[0, 1]`.
    pub fn progress(&self, rect: Rect, viewport: Viewport) -> f64 {
        let (start, end) = self.range(rect, viewport);
        let span = end - start;
        if span <= 0.0 {
            return if viewport.scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((viewport.scroll_y - start) / span).clamp(0.0, 1.0)
    }
}

/// One-shot "has this element been seen" check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InView {
    /// Fraction of the element that must be visible. `None` means any pixel.
    pub amount: Option<f64>,
    /// Pixels added to each viewport edge; negative values shrink it.
    pub margin: f64,
}

impl InView {
    pub const ANY: InView = InView {
        amount: None,
        margin: 0.0,
    };

    pub const fn amount(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            margin: 0.0,
        }
    }

    pub const fn with_margin(self, margin: f64) -> Self {
        Self {
            amount: self.amount,
            margin,
        }
    }

    pub fn is_satisfied(&self, rect: Rect, viewport: Viewport) -> bool {
        let top = -self.margin;
        let bottom = viewport.height + self.margin;
        let visible = (rect.bottom().min(bottom) - rect.top.max(top)).max(0.0);
        match self.amount {
            None => visible > 0.0 || (rect.height == 0.0 && rect.top >= top && rect.top <= bottom),
            Some(amount) => {
                // Elements taller than the viewport can never be fully visible.
                let reference = rect.height.min(bottom - top);
                if reference <= 0.0 {
                    return rect.top >= top && rect.top <= bottom;
                }
                visible / reference >= amount
            }
        }
    }
}

/// Latches to `true` the first time an [`InView`] condition holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewLatch {
    condition: InView,
    fired: bool,
}

impl InViewLatch {
    pub fn new(condition: InView) -> Self {
        Self {
            condition,
            fired: false,
        }
    }

    /// Returns `true` exactly once, on the sample that first satisfies the
    /// condition.
    pub fn observe(&mut self, rect: Rect, viewport: Viewport) -> bool {
        if self.fired {
            return false;
        }
        self.fired = self.condition.is_satisfied(rect, viewport);
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            width: 1280.0,
            height: 800.0,
            document_height: 5000.0,
        }
    }

    /// Rect of an element whose document top is `doc_top` at `scroll_y`.
    fn rect_at(doc_top: f64, height: f64, scroll_y: f64) -> Rect {
        Rect {
            top: doc_top - scroll_y,
            height,
        }
    }

    #[test]
    fn page_progress_spans_the_scrollable_height() {
        assert_eq!(viewport(0.0).page_progress(), 0.0);
        assert_eq!(viewport(4200.0).page_progress(), 1.0);
        assert!((viewport(2100.0).page_progress() - 0.5).abs() < 1e-12);
        let short = Viewport {
            document_height: 600.0,
            ..viewport(0.0)
        };
        assert_eq!(short.page_progress(), 0.0);
    }

    #[test]
    fn anchored_range_matches_the_described_lines() {
        let trigger = ScrollTrigger::new(
            Anchor::new(Edge::Top, 0.65),
            End::Anchor(Anchor::new(Edge::Center, 0.5)),
        );
        let (start, end) = trigger.range(rect_at(2000.0, 600.0, 0.0), viewport(0.0));
        assert_eq!(start, 2000.0 - 520.0);
        assert_eq!(end, 2000.0 + 300.0 - 400.0);
    }

    #[test]
    fn range_does_not_depend_on_when_it_is_measured() {
        let trigger = ScrollTrigger::new(Anchor::new(Edge::Top, 0.6), End::Anchor(Anchor::new(Edge::Top, 0.2)));
        let a = trigger.range(rect_at(1500.0, 400.0, 0.0), viewport(0.0));
        let b = trigger.range(rect_at(1500.0, 400.0, 900.0), viewport(900.0));
        assert_eq!(a, b);
    }

    #[test]
    fn progress_is_clamped_and_monotonic() {
        let trigger = ScrollTrigger::new(Anchor::new(Edge::Top, 0.0), End::Distance(2000.0));
        let mut last = 0.0;
        for step in 0..=100 {
            let scroll_y = step as f64 * 50.0;
            let p = trigger.progress(rect_at(1000.0, 800.0, scroll_y), viewport(scroll_y));
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
        }
        assert_eq!(trigger.progress(rect_at(1000.0, 800.0, 0.0), viewport(0.0)), 0.0);
        assert_eq!(trigger.progress(rect_at(1000.0, 800.0, 2000.0), viewport(2000.0)), 0.5);
        assert_eq!(trigger.progress(rect_at(1000.0, 800.0, 3500.0), viewport(3500.0)), 1.0);
    }

    #[test]
    fn empty_range_is_a_step() {
        let trigger = ScrollTrigger::new(Anchor::new(Edge::Top, 0.5), End::Distance(0.0));
        assert_eq!(trigger.progress(rect_at(1000.0, 10.0, 0.0), viewport(0.0)), 0.0);
        assert_eq!(trigger.progress(rect_at(1000.0, 10.0, 700.0), viewport(700.0)), 1.0);
    }

    #[test]
    fn in_view_any_pixel() {
        let vp = viewport(0.0);
        assert!(!InView::ANY.is_satisfied(Rect { top: 800.0, height: 100.0 }, vp));
        assert!(InView::ANY.is_satisfied(Rect { top: 799.0, height: 100.0 }, vp));
        assert!(!InView::ANY.is_satisfied(Rect { top: -100.0, height: 100.0 }, vp));
    }

    #[test]
    fn in_view_amount_and_margin() {
        let vp = viewport(0.0);
        let half = InView::amount(0.5);
        assert!(!half.is_satisfied(Rect { top: 760.0, height: 100.0 }, vp));
        assert!(half.is_satisfied(Rect { top: 750.0, height: 100.0 }, vp));

        let shrunk = InView::amount(0.3).with_margin(-100.0);
        assert!(!shrunk.is_satisfied(Rect { top: 680.0, height: 100.0 }, vp));
        assert!(shrunk.is_satisfied(Rect { top: 600.0, height: 100.0 }, vp));
    }

    #[test]
    fn tall_elements_can_satisfy_full_amount() {
        let vp = viewport(0.0);
        let tall = Rect { top: -200.0, height: 3000.0 };
        assert!(InView::amount(1.0).is_satisfied(tall, vp));
    }

    #[test]
    fn latch_fires_once() {
        let vp = viewport(0.0);
        let mut latch = InViewLatch::new(InView::amount(0.2));
        assert!(!latch.observe(Rect { top: 900.0, height: 200.0 }, vp));
        assert!(latch.observe(Rect { top: 700.0, height: 200.0 }, vp));
        assert!(!latch.observe(Rect { top: 500.0, height: 200.0 }, vp));
        assert!(!latch.observe(Rect { top: 2000.0, height: 200.0 }, vp));
        assert!(!latch.observe(Rect { top: 700.0, height: 200.0 }, vp));
    }
}
