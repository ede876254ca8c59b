use tickwork_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// The trait every UI component implements.
pub trait Widget: 'static {
    /// Size wanted within `constraints`. Must be deterministic; parents may
    /// measure more than once per frame.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draws inside `rect`, the space the parent allocated.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        EventResult::Ignored
    }

    /// Share of a flex container's leftover main-axis space. Zero means the
    /// widget keeps its measured size.
    fn flex(&self) -> f32 {
        0.0
    }
}

/// A type-erased widget, the child type of every container.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn flex(&self) -> f32 {
        self.0.flex()
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
