use tickwork_engine::coords::{Rect, Vec2};
use tickwork_engine::paint::Color;
use tickwork_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// A run of text, wrapped to the parent's width unless `no_wrap` is set.
pub struct Label {
    text: String,
    font: FontId,
    size: f32,
    color: Color,
    wrap: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self { text: text.into(), font, size, color, wrap: true }
    }

    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self
    }

    fn max_width(&self, available: f32) -> Option<f32> {
        (self.wrap && available.is_finite() && available > 0.0).then_some(available)
    }
}

impl Widget for Label {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let size = ctx
            .fonts
            .measure_text(&self.text, self.font, self.size, self.max_width(constraints.max.x));
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let max_w = self.max_width(rect.size.x);
        painter.text(self.text.clone(), self.font, self.size, self.color, rect.origin, max_w);
    }
}
