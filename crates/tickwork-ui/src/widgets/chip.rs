use tickwork_engine::coords::{Rect, Vec2};
use tickwork_engine::paint::Color;
use tickwork_engine::scene::shapes::Border;
use tickwork_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

const PAD_X: f32 = 12.0;
const PAD_Y: f32 = 6.0;
const DOT: f32 = 8.0;
const GAP: f32 = 8.0;

/// Pill-shaped tag with a colored dot.
///
/// `on_hover` fires every frame the pointer rests on the chip; hovering is
/// recomputed from scratch each frame, so leaving needs no callback.
pub struct Chip {
    label: String,
    font: FontId,
    size: f32,
    dot: Color,
    text_color: Color,
    background: Color,
    active_background: Color,
    active: bool,
    on_hover: Option<Box<dyn FnMut()>>,
}

impl Chip {
    pub fn new(label: impl Into<String>, font: FontId, size: f32, dot: Color) -> Self {
        Self {
            label: label.into(),
            font,
            size,
            dot,
            text_color: Color::white(),
            background: Color::from_straight(1.0, 1.0, 1.0, 0.06),
            active_background: Color::from_straight(1.0, 1.0, 1.0, 0.18),
            active: false,
            on_hover: None,
        }
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn backgrounds(mut self, idle: Color, active: Color) -> Self {
        self.background = idle;
        self.active_background = active;
        self
    }

    /// Draws the chip highlighted.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn on_hover(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_hover = Some(Box::new(f));
        self
    }
}

impl Widget for Chip {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let text = ctx.fonts.measure_text(&self.label, self.font, self.size, None);
        let w = PAD_X * 2.0 + DOT + GAP + text.x;
        let h = PAD_Y * 2.0 + text.y.max(DOT);
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let highlighted = self.active || painter.is_hovered(rect);
        let (bg, border) = if highlighted {
            (self.active_background, Some(Border::new(1.0, self.dot)))
        } else {
            (self.background, None)
        };
        painter.fill_rounded_rect(rect, rect.size.y * 0.5, bg, border);

        let cy = rect.center().y;
        painter.fill_circle(Vec2::new(rect.origin.x + PAD_X + DOT * 0.5, cy), DOT * 0.5, self.dot, None);

        let text = painter.measure_text(&self.label, self.font, self.size, None);
        let origin = Vec2::new(rect.origin.x + PAD_X + DOT + GAP, cy - text.y * 0.5);
        painter.text(self.label.as_str(), self.font, self.size, self.text_color, origin, None);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        match event {
            UiEvent::Hover { pos } if rect.contains(*pos) => {
                if let Some(f) = &mut self.on_hover {
                    f();
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
