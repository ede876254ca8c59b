use tickwork_engine::coords::{Rect, Vec2};
use tickwork_engine::paint::Color;
use tickwork_engine::scene::shapes::Border;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A clickable box around any child.
///
/// Hover and press visuals come from the painter's pointer state, so the
/// button can be rebuilt every frame.
pub struct Button {
    child: Element,
    on_click: Option<Box<dyn FnMut()>>,

    background: Color,
    hover_background: Color,
    press_background: Color,
    border: Option<Border>,
    corner_radius: f32,
    padding: Edges,
    min_size: Vec2,
}

impl Button {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            on_click: None,
            background: Color::transparent(),
            hover_background: Color::transparent(),
            press_background: Color::transparent(),
            border: None,
            corner_radius: 0.0,
            padding: Edges::default(),
            min_size: Vec2::zero(),
        }
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Sets all three state colors; refine with the specific setters.
    pub fn colors(mut self, idle: Color, hover: Color, pressed: Color) -> Self {
        self.background = idle;
        self.hover_background = hover;
        self.press_background = pressed;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_size = Vec2::new(width, height);
        self
    }
}

impl Widget for Button {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child = self.child.measure(constraints.shrink(self.padding), ctx);
        let w = (child.x + self.padding.h()).max(self.min_size.x);
        let h = (child.y + self.padding.v()).max(self.min_size.y);
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let bg = if painter.is_pressed(rect) {
            self.press_background
        } else if painter.is_hovered(rect) {
            self.hover_background
        } else {
            self.background
        };
        painter.fill_rounded_rect(rect, self.corner_radius, bg, self.border);

        // Center the child inside the padded box.
        let inner = inset_rect(rect, self.padding);
        let child = self.child.measure(Constraints::loose(inner.size), &painter.layout_ctx());
        let child_rect = Rect::from_center(inner.center(), child);
        self.child.paint(painter, child_rect);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        match event {
            UiEvent::Click { pos } if rect.contains(*pos) => {
                if let Some(f) = &mut self.on_click {
                    f();
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::widgets::test_util::{fonts, Block};

    #[test]
    fn click_inside_fires_once() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut button = Button::new(Block(Vec2::new(10.0, 10.0))).on_click(move || h.set(h.get() + 1));
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);

        let r = button.on_event(&UiEvent::Click { pos: Vec2::new(5.0, 5.0) }, rect, &ctx);
        assert!(r.is_consumed());
        let r = button.on_event(&UiEvent::Click { pos: Vec2::new(50.0, 5.0) }, rect, &ctx);
        assert!(!r.is_consumed());
        let r = button.on_event(&UiEvent::Hover { pos: Vec2::new(5.0, 5.0) }, rect, &ctx);
        assert!(!r.is_consumed());

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn min_size_applies_to_measure() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let button = Button::new(Block(Vec2::new(10.0, 10.0))).padding(Edges::all(2.0)).min_size(44.0, 0.0);
        let size = button.measure(Constraints::loose(Vec2::new(200.0, 200.0)), &ctx);
        assert_eq!(size, Vec2::new(44.0, 14.0));
    }
}
