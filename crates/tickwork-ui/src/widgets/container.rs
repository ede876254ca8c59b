use tickwork_engine::coords::{Rect, Vec2};
use tickwork_engine::paint::Color;
use tickwork_engine::scene::shapes::Border;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Single-child box with padding, background, border and rounding.
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Color>,
    border: Option<Border>,
    corner_radius: f32,
    min_size: Vec2,
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            padding: Edges::default(),
            background: None,
            border: None,
            corner_radius: 0.0,
            min_size: Vec2::zero(),
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
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

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_size = Vec2::new(width, height);
        self
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child = self
            .child
            .as_ref()
            .map(|c| c.measure(constraints.shrink(self.padding), ctx))
            .unwrap_or_default();
        let w = (child.x + self.padding.h()).max(self.min_size.x);
        let h = (child.y + self.padding.v()).max(self.min_size.y);
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.background.is_some() || self.border.is_some() {
            let fill = self.background.unwrap_or_else(Color::transparent);
            painter.fill_rounded_rect(rect, self.corner_radius, fill, self.border);
        }
        if let Some(child) = &self.child {
            child.paint(painter, inset_rect(rect, self.padding));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        match &mut self.child {
            Some(child) => child.on_event(event, inset_rect(rect, self.padding), ctx),
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_util::{fonts, Block};

    #[test]
    fn padding_adds_to_child_size() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let c = Container::new().padding(Edges::symmetric(5.0, 10.0)).child(Block(Vec2::new(30.0, 20.0)));
        let size = c.measure(Constraints::loose(Vec2::new(500.0, 500.0)), &ctx);
        assert_eq!(size, Vec2::new(50.0, 30.0));
    }

    #[test]
    fn min_size_wins_over_small_content() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let c = Container::new().min_size(100.0, 40.0);
        assert_eq!(c.measure(Constraints::loose(Vec2::new(500.0, 500.0)), &ctx), Vec2::new(100.0, 40.0));
    }
}
