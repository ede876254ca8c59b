use tickwork_engine::coords::{Rect, Vec2};
use tickwork_engine::text::FontSystem;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Fixed-size widget for layout tests.
pub(crate) struct Block(pub Vec2);

impl Widget for Block {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(self.0)
    }

    fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
}

pub(crate) fn fonts() -> FontSystem {
    FontSystem::new()
}
