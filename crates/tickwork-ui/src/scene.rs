use tickwork_engine::coords::Rect;
use tickwork_engine::scene::{DrawList, ZIndex};
use tickwork_engine::text::FontSystem;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::input::UiInput;
use crate::painter::Painter;
use crate::widget::Element;

/// Owns the fonts and the frame's draw list.
///
/// Fields are public so the caller can split-borrow both when handing them
/// to the engine's scene renderer.
pub struct UiScene {
    pub font_system: FontSystem,
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new(font_system: FontSystem) -> Self {
        Self { font_system, draw_list: DrawList::new() }
    }

    /// Starts a new frame.
    pub fn clear(&mut self) {
        self.draw_list.clear();
    }

    /// A painter for free-form drawing starting at `base`.
    pub fn painter(&mut self, base: ZIndex, input: &UiInput) -> Painter<'_> {
        Painter::new(&mut self.draw_list, &self.font_system, base, input.mouse_pos, input.mouse_pressed)
    }

    /// Measures and paints `root` into `rect`, then routes the frame's
    /// events to it. Returns the z-index after the last draw call.
    pub fn frame(&mut self, root: impl Into<Element>, rect: Rect, base: ZIndex, input: &UiInput) -> ZIndex {
        let mut root = root.into();
        let ctx = LayoutCtx { fonts: &self.font_system };
        let _ = root.measure(Constraints::tight(rect.size), &ctx);

        let next = {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                base,
                input.mouse_pos,
                input.mouse_pressed,
            );
            root.paint(&mut painter, rect);
            painter.z()
        };

        let ctx = LayoutCtx { fonts: &self.font_system };
        if let Some(pos) = input.mouse_pos {
            root.on_event(&UiEvent::Hover { pos }, rect, &ctx);
        }
        for ev in &input.events {
            if root.on_event(ev, rect, &ctx).is_consumed() {
                log::trace!("ui event handled: {ev:?}");
            }
        }

        next
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new(FontSystem::new())
    }
}
