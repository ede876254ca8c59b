use tickwork_engine::coords::{Rect, Vec2};
use tickwork_engine::paint::Color;
use tickwork_engine::scene::shapes::{Border, GearCmd, TextCmd};
use tickwork_engine::scene::{DrawList, ZIndex};
use tickwork_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;

/// Drawing surface handed to [`crate::widget::Widget::paint`].
///
/// Wraps the engine's `DrawList`. Every call takes the next z-index above the
/// previous one, so later calls paint on top regardless of shape kind.
/// Pointer state is exposed so widgets can render hover and press visuals
/// without retained state.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    pub(crate) fonts: &'a FontSystem,
    z: ZIndex,
    /// Pointer position in logical pixels, `None` outside the window.
    pub mouse_pos: Option<Vec2>,
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub fn new(
        draw_list: &'a mut DrawList,
        fonts: &'a FontSystem,
        base: ZIndex,
        mouse_pos: Option<Vec2>,
        mouse_pressed: bool,
    ) -> Self {
        Self { draw_list, fonts, z: base, mouse_pos, mouse_pressed }
    }

    // ── input queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse_pos.is_some_and(|p| rect.contains(p))
    }

    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && self.is_hovered(rect)
    }

    // ── layout ────────────────────────────────────────────────────────────

    pub fn measure_text(&self, text: &str, font: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        self.fonts.measure_text(text, font, size, max_width)
    }

    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx { fonts: self.fonts }
    }

    /// The z-index the next draw call will use.
    #[inline]
    pub fn z(&self) -> ZIndex {
        self.z
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rounded_rect(rect, 0.0, color, None);
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radius, color, border);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, color, border);
    }

    /// Circle outline of `width` drawn inside `radius`.
    pub fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_ring(z, center, radius, width, color);
    }

    /// Round-capped line.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_segment(z, from, to, width, color);
    }

    pub fn gear(&mut self, gear: GearCmd) {
        let z = self.next_z();
        self.draw_list.push_gear(z, gear);
    }

    /// Text with its top-left at `origin`, wrapped at `max_width`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, TextCmd::new(text, font, size, color, origin).wrap_at(max_width));
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = self.z;
        self.z = z.above(1);
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickwork_engine::scene::DrawCmd;

    #[test]
    fn later_calls_paint_on_top() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list, &fonts, ZIndex(10), None, false);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
            p.fill_circle(Vec2::new(5.0, 5.0), 3.0, Color::white(), None);
            assert_eq!(p.z(), ZIndex(12));
        }
        let zs: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![10, 11]);
        assert!(matches!(list.items()[1].cmd, DrawCmd::Circle(_)));
    }

    #[test]
    fn hover_needs_a_pointer() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        let p = Painter::new(&mut list, &fonts, ZIndex(0), None, true);
        assert!(!p.is_hovered(rect));
        assert!(!p.is_pressed(rect));

        let p = Painter::new(&mut list, &fonts, ZIndex(0), Some(Vec2::new(5.0, 5.0)), true);
        assert!(p.is_pressed(rect));
    }
}
