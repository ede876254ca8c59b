use tickwork_engine::coords::{Rect, Vec2};
use tickwork_engine::paint::Color;
use tickwork_engine::scene::shapes::Border;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Horizontal slider over an inclusive integer range.
///
/// Click or drag on the track to pick a value; the wheel steps by one per
/// notch. `on_change` fires only when the value actually changes.
pub struct Slider {
    value: u32,
    min: u32,
    max: u32,
    track_height: f32,
    thumb_radius: f32,
    track_color: Color,
    fill_color: Color,
    thumb_color: Color,
    on_change: Option<Box<dyn FnMut(u32)>>,
}

impl Slider {
    pub fn new(min: u32, max: u32, value: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.clamp(min, max),
            min,
            max,
            track_height: 4.0,
            thumb_radius: 8.0,
            track_color: Color::from_straight(0.2, 0.22, 0.26, 1.0),
            fill_color: Color::from_straight(0.85, 0.65, 0.2, 1.0),
            thumb_color: Color::white(),
            on_change: None,
        }
    }

    pub fn colors(mut self, track: Color, fill: Color, thumb: Color) -> Self {
        self.track_color = track;
        self.fill_color = fill;
        self.thumb_color = thumb;
        self
    }

    pub fn thumb_radius(mut self, r: f32) -> Self {
        self.thumb_radius = r;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(u32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Fraction of the track covered by the current value.
    fn normalized(&self) -> f32 {
        if self.max == self.min {
            0.0
        } else {
            (self.value - self.min) as f32 / (self.max - self.min) as f32
        }
    }

    /// The track runs between the thumb's extreme centers.
    fn track(&self, rect: Rect) -> Rect {
        let r = self.thumb_radius;
        let cy = rect.center().y;
        Rect::new(rect.origin.x + r, cy - self.track_height * 0.5, (rect.size.x - 2.0 * r).max(0.0), self.track_height)
    }

    fn value_at(&self, x: f32, rect: Rect) -> u32 {
        let track = self.track(rect);
        if track.size.x <= 0.0 {
            return self.value;
        }
        let t = ((x - track.origin.x) / track.size.x).clamp(0.0, 1.0);
        self.min + (t * (self.max - self.min) as f32).round() as u32
    }

    fn set(&mut self, v: u32) {
        let v = v.clamp(self.min, self.max);
        if v == self.value {
            return;
        }
        self.value = v;
        if let Some(f) = &mut self.on_change {
            f(v);
        }
    }
}

impl Widget for Slider {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 200.0 };
        constraints.constrain(Vec2::new(w, self.thumb_radius * 2.0 + 4.0))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let track = self.track(rect);
        let radius = self.track_height * 0.5;
        painter.fill_rounded_rect(track, radius, self.track_color, None);

        let cx = track.origin.x + self.normalized() * track.size.x;
        let filled = Rect::new(track.origin.x, track.origin.y, cx - track.origin.x, track.size.y);
        if filled.size.x > 0.0 {
            painter.fill_rounded_rect(filled, radius, self.fill_color, None);
        }

        let r = if painter.is_hovered(rect) { self.thumb_radius + 1.5 } else { self.thumb_radius };
        let border = Some(Border::new(2.0, self.fill_color));
        painter.fill_circle(Vec2::new(cx, track.center().y), r, self.thumb_color, border);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        match *event {
            UiEvent::Click { pos } if rect.contains(pos) => {
                self.set(self.value_at(pos.x, rect));
                EventResult::Consumed
            }
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start } if rect.contains(start) => {
                self.set(self.value_at(pos.x, rect));
                EventResult::Consumed
            }
            UiEvent::Scroll { pos, delta } if rect.contains(pos) => {
                let step = delta.round() as i64;
                let v = (self.value as i64 + step).clamp(self.min as i64, self.max as i64);
                self.set(v as u32);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::widgets::test_util::fonts;

    // Thumb radius 8: the track spans x = 8..208 for this rect.
    const RECT: Rect = Rect::new(0.0, 0.0, 216.0, 20.0);

    fn recording(min: u32, max: u32, value: u32) -> (Slider, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let slider = Slider::new(min, max, value).on_change(move |v| s.borrow_mut().push(v));
        (slider, seen)
    }

    #[test]
    fn value_is_clamped_and_bounds_ordered() {
        assert_eq!(Slider::new(1, 100, 0).value(), 1);
        assert_eq!(Slider::new(100, 1, 500).value(), 100);
    }

    #[test]
    fn click_maps_position_to_nearest_integer() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let (mut slider, seen) = recording(0, 100, 0);

        slider.on_event(&UiEvent::Click { pos: Vec2::new(108.0, 10.0) }, RECT, &ctx);
        assert_eq!(slider.value(), 50);
        slider.on_event(&UiEvent::Click { pos: Vec2::new(1.0, 10.0) }, RECT, &ctx);
        assert_eq!(slider.value(), 0);
        assert_eq!(*seen.borrow(), vec![50, 0]);
    }

    #[test]
    fn drag_is_claimed_by_its_start_point() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let (mut slider, seen) = recording(1, 100, 1);

        // Started elsewhere: not ours.
        let outside = Vec2::new(500.0, 500.0);
        let r = slider.on_event(&UiEvent::Drag { pos: Vec2::new(208.0, 10.0), start: outside }, RECT, &ctx);
        assert!(!r.is_consumed());

        let start = Vec2::new(8.0, 10.0);
        slider.on_event(&UiEvent::Drag { pos: Vec2::new(400.0, 90.0), start }, RECT, &ctx);
        assert_eq!(slider.value(), 100);
        // Same value again: no duplicate notification.
        slider.on_event(&UiEvent::DragEnd { pos: Vec2::new(300.0, 10.0), start }, RECT, &ctx);
        assert_eq!(*seen.borrow(), vec![100]);
    }

    #[test]
    fn wheel_steps_by_notch() {
        let fonts = fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let (mut slider, _) = recording(1, 100, 99);
        let pos = Vec2::new(50.0, 10.0);
        slider.on_event(&UiEvent::Scroll { pos, delta: 3.0 }, RECT, &ctx);
        assert_eq!(slider.value(), 100);
        slider.on_event(&UiEvent::Scroll { pos, delta: -1.0 }, RECT, &ctx);
        assert_eq!(slider.value(), 99);
    }
}
