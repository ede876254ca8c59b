use tickwork_engine::coords::Vec2;
use tickwork_engine::input::{InputEvent, InputFrame, InputState, MouseButton, Transition};

use crate::event::UiEvent;

/// Pointer travel, in logical pixels, before a press becomes a drag.
const DRAG_THRESHOLD: f32 = 3.0;

/// One frame of pointer input in UI terms.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    pub mouse_pos: Option<Vec2>,
    pub mouse_pressed: bool,
    /// Click, drag and wheel events in arrival order. Hover is implied by
    /// `mouse_pos`.
    pub events: Vec<UiEvent>,
}

impl UiInput {
    /// Input with the pointer at `pos` and nothing else happening.
    pub fn hovering(pos: Vec2) -> Self {
        Self { mouse_pos: Some(pos), ..Self::default() }
    }
}

/// Turns raw engine input into [`UiInput`], tracking presses across frames
/// to tell clicks from drags.
#[derive(Debug, Default)]
pub struct PointerTracker {
    press_start: Option<Vec2>,
    dragging: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Consumes this frame's events. Call once per frame, before input is
    /// cleared.
    pub fn update(&mut self, state: &InputState, frame: &InputFrame) -> UiInput {
        let mut events = Vec::new();
        let mut pos = state.pointer_pos;

        for ev in &frame.events {
            match ev {
                &InputEvent::PointerMoved(p) => {
                    pos = Some(p);
                    if let Some(start) = self.press_start {
                        if !self.dragging && p.distance(start) >= DRAG_THRESHOLD {
                            self.dragging = true;
                        }
                        if self.dragging {
                            events.push(UiEvent::Drag { pos: p, start });
                        }
                    }
                }

                &InputEvent::PointerButton { button: MouseButton::Left, transition, pos: p } => {
                    match transition {
                        Transition::Pressed => {
                            self.press_start = Some(p);
                            self.dragging = false;
                        }
                        Transition::Released => {
                            match self.press_start.take() {
                                Some(start) if self.dragging => {
                                    events.push(UiEvent::DragEnd { pos: p, start });
                                }
                                Some(_) => events.push(UiEvent::Click { pos: p }),
                                None => {}
                            }
                            self.dragging = false;
                        }
                    }
                }

                InputEvent::Wheel(delta) => {
                    if let Some(p) = pos {
                        events.push(UiEvent::Scroll { pos: p, delta: delta.notches_y() });
                    }
                }

                InputEvent::Focused(false) => {
                    self.press_start = None;
                    self.dragging = false;
                }

                _ => {}
            }
        }

        UiInput {
            mouse_pos: state.pointer_pos,
            mouse_pressed: state.button_down(MouseButton::Left),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickwork_engine::input::WheelDelta;

    struct Harness {
        state: InputState,
        frame: InputFrame,
        tracker: PointerTracker,
    }

    impl Harness {
        fn new() -> Self {
            Self { state: InputState::default(), frame: InputFrame::default(), tracker: PointerTracker::new() }
        }

        fn feed(&mut self, ev: InputEvent) -> &mut Self {
            self.state.apply_event(&mut self.frame, ev);
            self
        }

        fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
            self.feed(InputEvent::PointerMoved(Vec2::new(x, y)))
        }

        fn button(&mut self, transition: Transition) -> &mut Self {
            let pos = self.state.pointer_pos.unwrap_or_default();
            self.feed(InputEvent::PointerButton { button: MouseButton::Left, transition, pos })
        }

        fn end_frame(&mut self) -> UiInput {
            let out = self.tracker.update(&self.state, &self.frame);
            self.frame.clear();
            out
        }
    }

    // ── clicks ────────────────────────────────────────────────────────────

    #[test]
    fn press_release_in_place_is_a_click() {
        let mut h = Harness::new();
        h.move_to(10.0, 10.0).button(Transition::Pressed);
        let input = h.end_frame();
        assert!(input.mouse_pressed);
        assert!(input.events.is_empty());

        h.move_to(11.0, 10.0).button(Transition::Released);
        let input = h.end_frame();
        assert_eq!(input.events, vec![UiEvent::Click { pos: Vec2::new(11.0, 10.0) }]);
        assert!(!input.mouse_pressed);
    }

    // ── drags ─────────────────────────────────────────────────────────────

    #[test]
    fn moving_past_threshold_drags_then_ends() {
        let mut h = Harness::new();
        h.move_to(0.0, 0.0).button(Transition::Pressed);
        h.end_frame();

        h.move_to(20.0, 0.0);
        let input = h.end_frame();
        let start = Vec2::new(0.0, 0.0);
        assert_eq!(input.events, vec![UiEvent::Drag { pos: Vec2::new(20.0, 0.0), start }]);
        assert!(h.tracker.is_dragging());

        h.button(Transition::Released);
        let input = h.end_frame();
        assert_eq!(input.events, vec![UiEvent::DragEnd { pos: Vec2::new(20.0, 0.0), start }]);
        assert!(!h.tracker.is_dragging());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut h = Harness::new();
        h.move_to(5.0, 5.0).button(Transition::Released);
        assert!(h.end_frame().events.is_empty());
    }

    // ── wheel ─────────────────────────────────────────────────────────────

    #[test]
    fn wheel_reports_notches_at_pointer() {
        let mut h = Harness::new();
        h.move_to(3.0, 4.0).feed(InputEvent::Wheel(WheelDelta::Lines(Vec2::new(0.0, 2.0))));
        let input = h.end_frame();
        assert_eq!(input.events, vec![UiEvent::Scroll { pos: Vec2::new(3.0, 4.0), delta: 2.0 }]);
    }
}
