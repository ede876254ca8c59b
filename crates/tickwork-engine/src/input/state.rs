use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, Modifiers, MouseButton, Transition};
use crate::coords::Vec2;

/// What is held down right now, plus the pointer and focus.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// `None` while the pointer is outside the window.
    pub pointer_pos: Option<Vec2>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds `ev` into the held state, records the transition in `frame` and
    /// appends the raw event.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases may never arrive once focus is gone.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                    self.modifiers = Modifiers::default();
                }
            }
            InputEvent::PointerMoved(pos) => self.pointer_pos = Some(*pos),
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::Key { key, transition: Transition::Pressed, repeat } => {
                if self.keys_down.insert(*key) {
                    frame.keys_pressed.insert(*key);
                } else if *repeat {
                    frame.keys_repeated.push(*key);
                }
            }
            InputEvent::Key { key, transition: Transition::Released, .. } => {
                if self.keys_down.remove(key) {
                    frame.keys_released.insert(*key);
                }
            }
            InputEvent::PointerButton { button, transition, pos } => {
                self.pointer_pos = Some(*pos);
                match transition {
                    Transition::Pressed if self.buttons_down.insert(*button) => {
                        frame.buttons_pressed.insert(*button);
                    }
                    Transition::Released if self.buttons_down.remove(button) => {
                        frame.buttons_released.insert(*button);
                    }
                    _ => {}
                }
            }
            InputEvent::Wheel(_) => {}
        }

        frame.events.push(ev);
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, transition: Transition, repeat: bool) -> InputEvent {
        InputEvent::Key { key, transition, repeat }
    }

    fn left(transition: Transition) -> InputEvent {
        InputEvent::PointerButton { button: MouseButton::Left, transition, pos: Vec2::new(4.0, 5.0) }
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn press_and_release_are_recorded_once() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, key(Key::Space, Transition::Pressed, false));
        state.apply_event(&mut frame, key(Key::Space, Transition::Pressed, true));
        assert!(state.key_down(Key::Space));
        assert!(frame.key_pressed(Key::Space));
        assert_eq!(frame.key_triggered(Key::Space), 2);

        frame.clear();
        state.apply_event(&mut frame, key(Key::Space, Transition::Released, false));
        assert!(!state.key_down(Key::Space));
        assert!(frame.keys_released.contains(&Key::Space));
        assert!(!frame.key_pressed(Key::Space));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, InputEvent::ModifiersChanged(Modifiers { shift: true, ..Modifiers::default() }));
        state.apply_event(&mut frame, key(Key::ArrowUp, Transition::Pressed, false));
        state.apply_event(&mut frame, left(Transition::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
        assert!(state.buttons_down.is_empty());
        assert_eq!(state.modifiers, Modifiers::default());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_tracks_moves_and_leave() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, InputEvent::PointerMoved(Vec2::new(1.0, 2.0)));
        assert_eq!(state.pointer_pos, Some(Vec2::new(1.0, 2.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn button_transitions_update_frame_sets() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, left(Transition::Pressed));
        assert!(frame.button_pressed(MouseButton::Left));
        assert_eq!(state.pointer_pos, Some(Vec2::new(4.0, 5.0)));
        state.apply_event(&mut frame, left(Transition::Released));
        assert!(frame.button_released(MouseButton::Left));
        assert!(!state.button_down(MouseButton::Left));
    }
}
