use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Per-frame input deltas.
///
/// [`super::InputState`] holds what is currently down; `InputFrame` holds
/// what changed since the last rendered frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,
    /// Repeats of keys already held, in arrival order.
    pub keys_repeated: Vec<Key>,

    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.keys_repeated.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Fresh presses plus OS repeats: what a held arrow key should act on.
    pub fn key_triggered(&self, key: Key) -> usize {
        usize::from(self.key_pressed(key)) + self.keys_repeated.iter().filter(|k| **k == key).count()
    }

    #[inline]
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    #[inline]
    pub fn button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }
}
