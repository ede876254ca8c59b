use crate::coords::Vec2;

/// Keys the studio binds or that widgets react to. Anything else is
/// `Unknown` with the platform code, kept for debug logging.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Shift,
    Control,
    Alt,
    Meta,
    P,
    Q,
    S,
    X,
    Unknown(u32),
}

/// Press or release, shared by keys and mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Scroll amount: notched wheels report lines, touchpads report pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WheelDelta {
    Lines(Vec2),
    Pixels(Vec2),
}

impl WheelDelta {
    /// Logical pixels of touchpad travel counted as one wheel notch.
    pub const PIXELS_PER_NOTCH: f32 = 40.0;

    /// Vertical motion in notches, positive away from the user.
    pub fn notches_y(&self) -> f32 {
        match *self {
            WheelDelta::Lines(d) => d.y,
            WheelDelta::Pixels(d) => d.y / Self::PIXELS_PER_NOTCH,
        }
    }
}

/// Window input after translation from the platform. Positions are logical
/// pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    Key {
        key: Key,
        transition: Transition,
        /// OS auto-repeat of a held key.
        repeat: bool,
    },
    PointerMoved(Vec2),
    /// `pos` is the last known pointer position.
    PointerButton {
        button: MouseButton,
        transition: Transition,
        pos: Vec2,
    },
    Wheel(WheelDelta),
    /// Pointer left the window surface.
    PointerLeft,
    Focused(bool),
}
