//! Input subsystem.
//!
//! No winit types cross this module's public API; `platform::winit`
//! translates window events into [`InputEvent`]s for the runtime, which
//! folds them into an [`InputState`] and the current [`InputFrame`].

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, Modifiers, MouseButton, Transition, WheelDelta};
