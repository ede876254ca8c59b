use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::coords::Vec2;
use crate::input::{InputEvent, InputState, Key, Modifiers, MouseButton, Transition, WheelDelta};

/// Maps a winit window event onto an [`InputEvent`], or `None` for events
/// the runtime handles itself (resize, redraw, close).
///
/// Physical positions are divided by `scale_factor`. Button events carry the
/// last pointer position from `state`, since winit does not report one.
pub(crate) fn translate_window_event(
    scale_factor: f64,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::ModifiersChanged(m) => InputEvent::ModifiersChanged(map_modifiers(m.state())),
        WindowEvent::Focused(f) => InputEvent::Focused(*f),
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::CursorMoved { position, .. } => InputEvent::PointerMoved(logical(scale_factor, *position)),
        WindowEvent::MouseInput { state: st, button, .. } => InputEvent::PointerButton {
            button: map_mouse_button(*button),
            transition: transition(*st),
            pos: state.pointer_pos.unwrap_or_default(),
        },
        WindowEvent::MouseWheel { delta, .. } => InputEvent::Wheel(match delta {
            MouseScrollDelta::LineDelta(x, y) => WheelDelta::Lines(Vec2::new(*x, *y)),
            MouseScrollDelta::PixelDelta(p) => WheelDelta::Pixels(logical(scale_factor, *p)),
        }),
        WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
            key: map_key(event.physical_key),
            transition: transition(event.state),
            repeat: event.repeat,
        },
        _ => return None,
    };
    Some(ev)
}

fn logical(scale_factor: f64, pos: PhysicalPosition<f64>) -> Vec2 {
    let p = pos.to_logical::<f64>(scale_factor);
    Vec2::new(p.x as f32, p.y as f32)
}

fn transition(state: ElementState) -> Transition {
    match state {
        ElementState::Pressed => Transition::Pressed,
        ElementState::Released => Transition::Released,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers { shift: m.shift_key(), ctrl: m.control_key(), alt: m.alt_key(), meta: m.super_key() }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Space => Key::Space,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyX => Key::X,
        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_map_by_physical_code() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyX)), Key::X);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadEnter)), Key::Enter);
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::KeyZ)), Key::Unknown(_)));
    }

    #[test]
    fn pointer_positions_are_logical() {
        assert_eq!(logical(2.0, PhysicalPosition::new(200.0, 50.0)), Vec2::new(100.0, 25.0));
    }
}
