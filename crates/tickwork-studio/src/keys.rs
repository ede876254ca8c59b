use tickwork_engine::input::{InputFrame, Key, Modifiers};
use tickwork_mech::Action;

use crate::views::Msg;

/// Speed step for Shift+arrow.
const FAST_NUDGE: i32 = 10;

/// Messages for this frame's key presses.
///
/// Space or P pauses, X toggles X-ray, S syncs, arrows nudge the speed
/// (held arrows repeat; Shift steps by ten), Escape or Ctrl+Q quits.
pub fn key_messages(frame: &InputFrame, modifiers: Modifiers) -> Vec<Msg> {
    let mut out = Vec::new();

    if frame.key_pressed(Key::Escape) || (modifiers.ctrl && frame.key_pressed(Key::Q)) {
        out.push(Msg::Quit);
        return out;
    }
    // Plain letters only: Ctrl+S and friends belong to the platform.
    if modifiers.ctrl || modifiers.meta || modifiers.alt {
        return out;
    }

    if frame.key_pressed(Key::Space) || frame.key_pressed(Key::P) {
        out.push(Msg::Explorer(Action::TogglePause));
    }
    if frame.key_pressed(Key::X) {
        out.push(Msg::Explorer(Action::ToggleXray));
    }
    if frame.key_pressed(Key::S) {
        out.push(Msg::Sync);
    }

    let step = if modifiers.shift { FAST_NUDGE } else { 1 };
    let up = frame.key_triggered(Key::ArrowUp) as i32;
    let down = frame.key_triggered(Key::ArrowDown) as i32;
    if up != down {
        out.push(Msg::Explorer(Action::NudgeSpeed((up - down) * step)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(pressed: &[Key], repeated: &[Key]) -> InputFrame {
        let mut f = InputFrame::default();
        f.keys_pressed.extend(pressed.iter().copied());
        f.keys_repeated.extend(repeated.iter().copied());
        f
    }

    #[test]
    fn letters_map_to_actions() {
        let msgs = key_messages(&frame(&[Key::Space, Key::X, Key::S], &[]), Modifiers::default());
        assert_eq!(
            msgs,
            vec![Msg::Explorer(Action::TogglePause), Msg::Explorer(Action::ToggleXray), Msg::Sync]
        );
    }

    #[test]
    fn held_arrow_repeats_and_shift_speeds_up() {
        let msgs = key_messages(&frame(&[Key::ArrowUp], &[Key::ArrowUp, Key::ArrowUp]), Modifiers::default());
        assert_eq!(msgs, vec![Msg::Explorer(Action::NudgeSpeed(3))]);

        let shift = Modifiers { shift: true, ..Modifiers::default() };
        let msgs = key_messages(&frame(&[Key::ArrowDown], &[]), shift);
        assert_eq!(msgs, vec![Msg::Explorer(Action::NudgeSpeed(-10))]);
    }

    #[test]
    fn escape_quits_before_anything_else() {
        let msgs = key_messages(&frame(&[Key::Escape, Key::Space], &[]), Modifiers::default());
        assert_eq!(msgs, vec![Msg::Quit]);

        let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
        assert_eq!(key_messages(&frame(&[Key::Q], &[]), ctrl), vec![Msg::Quit]);
        assert!(key_messages(&frame(&[Key::S], &[]), ctrl).is_empty());
    }
}
