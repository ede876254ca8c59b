//! Per-frame view builders.
//!
//! Views never touch [`ExplorerState`](tickwork_mech::ExplorerState)
//! directly. Widget callbacks post [`Msg`]s to an [`Outbox`]; the app drains
//! it after the frame's events have been routed.

pub mod controls;
pub mod dial;
pub mod panels;
pub mod tooltip;

use std::cell::RefCell;
use std::rc::Rc;

use tickwork_mech::{Action, PartId};

/// What a widget asks the app to do.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Msg {
    Explorer(Action),
    /// Sync to the wall clock; the app supplies the reading.
    Sync,
    /// Fetch a tip for the preset topic at this index.
    Ask(usize),
    /// Pointer rests on a part chip this frame.
    ChipHovered(PartId),
    Quit,
}

/// Shared message queue handed to widget callbacks.
#[derive(Debug, Clone, Default)]
pub struct Outbox(Rc<RefCell<Vec<Msg>>>);

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&self, msg: Msg) {
        self.0.borrow_mut().push(msg);
    }

    /// A callback that posts `msg` every time it runs.
    pub fn sender(&self, msg: Msg) -> impl FnMut() + 'static {
        let outbox = self.clone();
        move || outbox.send(msg)
    }

    pub fn drain(&self) -> Vec<Msg> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_drain_in_send_order() {
        let outbox = Outbox::new();
        let mut pause = outbox.sender(Msg::Explorer(Action::TogglePause));
        outbox.send(Msg::Sync);
        pause();
        assert_eq!(outbox.drain(), vec![Msg::Sync, Msg::Explorer(Action::TogglePause)]);
        assert!(outbox.drain().is_empty());
    }
}
