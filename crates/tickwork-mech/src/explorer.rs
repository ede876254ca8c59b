//! Presentation state for the explorer.
//!
//! One [`ExplorerState`] is owned by the top-level view. Widgets and input
//! handlers never mutate it directly; they emit [`Action`]s that are applied
//! in arrival order once per frame.

use crate::state::ClockState;
use crate::train::{GearSpec, PartId};

/// Opacity of the gear layer while X-ray is on.
pub const XRAY_VISIBLE: f32 = 1.0;

/// Opacity of the gear layer while X-ray is off. Not zero, so a faint ghost
/// of the movement remains behind the dial.
pub const XRAY_HIDDEN: f32 = 0.02;

/// Opacity of a hand whose wheel is not the hovered one.
pub const HAND_DIMMED: f32 = 0.15;

/// A user intent produced by widgets, hover tracking or key bindings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    TogglePause,
    SetSpeed(u32),
    /// Relative speed change (keyboard arrows).
    NudgeSpeed(i32),
    /// Jump to the given wall-clock reading, reset speed, resume.
    Sync { now: f64 },
    ToggleXray,
    Hover(Option<PartId>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    pub clock: ClockState,
    pub xray: bool,
    pub hovered: Option<PartId>,
}

impl ExplorerState {
    pub fn new(clock: ClockState) -> Self {
        Self { clock, xray: false, hovered: None }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::TogglePause => {
                self.clock.toggle_paused();
                log::debug!("clock {}", if self.clock.is_paused() { "paused" } else { "resumed" });
            }
            Action::SetSpeed(speed) => self.clock.set_speed(speed),
            Action::NudgeSpeed(delta) => {
                let next = i64::from(self.clock.speed()) + i64::from(delta);
                self.clock.set_speed(u32::try_from(next.max(0)).unwrap_or(u32::MAX));
            }
            Action::Sync { now } => {
                self.clock.sync(now);
                log::info!("synced to wall clock at {now:.1}s into the period");
            }
            Action::ToggleXray => {
                self.xray = !self.xray;
                log::debug!("x-ray {}", if self.xray { "on" } else { "off" });
            }
            Action::Hover(part) => self.hovered = part,
        }
    }

    #[inline]
    pub fn is_focused(&self, part: PartId) -> bool {
        self.hovered == Some(part)
    }

    /// A part is dimmed when some other part holds the hover focus.
    #[inline]
    pub fn is_dimmed(&self, part: PartId) -> bool {
        self.hovered.is_some() && self.hovered != Some(part)
    }

    #[inline]
    pub fn gear_layer_opacity(&self) -> f32 {
        if self.xray { XRAY_VISIBLE } else { XRAY_HIDDEN }
    }

    /// Opacity of the hand driven by `driver`.
    #[inline]
    pub fn hand_opacity(&self, driver: PartId) -> f32 {
        if self.is_dimmed(driver) { HAND_DIMMED } else { 1.0 }
    }

    /// Catalog entry to show in the floating tooltip, if any.
    ///
    /// Only shown while X-ray is on; hovering still focuses and dims without it.
    pub fn tooltip(&self) -> Option<&'static GearSpec> {
        if !self.xray {
            return None;
        }
        self.hovered.map(PartId::spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MAX_SPEED, MIN_SPEED};

    fn explorer() -> ExplorerState {
        ExplorerState::new(ClockState::new(0.0))
    }

    // ── hover focus ───────────────────────────────────────────────────────

    #[test]
    fn nothing_hovered_means_nothing_dimmed() {
        let s = explorer();
        assert!(!s.is_dimmed(PartId::Hour));
        assert!(!s.is_focused(PartId::Hour));
        assert_eq!(s.hand_opacity(PartId::Hour), 1.0);
    }

    #[test]
    fn hovering_focuses_one_and_dims_the_rest() {
        let mut s = explorer();
        s.apply(Action::Hover(Some(PartId::Minute)));
        assert!(s.is_focused(PartId::Minute));
        assert!(!s.is_dimmed(PartId::Minute));
        assert!(s.is_dimmed(PartId::Second));
        assert!(s.is_dimmed(PartId::Escape));
        assert_eq!(s.hand_opacity(PartId::Minute), 1.0);
        assert_eq!(s.hand_opacity(PartId::Hour), HAND_DIMMED);
    }

    #[test]
    fn hover_none_clears_focus() {
        let mut s = explorer();
        s.apply(Action::Hover(Some(PartId::Escape)));
        s.apply(Action::Hover(None));
        assert_eq!(s.hovered, None);
        assert!(!s.is_dimmed(PartId::Second));
    }

    // ── x-ray ─────────────────────────────────────────────────────────────

    #[test]
    fn xray_toggles_layer_opacity() {
        let mut s = explorer();
        assert_eq!(s.gear_layer_opacity(), XRAY_HIDDEN);
        s.apply(Action::ToggleXray);
        assert_eq!(s.gear_layer_opacity(), XRAY_VISIBLE);
        s.apply(Action::ToggleXray);
        assert_eq!(s.gear_layer_opacity(), XRAY_HIDDEN);
    }

    #[test]
    fn tooltip_requires_xray_and_hover() {
        let mut s = explorer();
        s.apply(Action::Hover(Some(PartId::Hour)));
        assert!(s.tooltip().is_none());
        s.apply(Action::ToggleXray);
        assert_eq!(s.tooltip().map(|g| g.label), Some("Hour Wheel"));
        s.apply(Action::Hover(None));
        assert!(s.tooltip().is_none());
    }

    // ── clock controls ────────────────────────────────────────────────────

    #[test]
    fn nudge_speed_respects_bounds() {
        let mut s = explorer();
        s.apply(Action::NudgeSpeed(-5));
        assert_eq!(s.clock.speed(), MIN_SPEED);
        s.apply(Action::NudgeSpeed(3));
        assert_eq!(s.clock.speed(), 4);
        s.apply(Action::SetSpeed(99));
        s.apply(Action::NudgeSpeed(7));
        assert_eq!(s.clock.speed(), MAX_SPEED);
    }

    #[test]
    fn sync_action_resets_clock_but_not_view() {
        let mut s = explorer();
        s.apply(Action::ToggleXray);
        s.apply(Action::SetSpeed(30));
        s.apply(Action::TogglePause);
        s.apply(Action::Sync { now: 100.0 });
        assert_eq!(s.clock.time(), 100.0);
        assert_eq!(s.clock.speed(), 1);
        assert!(!s.clock.is_paused());
        assert!(s.xray);
    }
}
