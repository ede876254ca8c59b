use tickwork_engine::coords::Vec2;

/// Pointer events routed through the widget tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Pointer position this frame; sent every frame the pointer is inside
    /// the window.
    Hover { pos: Vec2 },
    /// Primary button pressed and released without dragging.
    Click { pos: Vec2 },
    /// Pointer moved with the primary button held past the drag threshold.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a drag. Fires wherever the pointer is;
    /// widgets check `start` to claim it.
    DragEnd { pos: Vec2, start: Vec2 },
    /// Wheel motion in notches, positive away from the user.
    Scroll { pos: Vec2, delta: f32 },
}

/// Result returned by [`crate::widget::Widget::on_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; stop routing.
    Consumed,
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
