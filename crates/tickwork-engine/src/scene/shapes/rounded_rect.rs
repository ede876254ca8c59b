use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle draw payload with a uniform corner radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Color,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        fill: Color,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radius, fill, border }));
    }

    /// Records a solid rounded rectangle.
    #[inline]
    pub fn push_solid_rounded_rect(&mut self, z: ZIndex, rect: Rect, radius: f32, color: Color) {
        self.push_rounded_rect(z, rect, radius, color, None);
    }
}
