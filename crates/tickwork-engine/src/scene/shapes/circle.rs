use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Circle draw payload. A transparent fill with a border draws a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, fill, border }));
    }

    /// Records a solid disc.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, center, radius, color, None);
    }

    /// Records an unfilled ring whose outer edge is at `radius`.
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, width: f32, color: Color) {
        self.push_circle(z, center, radius, Color::transparent(), Some(Border::new(width, color)));
    }
}
