use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight stroke with round caps (a capsule), `width` across.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a round-capped line from `from` to `to`.
    #[inline]
    pub fn push_segment(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Segment(SegmentCmd { from, to, width, color }));
    }
}
