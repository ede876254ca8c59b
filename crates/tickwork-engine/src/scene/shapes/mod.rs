pub(crate) mod circle;
pub(crate) mod gear;
pub(crate) mod rounded_rect;
pub(crate) mod segment;
pub(crate) mod text;

pub use circle::CircleCmd;
pub use gear::GearCmd;
pub use rounded_rect::RoundedRectCmd;
pub use segment::SegmentCmd;
pub use text::TextCmd;

use crate::paint::Color;

/// Stroke drawn along the inner side of a shape's outer edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
