use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::gear::GearCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::segment::SegmentCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Every variant except `Text` is drawn by the SDF shape renderer; `Text`
/// goes through the glyph atlas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    RoundedRect(RoundedRectCmd),
    Segment(SegmentCmd),
    Gear(GearCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, DrawCmd::Text(_))
    }
}
