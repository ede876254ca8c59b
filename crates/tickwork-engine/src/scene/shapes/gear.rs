use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Spur gear draw payload.
///
/// `radius` is the tip radius; teeth are cut `tooth_depth()` deep. A
/// skeleton gear keeps only the rim, hub and spokes so wheels behind it stay
/// visible.
#[derive(Debug, Clone, PartialEq)]
pub struct GearCmd {
    pub center: Vec2,
    pub radius: f32,
    pub teeth: u32,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f32,
    pub fill: Color,
    pub border: Option<Border>,
    pub skeleton: bool,
}

impl GearCmd {
    /// Radial depth of a tooth for a gear of this size.
    #[inline]
    pub fn tooth_depth(&self) -> f32 {
        (self.radius * 0.1).clamp(3.0, 9.0)
    }
}

impl DrawList {
    /// Records a gear draw command.
    #[inline]
    pub fn push_gear(&mut self, z: ZIndex, gear: GearCmd) {
        self.push(z, DrawCmd::Gear(gear));
    }
}
