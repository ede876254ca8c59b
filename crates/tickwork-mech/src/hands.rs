//! Clock-hand geometry.
//!
//! Hands share the dial center and take their angle straight from the wheel
//! that drives them.

use crate::kinematics::TrainAngles;
use crate::point::Point;
use crate::train::{PartId, Rgb8, DIAL_CENTER};

/// One hand: which wheel drives it and how it is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSpec {
    pub driver: PartId,
    pub length: f64,
    pub width: f64,
    pub color: Rgb8,
}

impl HandSpec {
    /// Tip of the hand for the given train pose.
    #[inline]
    pub fn tip(&self, angles: &TrainAngles) -> Point {
        hand_tip(DIAL_CENTER, angles.of(self.driver), self.length)
    }
}

/// Hands in paint order.
pub const HANDS: [HandSpec; 3] = [
    HandSpec { driver: PartId::Hour, length: 110.0, width: 16.0, color: Rgb8::hex(0x3E2723) },
    HandSpec { driver: PartId::Minute, length: 170.0, width: 10.0, color: Rgb8::hex(0x5D4037) },
    HandSpec { driver: PartId::Second, length: 210.0, width: 3.0, color: Rgb8::hex(0xEF4444) },
];

/// Center cap drawn over the hands: `(radius, color)` from outer to inner.
pub const HUB: [(f64, Rgb8); 2] = [(14.0, Rgb8::hex(0x3E2723)), (6.0, Rgb8::hex(0x8D6E63))];

/// Polar-to-Cartesian placement with 0° at 12 o'clock.
#[inline]
pub fn hand_tip(center: Point, angle_deg: f64, length: f64) -> Point {
    center + Point::from_dial_angle(angle_deg) * length
}
