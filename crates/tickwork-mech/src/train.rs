//! Static description of the gear train.
//!
//! Positions and radii live in the 600 × 600 dial design space. [`TRAIN`] is
//! stored in paint order (back to front); hit-testing walks it in reverse so
//! the topmost wheel under the pointer wins.

use crate::point::Point;

/// Side length of the square dial design space.
pub const DESIGN_SIZE: f64 = 600.0;

/// Center arbor shared by the hour, minute and second wheels.
pub const DIAL_CENTER: Point = Point::new(300.0, 300.0);

/// Identifier of one element of the train.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PartId {
    Escape,
    Second,
    Minute,
    Intermediate,
    Hour,
}

impl PartId {
    /// Stable lowercase key, used in logs and on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            PartId::Escape => "escape",
            PartId::Second => "second",
            PartId::Minute => "minute",
            PartId::Intermediate => "intermediate",
            PartId::Hour => "hour",
        }
    }

    /// Catalog entry for this part.
    pub fn spec(self) -> &'static GearSpec {
        // Every variant has exactly one catalog row; see `catalog_covers_every_part`.
        TRAIN
            .iter()
            .find(|g| g.id == self)
            .unwrap_or(&TRAIN[0])
    }
}

/// Straight 8-bit sRGB color.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Builds a color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xFF) as u8,
            g: ((v >> 8) & 0xFF) as u8,
            b: (v & 0xFF) as u8,
        }
    }
}

/// Metal palette used by the wheels.
pub mod palette {
    use super::Rgb8;

    pub const BRASS: Rgb8 = Rgb8::hex(0xD4AF37);
    pub const COPPER: Rgb8 = Rgb8::hex(0xB87333);
    pub const STEEL: Rgb8 = Rgb8::hex(0xA9A9A9);
    pub const GOLD: Rgb8 = Rgb8::hex(0xFFD700);
    pub const DARK_STEEL: Rgb8 = Rgb8::hex(0x4B5563);
}

/// One wheel of the train plus the text shown when it is inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct GearSpec {
    pub id: PartId,
    pub center: Point,
    pub radius: f64,
    pub teeth: u32,
    pub color: Rgb8,
    /// Skeletonized wheels are drawn with spokes so the wheels below show through.
    pub skeleton: bool,
    pub label: &'static str,
    pub description: &'static str,
}

impl GearSpec {
    /// Returns `true` if `p` lies on the wheel's disc (teeth included).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}

/// The train in paint order.
pub static TRAIN: [GearSpec; 5] = [
    GearSpec {
        id: PartId::Escape,
        center: Point::new(300.0, 100.0),
        radius: 30.0,
        teeth: 12,
        color: palette::STEEL,
        skeleton: false,
        label: "Rhythm Keeper",
        description: "[Escape Wheel] The heartbeat of the clock! It spins fast, catching and \
                      releasing in a steady rhythm. That makes the tick-tock sound and sets \
                      the pace for every other wheel.",
    },
    GearSpec {
        id: PartId::Intermediate,
        center: Point::new(395.0, 395.0),
        radius: 55.0,
        teeth: 24,
        color: palette::BRASS,
        skeleton: false,
        label: "Bridge Wheel",
        description: "[Bridge Wheel] The mechanical translator. It links the minute wheel to \
                      the hour wheel and carries out the precise 1:12 slow-down.",
    },
    GearSpec {
        id: PartId::Hour,
        center: DIAL_CENTER,
        radius: 120.0,
        teeth: 48,
        color: palette::DARK_STEEL,
        skeleton: true,
        label: "Hour Wheel",
        description: "[Hour Wheel] The biggest wheel on the outside and the slowest of all. \
                      With help from the bridge wheel it turns just once every 12 hours.",
    },
    GearSpec {
        id: PartId::Minute,
        center: DIAL_CENTER,
        radius: 75.0,
        teeth: 32,
        color: palette::COPPER,
        skeleton: true,
        label: "Minute Wheel",
        description: "[Minute Wheel] Sits in the middle layer and carries the minute hand. It \
                      turns the second wheel's quick rhythm into steady minute steps.",
    },
    GearSpec {
        id: PartId::Second,
        center: DIAL_CENTER,
        radius: 45.0,
        teeth: 18,
        color: palette::GOLD,
        skeleton: false,
        label: "Second Wheel",
        description: "[Second Wheel] Sits at the bottom of the center arbor and turns the \
                      fastest, driving the red second hand directly. It is the first stop \
                      for the power!",
    },
];

/// Order of the part chips under the dial.
pub const CHIP_ORDER: [PartId; 5] = [
    PartId::Escape,
    PartId::Minute,
    PartId::Second,
    PartId::Hour,
    PartId::Intermediate,
];

/// Returns the topmost wheel whose disc contains `p`.
pub fn hit_test(p: Point) -> Option<PartId> {
    TRAIN.iter().rev().find(|g| g.contains(p)).map(|g| g.id)
}
