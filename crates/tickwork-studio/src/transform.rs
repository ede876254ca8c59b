use tickwork_engine::coords::{Rect, Vec2};
use tickwork_mech::train::DESIGN_SIZE;
use tickwork_mech::Point;

/// Maps the catalog's square design space onto a screen rectangle.
///
/// The design square is scaled uniformly to fit `rect` and centered in it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialTransform {
    origin: Vec2,
    scale: f32,
}

impl DialTransform {
    pub fn fit(rect: Rect) -> Self {
        let side = rect.size.x.min(rect.size.y).max(0.0);
        let scale = side / DESIGN_SIZE as f32;
        let origin = Vec2::new(
            rect.origin.x + (rect.size.x - side) * 0.5,
            rect.origin.y + (rect.size.y - side) * 0.5,
        );
        Self { origin, scale }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn to_screen(&self, p: Point) -> Vec2 {
        Vec2::new(
            self.origin.x + p.x as f32 * self.scale,
            self.origin.y + p.y as f32 * self.scale,
        )
    }

    /// Design-space lengths (radii, stroke widths) in screen pixels.
    #[inline]
    pub fn len(&self, v: f64) -> f32 {
        v as f32 * self.scale
    }

    /// Inverse of [`to_screen`](Self::to_screen). `None` for a collapsed dial.
    pub fn to_design(&self, v: Vec2) -> Option<Point> {
        if self.scale <= 0.0 {
            return None;
        }
        Some(Point::new(
            f64::from((v.x - self.origin.x) / self.scale),
            f64::from((v.y - self.origin.y) / self.scale),
        ))
    }
}
