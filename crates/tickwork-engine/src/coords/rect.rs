use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size / 2.0, size)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks every side by `d` (grows for negative `d`). Never goes below
    /// zero size.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            (self.size.x - 2.0 * d).max(0.0),
            (self.size.y - 2.0 * d).max(0.0),
        )
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_extent() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(-1.0, 5.0)));
    }

    // ── derived rects ─────────────────────────────────────────────────────

    #[test]
    fn from_center_round_trips_center() {
        let rect = Rect::from_center(Vec2::new(50.0, 40.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect, r(40.0, 35.0, 20.0, 10.0));
        assert_eq!(rect.center(), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn inset_shrinks_and_clamps() {
        assert_eq!(r(0.0, 0.0, 100.0, 50.0).inset(10.0), r(10.0, 10.0, 80.0, 30.0));
        assert!(r(0.0, 0.0, 10.0, 10.0).inset(20.0).is_empty());
        assert_eq!(r(10.0, 10.0, 10.0, 10.0).inset(-5.0), r(5.0, 5.0, 20.0, 20.0));
    }
}
