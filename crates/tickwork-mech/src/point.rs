use core::ops::{Add, Mul, Sub};

/// Point in the 600 × 600 dial design space (origin top-left, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector for a dial angle, where 0° points at 12 o'clock and angles
    /// grow clockwise.
    #[inline]
    pub fn from_dial_angle(deg: f64) -> Self {
        let rad = (deg - 90.0).to_radians();
        Self::new(rad.cos(), rad.sin())
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn dial_angle_zero_points_up() {
        assert!(close(Point::from_dial_angle(0.0), Point::new(0.0, -1.0)));
    }

    #[test]
    fn dial_angle_ninety_points_right() {
        assert!(close(Point::from_dial_angle(90.0), Point::new(1.0, 0.0)));
    }

    #[test]
    fn dial_angle_one_eighty_points_down() {
        assert!(close(Point::from_dial_angle(180.0), Point::new(0.0, 1.0)));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}
