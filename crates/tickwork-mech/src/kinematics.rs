//! Gear-train kinematics.
//!
//! Maps elapsed simulated seconds to the rotation of every element in the
//! train. The ratios reproduce a standard 12-hour analog movement:
//! - second wheel: one revolution per 60 s
//! - minute wheel: one revolution per 3600 s
//! - hour wheel: one revolution per 43200 s
//! - intermediate wheel: meshes with the minute wheel at 10:30, turning the
//!   opposite way
//! - escape wheel: stepped, six ticks per simulated second
//!
//! Angles are in degrees and are not normalized; the intermediate wheel is
//! negative for any non-zero minute angle.

use crate::train::PartId;

/// Length of one dial period (12 hours) in seconds.
pub const PERIOD_SECS: f64 = 12.0 * 3600.0;

/// Escapement beats per simulated second.
pub const ESCAPE_TICKS_PER_SEC: f64 = 6.0;

/// Rotation of the escape wheel per beat, in degrees.
pub const ESCAPE_DEG_PER_TICK: f64 = 360.0 / (60.0 * ESCAPE_TICKS_PER_SEC) * 10.0;

/// Teeth on the minute wheel's driving pinion and on the intermediate wheel.
const INTERMEDIATE_MESH: (f64, f64) = (10.0, 30.0);

/// Rotation of every train element at one instant.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TrainAngles {
    pub escape: f64,
    pub second: f64,
    pub minute: f64,
    pub intermediate: f64,
    pub hour: f64,
}

impl TrainAngles {
    /// Computes the train pose for `time` seconds into the dial period.
    ///
    /// Total over finite, non-negative input. Values at or beyond one period
    /// are accepted and produce the same pose as their wrapped equivalent.
    pub fn at(time: f64) -> Self {
        let within_minute = time.rem_euclid(60.0);

        let second = within_minute * 6.0;
        let minute = (time / 60.0).rem_euclid(60.0) * 6.0;
        let hour = (time / 3600.0).rem_euclid(12.0) * 30.0;

        // 10:30 is a 1:3 reduction; dividing by the ratio keeps the result
        // exactly -minute / 3.
        let intermediate = -minute / (INTERMEDIATE_MESH.1 / INTERMEDIATE_MESH.0);

        let escape = (within_minute * ESCAPE_TICKS_PER_SEC).floor() * ESCAPE_DEG_PER_TICK;

        Self { escape, second, minute, intermediate, hour }
    }

    /// Rotation of a single part.
    #[inline]
    pub fn of(&self, part: PartId) -> f64 {
        match part {
            PartId::Escape => self.escape,
            PartId::Second => self.second,
            PartId::Minute => self.minute,
            PartId::Intermediate => self.intermediate,
            PartId::Hour => self.hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn midnight_is_all_zero() {
        let a = TrainAngles::at(0.0);
        assert_eq!(a.second, 0.0);
        assert_eq!(a.minute, 0.0);
        assert_eq!(a.hour, 0.0);
        assert_eq!(a.intermediate, 0.0);
        assert_eq!(a.escape, 0.0);
    }

    #[test]
    fn half_past_twelve() {
        let a = TrainAngles::at(1800.0);
        assert!(approx(a.minute, 180.0));
        assert!(approx(a.hour, 15.0));
        assert!(approx(a.intermediate, -60.0));
        assert!(approx(a.second, 0.0));
    }

    #[test]
    fn quarter_past_three_and_ten_seconds() {
        let t = 3.0 * 3600.0 + 15.0 * 60.0 + 10.0;
        let a = TrainAngles::at(t);
        assert!(approx(a.second, 60.0));
        assert!(approx(a.minute, (15.0 + 10.0 / 60.0) * 6.0));
        assert!(approx(a.hour, (3.0 + 15.0 / 60.0 + 10.0 / 3600.0) * 30.0));
    }

    #[test]
    fn escape_steps_ten_degrees_per_beat() {
        assert_eq!(ESCAPE_DEG_PER_TICK, 10.0);
        assert_eq!(TrainAngles::at(0.10).escape, 0.0);
        assert_eq!(TrainAngles::at(0.17).escape, 10.0);
        assert_eq!(TrainAngles::at(1.0).escape, 60.0);
        assert_eq!(TrainAngles::at(59.99).escape, 359.0 * 10.0);
    }

    #[test]
    fn escape_resets_every_minute() {
        assert_eq!(TrainAngles::at(60.0).escape, 0.0);
        assert_eq!(TrainAngles::at(120.05).escape, 0.0);
    }

    #[test]
    fn of_selects_matching_field() {
        let a = TrainAngles::at(4321.5);
        assert_eq!(a.of(PartId::Escape), a.escape);
        assert_eq!(a.of(PartId::Second), a.second);
        assert_eq!(a.of(PartId::Minute), a.minute);
        assert_eq!(a.of(PartId::Intermediate), a.intermediate);
        assert_eq!(a.of(PartId::Hour), a.hour);
    }

    // ── laws ──────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn second_and_minute_stay_on_the_dial(t in 0.0f64..PERIOD_SECS) {
            let a = TrainAngles::at(t);
            prop_assert!((0.0..360.0).contains(&a.second));
            prop_assert!((0.0..360.0).contains(&a.minute));
            prop_assert!((0.0..360.0).contains(&a.hour));
        }

        #[test]
        fn second_is_six_degrees_per_second(t in 0.0f64..PERIOD_SECS) {
            let a = TrainAngles::at(t);
            prop_assert!((a.second - (t % 60.0) * 6.0).abs() < EPS);
        }

        #[test]
        fn intermediate_is_minus_a_third_of_minute(t in 0.0f64..PERIOD_SECS) {
            let a = TrainAngles::at(t);
            prop_assert_eq!(a.intermediate, -a.minute / 3.0);
        }

        #[test]
        fn minute_advances_six_degrees_per_minute(t in 0.0f64..3000.0) {
            let a = TrainAngles::at(t);
            let b = TrainAngles::at(t + 60.0);
            prop_assert!((b.minute - a.minute - 6.0).abs() < 1e-6);
        }

        #[test]
        fn hour_advances_thirty_degrees_per_hour(t in 0.0f64..(PERIOD_SECS - 3600.0)) {
            let a = TrainAngles::at(t);
            let b = TrainAngles::at(t + 3600.0);
            prop_assert!((b.hour - a.hour - 30.0).abs() < 1e-6);
        }

        #[test]
        fn escape_is_constant_within_a_beat(beat in 0u32..360, frac in 0.0f64..0.99) {
            let start = f64::from(beat) / ESCAPE_TICKS_PER_SEC;
            let inside = start + frac / ESCAPE_TICKS_PER_SEC;
            let a = TrainAngles::at(start + 1e-9);
            let b = TrainAngles::at(inside);
            prop_assert_eq!(a.escape, b.escape);
            prop_assert_eq!(a.escape, f64::from(beat) * ESCAPE_DEG_PER_TICK);
        }
    }
}
