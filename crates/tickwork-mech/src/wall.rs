use chrono::Timelike;

/// Source of "real" time for syncing the simulated clock.
pub trait WallClock {
    /// Seconds elapsed since the start of the current 12-hour period.
    fn seconds_into_period(&self) -> f64;
}

/// Reads the local wall clock through `chrono`.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalWallClock;

impl WallClock for LocalWallClock {
    fn seconds_into_period(&self) -> f64 {
        seconds_into_period(&chrono::Local::now())
    }
}

/// Wall clock pinned to a fixed reading, for tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedWallClock(pub f64);

impl WallClock for FixedWallClock {
    fn seconds_into_period(&self) -> f64 {
        self.0
    }
}

/// Converts a time of day into seconds since the last 12 o'clock.
pub fn seconds_into_period<T: Timelike>(t: &T) -> f64 {
    // chrono encodes a leap second as nanosecond >= 1e9; fold it into the last second.
    let nanos = t.nanosecond().min(999_999_999);
    f64::from(t.hour() % 12) * 3600.0
        + f64::from(t.minute()) * 60.0
        + f64::from(t.second())
        + f64::from(nanos) / 1e9
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, ms).expect("valid time")
    }

    #[test]
    fn afternoon_folds_onto_the_dial() {
        assert_eq!(seconds_into_period(&at(15, 0, 0, 0)), 3.0 * 3600.0);
        assert_eq!(seconds_into_period(&at(3, 0, 0, 0)), 3.0 * 3600.0);
    }

    #[test]
    fn noon_and_midnight_are_zero() {
        assert_eq!(seconds_into_period(&at(0, 0, 0, 0)), 0.0);
        assert_eq!(seconds_into_period(&at(12, 0, 0, 0)), 0.0);
    }

    #[test]
    fn includes_fractional_seconds() {
        let s = seconds_into_period(&at(1, 2, 3, 500));
        assert!((s - (3600.0 + 120.0 + 3.5)).abs() < 1e-9);
    }

    #[test]
    fn last_instant_stays_inside_the_period() {
        let s = seconds_into_period(&at(23, 59, 59, 999));
        assert!(s < crate::kinematics::PERIOD_SECS);
    }

    #[test]
    fn local_clock_reading_is_on_the_dial() {
        let s = LocalWallClock.seconds_into_period();
        assert!((0.0..crate::kinematics::PERIOD_SECS).contains(&s));
    }
}
