use crate::kinematics::{TrainAngles, PERIOD_SECS};
use crate::wall::WallClock;

/// Slowest selectable playback multiplier.
pub const MIN_SPEED: u32 = 1;

/// Fastest selectable playback multiplier.
pub const MAX_SPEED: u32 = 100;

/// Simulated clock: where the train is, whether it moves, and how fast.
///
/// Invariant: `time` is always in `[0, PERIOD_SECS)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockState {
    time: f64,
    paused: bool,
    speed: u32,
}

impl ClockState {
    /// Running clock at 1× starting from `time` (wrapped onto the dial).
    pub fn new(time: f64) -> Self {
        Self { time: wrap_period(time), paused: false, speed: MIN_SPEED }
    }

    /// Running clock at 1× showing the wall clock's current reading.
    pub fn from_wall(wall: &dyn WallClock) -> Self {
        Self::new(wall.seconds_into_period())
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Train pose for the current time.
    #[inline]
    pub fn angles(&self) -> TrainAngles {
        TrainAngles::at(self.time)
    }

    /// Advances by one timer period scaled by the speed multiplier.
    ///
    /// No-op while paused.
    pub fn tick(&mut self, period_secs: f64) {
        if self.paused {
            return;
        }
        self.time = wrap_period(self.time + period_secs * f64::from(self.speed));
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Sets the multiplier, clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Jumps to `now` (seconds into the period), resets to 1× and resumes.
    pub fn sync(&mut self, now: f64) {
        self.time = wrap_period(now);
        self.speed = MIN_SPEED;
        self.paused = false;
    }
}

/// Reduces `t` onto the dial period, never yielding a negative value or the
/// period itself.
#[inline]
pub fn wrap_period(t: f64) -> f64 {
    let w = t.rem_euclid(PERIOD_SECS);
    // rem_euclid can round up to the divisor for tiny negative inputs.
    if w >= PERIOD_SECS { 0.0 } else { w }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::wall::FixedWallClock;

    // ── advancing ─────────────────────────────────────────────────────────

    #[test]
    fn tick_advances_by_period_times_speed() {
        let mut c = ClockState::new(0.0);
        c.set_speed(10);
        c.tick(0.1);
        assert!((c.time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tick_at_unit_speed() {
        let mut c = ClockState::new(10.0);
        c.tick(0.1);
        assert!((c.time() - 10.1).abs() < 1e-9);
    }

    #[test]
    fn tick_wraps_at_end_of_period() {
        let mut c = ClockState::new(43199.9);
        c.tick(0.1);
        assert!(c.time() < 1e-6, "time was {}", c.time());
    }

    #[test]
    fn paused_ticks_leave_time_unchanged() {
        let mut c = ClockState::new(1234.5);
        c.set_paused(true);
        for _ in 0..50 {
            c.tick(0.1);
        }
        assert_eq!(c.time(), 1234.5);
    }

    #[test]
    fn pause_keeps_pose() {
        let mut c = ClockState::new(1800.0);
        let before = c.angles();
        c.toggle_paused();
        assert!(c.is_paused());
        assert_eq!(c.angles(), before);
    }

    // ── controls ──────────────────────────────────────────────────────────

    #[test]
    fn speed_is_clamped() {
        let mut c = ClockState::new(0.0);
        c.set_speed(0);
        assert_eq!(c.speed(), MIN_SPEED);
        c.set_speed(1000);
        assert_eq!(c.speed(), MAX_SPEED);
        c.set_speed(42);
        assert_eq!(c.speed(), 42);
    }

    #[test]
    fn sync_resets_speed_and_resumes() {
        let mut c = ClockState::new(0.0);
        c.set_speed(50);
        c.set_paused(true);
        c.sync(3600.0);
        assert_eq!(c.time(), 3600.0);
        assert_eq!(c.speed(), 1);
        assert!(!c.is_paused());
    }

    #[test]
    fn from_wall_reads_the_wall_clock() {
        let c = ClockState::from_wall(&FixedWallClock(7200.25));
        assert_eq!(c.time(), 7200.25);
        assert!(!c.is_paused());
        assert_eq!(c.speed(), 1);
    }

    #[test]
    fn new_wraps_out_of_range_input() {
        assert_eq!(ClockState::new(PERIOD_SECS + 5.0).time(), 5.0);
        assert_eq!(ClockState::new(-60.0).time(), PERIOD_SECS - 60.0);
    }

    #[test]
    fn wrap_never_returns_the_period() {
        let w = wrap_period(-1e-20);
        assert!((0.0..PERIOD_SECS).contains(&w));
    }

    // ── laws ──────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn time_stays_in_range(start in 0.0f64..PERIOD_SECS, speed in 1u32..=100, ticks in 0usize..500) {
            let mut c = ClockState::new(start);
            c.set_speed(speed);
            for _ in 0..ticks {
                c.tick(0.1);
                prop_assert!((0.0..PERIOD_SECS).contains(&c.time()));
            }
        }

        #[test]
        fn paused_clock_is_frozen(start in 0.0f64..PERIOD_SECS, ticks in 1usize..100) {
            let mut c = ClockState::new(start);
            c.set_paused(true);
            for _ in 0..ticks {
                c.tick(0.1);
            }
            prop_assert_eq!(c.time(), wrap_period(start));
        }
    }
}
