use std::time::{Duration, Instant};

/// Fixed-period timer polled from the frame loop.
///
/// A started timer reports how many whole periods elapsed since the last
/// poll; the fractional remainder carries over, so polling faster or slower
/// than the period never drifts. A stopped timer reports nothing.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    /// Start of the current, not yet elapsed, period.
    anchor: Option<Instant>,
}

impl IntervalTimer {
    /// Creates a stopped timer. A zero period is bumped to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            anchor: None,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.anchor.is_some()
    }

    /// Starts counting from `now`. Restarting discards partial progress.
    pub fn start(&mut self, now: Instant) {
        self.anchor = Some(now);
    }

    pub fn stop(&mut self) {
        self.anchor = None;
    }

    /// Returns the number of whole periods elapsed since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(anchor);
        let periods = elapsed.as_nanos() / self.period.as_nanos();
        if periods == 0 {
            return 0;
        }

        let periods = u32::try_from(periods).unwrap_or(u32::MAX);
        self.anchor = Some(anchor + self.period * periods);
        periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stopped_timer_yields_nothing() {
        let mut timer = IntervalTimer::new(ms(100));
        let t0 = Instant::now();
        assert!(!timer.is_running());
        assert_eq!(timer.poll(t0 + ms(1000)), 0);

        timer.start(t0);
        timer.stop();
        assert_eq!(timer.poll(t0 + ms(1000)), 0);
    }

    #[test]
    fn counts_whole_periods_and_carries_the_rest() {
        let mut timer = IntervalTimer::new(ms(100));
        let t0 = Instant::now();
        timer.start(t0);

        assert_eq!(timer.poll(t0 + ms(50)), 0);
        assert_eq!(timer.poll(t0 + ms(150)), 1);
        // 50 ms carried over from the previous poll.
        assert_eq!(timer.poll(t0 + ms(210)), 1);
        assert_eq!(timer.poll(t0 + ms(730)), 5);
    }

    #[test]
    fn restart_discards_partial_progress() {
        let mut timer = IntervalTimer::new(ms(100));
        let t0 = Instant::now();
        timer.start(t0);
        timer.start(t0 + ms(90));
        assert_eq!(timer.poll(t0 + ms(150)), 0);
        assert_eq!(timer.poll(t0 + ms(190)), 1);
    }

    #[test]
    fn zero_period_is_bumped() {
        assert_eq!(IntervalTimer::new(Duration::ZERO).period(), ms(1));
    }

    #[test]
    fn time_going_backwards_is_ignored() {
        let mut timer = IntervalTimer::new(ms(100));
        let t0 = Instant::now() + ms(500);
        timer.start(t0);
        assert_eq!(timer.poll(t0 - ms(200)), 0);
    }
}
