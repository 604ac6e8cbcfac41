//! Fixed-timestep tick scheduling.
//!
//! The updater runs at a fixed period regardless of how long a repaint takes.
//! [`TickClock`] accumulates wall-clock time and converts it into a whole
//! number of due ticks; leftover time carries into the next call.
//!
//! These constants use `std::time::Duration`, so they live here rather than
//! in the `no_std` common crate.

use std::time::{Duration, Instant};

use engine_common::config::TICK_RATE_HZ;

/// Wall-clock period between ticks (16 ms, integer milliseconds per tick).
pub const TICK_PERIOD: Duration = Duration::from_millis(1000 / TICK_RATE_HZ as u64);

/// Most ticks run in one loop iteration. Older backlog is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Due ticks for one loop iteration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DueTicks {
    /// Ticks to run now.
    pub run: u32,
    /// Ticks discarded because the backlog exceeded `MAX_CATCH_UP_TICKS`.
    pub dropped: u32,
}

/// Fixed-timestep accumulator.
pub struct TickClock {
    period: Duration,
    last: Instant,
    accumulator: Duration,
}

impl TickClock {
    /// Start a clock at `now`. The first tick is due immediately.
    pub const fn new(
        period: Duration,
        now: Instant,
    ) -> Self {
        Self {
            period,
            last: now,
            accumulator: period,
        }
    }

    /// Collect the ticks that became due since the previous call.
    pub fn due(
        &mut self,
        now: Instant,
    ) -> DueTicks {
        self.accumulator += now.saturating_duration_since(self.last);
        self.last = now;

        let mut due = DueTicks::default();
        while self.accumulator >= self.period {
            self.accumulator -= self.period;
            if due.run < MAX_CATCH_UP_TICKS {
                due.run += 1;
            } else {
                due.dropped += 1;
            }
        }
        due
    }

    /// Time left until the next tick is due, measured from `now`.
    pub fn until_next(
        &self,
        now: Instant,
    ) -> Duration {
        let pending = self.accumulator + now.saturating_duration_since(self.last);
        self.period.saturating_sub(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(16);

    #[test]
    fn test_tick_period_matches_timer() {
        assert_eq!(TICK_PERIOD, Duration::from_millis(16));
    }

    #[test]
    fn test_first_tick_due_immediately() {
        let start = Instant::now();
        let mut clock = TickClock::new(PERIOD, start);
        assert_eq!(clock.due(start), DueTicks { run: 1, dropped: 0 });
        assert_eq!(clock.due(start).run, 0, "Nothing further is due at the same instant");
    }

    #[test]
    fn test_leftover_time_carries_over() {
        let start = Instant::now();
        let mut clock = TickClock::new(PERIOD, start);
        clock.due(start);

        assert_eq!(clock.due(start + Duration::from_millis(10)).run, 0);
        assert_eq!(clock.due(start + Duration::from_millis(20)).run, 1, "10 + 10 ms crosses one period");
        assert_eq!(clock.due(start + Duration::from_millis(33)).run, 1, "4 ms left over + 13 ms");
    }

    #[test]
    fn test_backlog_capped() {
        let start = Instant::now();
        let mut clock = TickClock::new(PERIOD, start);
        clock.due(start);

        let due = clock.due(start + PERIOD * 8);
        assert_eq!(due.run, MAX_CATCH_UP_TICKS);
        assert_eq!(due.dropped, 8 - MAX_CATCH_UP_TICKS);
        assert_eq!(clock.due(start + PERIOD * 8).run, 0, "Dropped ticks are not replayed");
    }

    #[test]
    fn test_until_next() {
        let start = Instant::now();
        let mut clock = TickClock::new(PERIOD, start);
        assert_eq!(clock.until_next(start), Duration::ZERO);

        clock.due(start);
        assert_eq!(clock.until_next(start), PERIOD);
        assert_eq!(clock.until_next(start + Duration::from_millis(6)), Duration::from_millis(10));
        assert_eq!(clock.until_next(start + Duration::from_millis(40)), Duration::ZERO);
    }
}
