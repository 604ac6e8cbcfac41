//! Frame and tick statistics.
//!
//! Counters accumulate over a reporting window; [`FrameStats::take_report`]
//! hands out a [`StatsReport`] once per [`REPORT_INTERVAL`] and starts a new
//! window. Lifetime totals are kept for the shutdown summary.

use std::fmt;
use std::time::{Duration, Instant};

/// Length of one reporting window.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Summary of one reporting window.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatsReport {
    pub ticks: u32,
    pub frames: u32,
    pub dropped_ticks: u32,
    pub render_avg_us: u32,
    pub render_max_us: u32,
}

impl fmt::Display for StatsReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} ticks, {} frames, {} dropped, render avg {}us max {}us",
            self.ticks, self.frames, self.dropped_ticks, self.render_avg_us, self.render_max_us
        )
    }
}

/// Rolling frame statistics.
pub struct FrameStats {
    window_start: Instant,

    // Current window
    ticks: u32,
    frames: u32,
    dropped_ticks: u32,
    render_total: Duration,
    render_max: Duration,

    // Lifetime totals
    pub total_ticks: u64,
    pub total_frames: u64,
    pub total_dropped_ticks: u64,
}

impl FrameStats {
    pub const fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            ticks: 0,
            frames: 0,
            dropped_ticks: 0,
            render_total: Duration::ZERO,
            render_max: Duration::ZERO,
            total_ticks: 0,
            total_frames: 0,
            total_dropped_ticks: 0,
        }
    }

    #[inline]
    pub fn record_ticks(
        &mut self,
        n: u32,
    ) {
        self.ticks += n;
        self.total_ticks += u64::from(n);
    }

    #[inline]
    pub fn record_dropped(
        &mut self,
        n: u32,
    ) {
        self.dropped_ticks += n;
        self.total_dropped_ticks += u64::from(n);
    }

    /// Record one presented frame and the time spent drawing it.
    pub fn record_frame(
        &mut self,
        render_time: Duration,
    ) {
        self.frames += 1;
        self.total_frames += 1;
        self.render_total += render_time;
        self.render_max = self.render_max.max(render_time);
    }

    /// Close the current window if it has lasted `REPORT_INTERVAL`.
    pub fn take_report(
        &mut self,
        now: Instant,
    ) -> Option<StatsReport> {
        if now.saturating_duration_since(self.window_start) < REPORT_INTERVAL {
            return None;
        }

        let render_avg = if self.frames == 0 {
            Duration::ZERO
        } else {
            self.render_total / self.frames
        };
        let report = StatsReport {
            ticks: self.ticks,
            frames: self.frames,
            dropped_ticks: self.dropped_ticks,
            render_avg_us: render_avg.as_micros() as u32,
            render_max_us: self.render_max.as_micros() as u32,
        };

        self.window_start = now;
        self.ticks = 0;
        self.frames = 0;
        self.dropped_ticks = 0;
        self.render_total = Duration::ZERO;
        self.render_max = Duration::ZERO;

        Some(report)
    }
}
