//! Four-stroke engine simulator for desktop platforms.
//!
//! Opens a fixed-size window through embedded-graphics-simulator and runs a
//! single-threaded loop:
//!
//! 1. Collect the ticks due since the last iteration ([`TickClock`]).
//! 2. Run them against the engine state.
//! 3. Repaint once if any tick requested it, then present the framebuffer.
//! 4. Handle window events (close only).
//! 5. Sleep until the next tick is due.
//!
//! Updates and repaints run on the same thread in sequence, so no lock guards
//! the engine state.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for per-second
//! frame statistics or `RUST_LOG=trace` for every cycle transition.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod profiling;
mod session;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use engine_common::colors::BACKGROUND;
use engine_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE_HZ, WINDOW_TITLE};
use log::{debug, info, warn};

use crate::profiling::FrameStats;
use crate::session::Session;
use crate::timing::{TICK_PERIOD, TickClock};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(BACKGROUND).ok();
    window.update(&display);

    info!(
        "{}: {}x{}, {} Hz tick ({}ms)",
        WINDOW_TITLE,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        TICK_RATE_HZ,
        TICK_PERIOD.as_millis()
    );

    let mut session = Session::new();
    let start = Instant::now();
    let mut clock = TickClock::new(TICK_PERIOD, start);
    let mut stats = FrameStats::new(start);

    'running: loop {
        let due = clock.due(Instant::now());
        if due.dropped > 0 {
            warn!("tick backlog: dropped {} ticks", due.dropped);
            stats.record_dropped(due.dropped);
        }
        session.run_ticks(due.run);
        stats.record_ticks(due.run);

        let render_start = Instant::now();
        if session.paint(&mut display) {
            window.update(&display);
            stats.record_frame(render_start.elapsed());
        }

        for event in window.events() {
            if matches!(event, SimulatorEvent::Quit) {
                break 'running;
            }
        }

        if let Some(report) = stats.take_report(Instant::now()) {
            debug!("{report}");
        }

        let wait = clock.until_next(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }

    let engine = session.engine();
    info!(
        "stopped after {:.1}s: {} ticks, {} frames, {} dropped ticks (temperature {:.1}, fuel {:.1})",
        start.elapsed().as_secs_f64(),
        stats.total_ticks,
        stats.total_frames,
        stats.total_dropped_ticks,
        engine.engine_temperature,
        engine.fuel_level
    );
    debug!("frames drawn by session: {}", session.frames_drawn());
}
