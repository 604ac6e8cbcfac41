//! Simulation session: the engine state plus everything the host loop
//! tracks around it.
//!
//! The session is the only owner of [`EngineState`]. Ticks and repaints are
//! both methods on it and the host loop calls them one after the other, so
//! the renderer never observes a half-updated state.
//!
//! Gauge warnings are edge-triggered: the oil-change warning logs when it is
//! raised and when it clears, and a negative fuel level logs once.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use engine_common::colors::BACKGROUND;
use engine_common::render::draw_engine;
use engine_common::{EngineState, RenderState};
use log::{info, trace, warn};

pub struct Session {
    engine: EngineState,
    render_state: RenderState,

    /// Oil warning state seen on the previous tick.
    oil_warning: bool,

    /// Set once the fuel level has been reported below zero.
    fuel_warned: bool,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            engine: EngineState::new(),
            render_state: RenderState::new(),
            oil_warning: false,
            fuel_warned: false,
        }
    }

    /// Run `count` engine ticks.
    pub fn run_ticks(
        &mut self,
        count: u32,
    ) {
        for _ in 0..count {
            let outcome = self.engine.tick();

            if let Some((from, to)) = outcome.transition() {
                trace!("cycle {from} -> {to} (piston {})", self.engine.piston_position);
            }
            if outcome.redraw_requested {
                self.render_state.request_redraw();
            }

            self.watch_gauges();
        }
    }

    fn watch_gauges(&mut self) {
        let oil = self.engine.oil_change_needed;
        if oil && !self.oil_warning {
            warn!("oil change required: engine speed {:.0} rpm", self.engine.engine_speed);
        } else if !oil && self.oil_warning {
            info!("oil warning cleared: engine speed {:.0} rpm", self.engine.engine_speed);
        }
        self.oil_warning = oil;

        // The fuel level is unbounded; report the first crossing and keep simulating
        if !self.fuel_warned && self.engine.fuel_exhausted() {
            warn!(
                "fuel level below zero ({:.1}%) after {:.1}s, gauge left unclamped",
                self.engine.fuel_level, self.engine.time_elapsed
            );
            self.fuel_warned = true;
        }
    }

    /// Repaint into `display` if a redraw is pending. Returns whether it drew.
    pub fn paint<D>(
        &mut self,
        display: &mut D,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.render_state.needs_redraw() {
            return false;
        }

        display.clear(BACKGROUND).ok();
        draw_engine(display, &self.engine);
        self.render_state.end_frame();
        true
    }

    #[inline]
    pub const fn engine(&self) -> &EngineState { &self.engine }

    #[inline]
    pub const fn frames_drawn(&self) -> u64 { self.render_state.frames_drawn() }

    #[inline]
    pub const fn oil_warning_active(&self) -> bool { self.oil_warning }

    #[inline]
    pub const fn fuel_warned(&self) -> bool { self.fuel_warned }
}

impl Default for Session {
    fn default() -> Self { Self::new() }
}
