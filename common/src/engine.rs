//! Engine state record and the per-tick updater.
//!
//! [`EngineState`] is the only mutable state in the program. The simulator
//! owns it, calls [`EngineState::tick`] once per timer period and hands a
//! shared reference to the renderer afterwards; the two never overlap.
//!
//! # Tick Order
//!
//! 1. Advance `time_elapsed` by [`TICK_SECONDS`].
//! 2. Nudge the throttle down if the engine reached `MAX_RPM * throttle`,
//!    otherwise up; clamp to `[0, MAX_THROTTLE]`.
//! 3. `engine_speed = MAX_RPM * throttle * sin(2π * t / 60)`.
//! 4. Move the piston by `direction * 2`, turning at 200 and 10.
//! 5. Apply the coarse crank-angle phase to the flags.
//! 6. Accumulate temperature and burn fuel.
//! 7. Raise the oil-change warning at `0.8 * MAX_RPM`.
//! 8. Force Exhaust on over-rev, otherwise step the cycle state machine.
//! 9. Request a redraw.
//!
//! # Gauge Drift
//!
//! Neither gauge is bounded. Temperature only ever rises and the fuel level
//! may go negative once the fuel runs out; the simulation keeps integrating.

use core::f64::consts::TAU;

use crate::config::TICK_SECONDS;
use crate::cycle::{EngineCycle, ValveFlags, coarse_phase};
use crate::thresholds::{
    ACCELERATION,
    DECELERATION,
    FUEL_BURN_PER_RPM,
    INITIAL_FUEL_LEVEL,
    INITIAL_TEMPERATURE,
    INITIAL_THROTTLE,
    MAX_RPM,
    MAX_THROTTLE,
    OIL_CHANGE_RPM,
    PISTON_BOTTOM,
    PISTON_STEP,
    PISTON_TOP,
    SPEED_WAVE_PERIOD_SECS,
    TEMPERATURE_DIVISOR,
    TEMPERATURE_GAIN,
};

// =============================================================================
// Piston Direction
// =============================================================================

/// Direction of piston travel.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Direction {
    /// Position increases each tick (+1).
    #[default]
    Rising,
    /// Position decreases each tick (-1).
    Falling,
}

impl Direction {
    /// Signed unit step: `+1` rising, `-1` falling.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Rising => 1,
            Self::Falling => -1,
        }
    }
}

// =============================================================================
// Tick Outcome
// =============================================================================

/// What a tick changed, for the host loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickOutcome {
    /// Cycle before the tick.
    pub previous_cycle: EngineCycle,
    /// Cycle after the tick.
    pub cycle: EngineCycle,
    /// The updater asks for a repaint. Always true.
    pub redraw_requested: bool,
}

impl TickOutcome {
    /// `Some((from, to))` when the tick changed the engine cycle.
    #[inline]
    pub fn transition(&self) -> Option<(EngineCycle, EngineCycle)> {
        (self.previous_cycle != self.cycle).then_some((self.previous_cycle, self.cycle))
    }
}

// =============================================================================
// Engine State
// =============================================================================

/// Complete simulation state.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineState {
    /// Accelerator position, within `[0, MAX_THROTTLE]`.
    pub throttle: f64,
    /// RPM-like value recomputed every tick.
    pub engine_speed: f64,
    /// Vertical piston offset, within `[PISTON_BOTTOM, PISTON_TOP]`.
    pub piston_position: i32,
    pub direction: Direction,
    pub current_cycle: EngineCycle,
    pub valves: ValveFlags,
    pub oil_change_needed: bool,
    /// Degrees Celsius. Unbounded.
    pub engine_temperature: f64,
    /// Percent. Unbounded, may go negative.
    pub fuel_level: f64,
    /// Simulated seconds since start.
    pub time_elapsed: f64,
}

impl EngineState {
    /// Startup state: half throttle, piston at the bottom, intake phase.
    pub const fn new() -> Self {
        Self {
            throttle: INITIAL_THROTTLE,
            engine_speed: 0.0,
            piston_position: PISTON_BOTTOM,
            direction: Direction::Rising,
            current_cycle: EngineCycle::Intake,
            valves: ValveFlags::new(),
            oil_change_needed: false,
            engine_temperature: INITIAL_TEMPERATURE,
            fuel_level: INITIAL_FUEL_LEVEL,
            time_elapsed: 0.0,
        }
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        let previous_cycle = self.current_cycle;

        self.time_elapsed += TICK_SECONDS;
        self.throttle = next_throttle(self.throttle, self.engine_speed);
        self.engine_speed = engine_speed_for(self.throttle, self.time_elapsed);

        self.advance_piston();
        self.valves.apply_coarse_phase(coarse_phase(self.piston_position));

        self.engine_temperature += TEMPERATURE_GAIN * self.engine_speed * self.engine_speed / TEMPERATURE_DIVISOR;
        self.fuel_level -= FUEL_BURN_PER_RPM * self.engine_speed;

        let over_rev = self.engine_speed >= OIL_CHANGE_RPM;
        self.oil_change_needed = over_rev;

        if over_rev {
            // Forced exhaust leaves every flag as it is
            self.current_cycle = EngineCycle::Exhaust;
        } else {
            let (next, update) = self.current_cycle.advance(self.piston_position);
            self.valves.apply(update);
            self.current_cycle = next;
        }

        TickOutcome {
            previous_cycle,
            cycle: self.current_cycle,
            redraw_requested: true,
        }
    }

    /// Move the piston one step and turn around at the travel bounds.
    fn advance_piston(&mut self) {
        self.piston_position += self.direction.sign() * PISTON_STEP;

        if self.piston_position >= PISTON_TOP {
            self.direction = Direction::Falling;
        } else if self.piston_position <= PISTON_BOTTOM {
            self.direction = Direction::Rising;
        }
    }

    /// True once the fuel level has dropped below zero.
    #[inline]
    pub fn fuel_exhausted(&self) -> bool { self.fuel_level < 0.0 }
}

impl Default for EngineState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Pure Update Formulas
// =============================================================================

/// Throttle after one tick.
///
/// Decelerates once `engine_speed` reaches the speed the current throttle
/// targets (`MAX_RPM * throttle`), accelerates otherwise.
pub fn next_throttle(
    throttle: f64,
    engine_speed: f64,
) -> f64 {
    if engine_speed >= MAX_RPM * throttle {
        (throttle - DECELERATION).max(0.0)
    } else {
        (throttle + ACCELERATION).min(MAX_THROTTLE)
    }
}

/// `MAX_RPM * throttle * sin(2π * time_elapsed / 60)`.
pub fn engine_speed_for(
    throttle: f64,
    time_elapsed: f64,
) -> f64 {
    MAX_RPM * throttle * libm::sin(TAU * time_elapsed / SPEED_WAVE_PERIOD_SECS)
}
