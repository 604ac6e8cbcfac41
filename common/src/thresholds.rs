//! Centralized engine constants.
//!
//! All values are compile-time constants with validation assertions. If the
//! piston bounds or cycle thresholds are reordered incorrectly, compilation
//! fails.
//!
//! # Usage
//!
//! ```ignore
//! use engine_common::thresholds::{MAX_RPM, OIL_CHANGE_RPM};
//! ```

// =============================================================================
// Throttle & Engine Speed
// =============================================================================

/// Engine speed ceiling. `engine_speed = MAX_RPM * throttle * sin(...)`.
pub const MAX_RPM: f64 = 6000.0;

/// Upper clamp for the throttle position.
pub const MAX_THROTTLE: f64 = 1.0;

/// Throttle position at startup.
pub const INITIAL_THROTTLE: f64 = 0.5;

/// Throttle increase per tick while the engine is below its target speed.
pub const ACCELERATION: f64 = 0.005;

/// Throttle decrease per tick once the engine reaches its target speed.
pub const DECELERATION: f64 = 0.01;

/// Period (simulated seconds) of the sine wave modulating engine speed.
pub const SPEED_WAVE_PERIOD_SECS: f64 = 60.0;

const _: () = assert!(INITIAL_THROTTLE >= 0.0 && INITIAL_THROTTLE <= MAX_THROTTLE);

// =============================================================================
// Oil Change / Over-Rev
// =============================================================================

/// Fraction of `MAX_RPM` at which the oil-change warning fires and the cycle
/// is forced to Exhaust.
pub const OIL_CHANGE_RPM_RATIO: f64 = 0.8;

/// Engine speed (4800) at which the oil-change warning fires.
pub const OIL_CHANGE_RPM: f64 = MAX_RPM * OIL_CHANGE_RPM_RATIO;

// =============================================================================
// Piston Travel
// =============================================================================

/// Lowest piston position; travel turns upward here.
pub const PISTON_BOTTOM: i32 = 10;

/// Highest piston position; travel turns downward here.
pub const PISTON_TOP: i32 = 200;

/// Piston movement per tick.
pub const PISTON_STEP: i32 = 2;

/// Intake ends once the piston reaches this position.
pub const INTAKE_END: i32 = 100;

/// Compression ends once the piston reaches this position.
pub const COMPRESSION_END: i32 = 150;

const _: () = assert!(PISTON_BOTTOM < INTAKE_END);
const _: () = assert!(INTAKE_END < COMPRESSION_END);
const _: () = assert!(COMPRESSION_END < PISTON_TOP);
// Stepping from the bottom must land exactly on the top
const _: () = assert!((PISTON_TOP - PISTON_BOTTOM) % PISTON_STEP == 0);

// =============================================================================
// Crank Angle (coarse phase derivation)
// =============================================================================

/// Crank degrees covered when the piston travels from 0 to `PISTON_TOP`.
pub const CRANK_DEGREES_PER_TRAVEL: i32 = 360;

/// Crank degrees per coarse phase.
pub const CRANK_DEGREES_PER_PHASE: i32 = 180;

/// Number of coarse phases.
pub const PHASE_COUNT: i32 = 4;

// =============================================================================
// Gauges
// =============================================================================

/// Coolant temperature at startup (°C).
pub const INITIAL_TEMPERATURE: f64 = 80.0;

/// Fuel level at startup (%).
pub const INITIAL_FUEL_LEVEL: f64 = 50.0;

/// Temperature gain: `temperature += TEMPERATURE_GAIN * speed² / TEMPERATURE_DIVISOR`.
pub const TEMPERATURE_GAIN: f64 = 0.01;

/// See [`TEMPERATURE_GAIN`].
pub const TEMPERATURE_DIVISOR: f64 = 3600.0;

/// Fuel burned per tick per unit of engine speed.
pub const FUEL_BURN_PER_RPM: f64 = 0.00001;
