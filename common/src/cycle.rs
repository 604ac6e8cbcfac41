//! The four-stroke cycle state machine.
//!
//! Two derivations write the valve flags each tick:
//!
//! 1. [`coarse_phase`] maps the piston position to a crank-angle phase and
//!    [`ValveFlags::apply_coarse_phase`] sets flags from it.
//! 2. [`EngineCycle::advance`] runs the explicit state machine, whose
//!    [`FlagUpdate`] is applied afterwards and wins wherever it writes a flag.
//!
//! The state machine never writes the spark flag and leaves the intake flag
//! alone in the Ignition and Exhaust states, so the coarse derivation still
//! decides those.
//!
//! | State | Stay condition | Flags while staying | Exit | Flags on exit | Next |
//! |-------|----------------|---------------------|------|---------------|------|
//! | Intake | piston < 100 | intake open, exhaust closed, ignition off | piston >= 100 | all closed/off | Compression |
//! | Compression | piston < 150 | all closed/off | piston >= 150 | ignition on | Ignition |
//! | Ignition | never | - | always | exhaust open, ignition on | Exhaust |
//! | Exhaust | never | - | always | exhaust closed, ignition off | Intake |

use core::fmt;

use crate::thresholds::{
    COMPRESSION_END,
    CRANK_DEGREES_PER_PHASE,
    CRANK_DEGREES_PER_TRAVEL,
    INTAKE_END,
    PHASE_COUNT,
    PISTON_TOP,
};

// =============================================================================
// Engine Cycle
// =============================================================================

/// Engine phase.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum EngineCycle {
    /// Intake valve open, mixture drawn in.
    #[default]
    Intake,
    /// All valves closed, mixture compressed.
    Compression,
    /// Mixture ignited. Lasts a single tick.
    Ignition,
    /// Exhaust valve open. Lasts a single tick unless forced by over-rev.
    Exhaust,
}

impl EngineCycle {
    /// Run one step of the state machine.
    ///
    /// Returns the next state and the flags written by this step. Flags set
    /// to `None` in the returned update are left untouched.
    pub const fn advance(
        self,
        piston_position: i32,
    ) -> (Self, FlagUpdate) {
        match self {
            Self::Intake if piston_position < INTAKE_END => (
                Self::Intake,
                FlagUpdate::all(true, false, false),
            ),
            Self::Intake => (Self::Compression, FlagUpdate::all(false, false, false)),
            Self::Compression if piston_position < COMPRESSION_END => (
                Self::Compression,
                FlagUpdate::all(false, false, false),
            ),
            Self::Compression => (Self::Ignition, FlagUpdate::all(false, false, true)),
            Self::Ignition => (
                Self::Exhaust,
                FlagUpdate {
                    intake_valve_open: None,
                    exhaust_valve_open: Some(true),
                    ignition: Some(true),
                },
            ),
            Self::Exhaust => (
                Self::Intake,
                FlagUpdate {
                    intake_valve_open: None,
                    exhaust_valve_open: Some(false),
                    ignition: Some(false),
                },
            ),
        }
    }

    /// Short upper-case label, used in log output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intake => "INTAKE",
            Self::Compression => "COMPRESSION",
            Self::Ignition => "IGNITION",
            Self::Exhaust => "EXHAUST",
        }
    }
}

impl fmt::Display for EngineCycle {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Valve Flags
// =============================================================================

/// Partial write of the valve/ignition flags produced by one state-machine step.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct FlagUpdate {
    pub intake_valve_open: Option<bool>,
    pub exhaust_valve_open: Option<bool>,
    pub ignition: Option<bool>,
}

impl FlagUpdate {
    const fn all(
        intake_valve_open: bool,
        exhaust_valve_open: bool,
        ignition: bool,
    ) -> Self {
        Self {
            intake_valve_open: Some(intake_valve_open),
            exhaust_valve_open: Some(exhaust_valve_open),
            ignition: Some(ignition),
        }
    }
}

/// Valve, spark and ignition flags shown by the renderer.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ValveFlags {
    pub intake_valve_open: bool,
    pub exhaust_valve_open: bool,
    /// Drives the spark indicator. Written only by the coarse phase derivation.
    pub spark_plugged: bool,
    pub ignition: bool,
}

impl ValveFlags {
    /// Startup flags: both valves drawn open, no spark, no ignition.
    pub const fn new() -> Self {
        Self {
            intake_valve_open: true,
            exhaust_valve_open: true,
            spark_plugged: false,
            ignition: false,
        }
    }

    /// Apply the flags written by a state-machine step.
    pub fn apply(
        &mut self,
        update: FlagUpdate,
    ) {
        if let Some(open) = update.intake_valve_open {
            self.intake_valve_open = open;
        }
        if let Some(open) = update.exhaust_valve_open {
            self.exhaust_valve_open = open;
        }
        if let Some(on) = update.ignition {
            self.ignition = on;
        }
    }

    /// Apply the coarse crank-angle phase (see [`coarse_phase`]).
    ///
    /// - 0: intake valve opens
    /// - 1: intake valve closes
    /// - 2: spark on
    /// - 3: spark off, exhaust valve opens
    pub const fn apply_coarse_phase(
        &mut self,
        phase: i32,
    ) {
        match phase {
            0 => self.intake_valve_open = true,
            1 => self.intake_valve_open = false,
            2 => self.spark_plugged = true,
            _ => {
                self.spark_plugged = false;
                self.exhaust_valve_open = true;
            }
        }
    }
}

impl Default for ValveFlags {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Coarse Phase
// =============================================================================

/// Crank angle in whole degrees, truncated: `360 * piston / 200`.
#[inline]
pub const fn crank_angle(piston_position: i32) -> i32 { CRANK_DEGREES_PER_TRAVEL * piston_position / PISTON_TOP }

/// Coarse phase index in `0..4`: `(crank_angle / 180) mod 4`.
///
/// Within the piston's travel range (10..=200) this yields 0 below 100,
/// 1 from 100 up to 199 and 2 only at the top; phase 3 is unreachable.
#[inline]
pub const fn coarse_phase(piston_position: i32) -> i32 {
    (crank_angle(piston_position) / CRANK_DEGREES_PER_PHASE).rem_euclid(PHASE_COUNT)
}
