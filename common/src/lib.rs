//! Four-stroke engine cycle simulation.
//!
//! This crate contains the platform-agnostic half of the engine visualization:
//!
//! - [`engine`]: the single simulation state record and its per-tick update
//! - [`cycle`]: the Intake → Compression → Ignition → Exhaust state machine
//! - [`render`]: frame composition and drawing onto any `DrawTarget`
//! - [`colors`]: RGB565 palette
//! - [`config`]: window size, tick rate and fixed layout coordinates
//! - [`thresholds`]: engine constants
//! - [`styles`]: pre-computed text styles
//! - [`widgets`]: drawing primitives and readout formatting
//!
//! # no_std Compatibility
//!
//! The crate is `no_std`; trigonometry comes from `libm`. Window creation,
//! timing and logging live in the simulator binary.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[cfg(test)]
extern crate std;

pub mod colors;
pub mod config;
pub mod cycle;
pub mod engine;
pub mod render;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use cycle::EngineCycle;
pub use engine::{EngineState, TickOutcome};
pub use render::{Frame, RenderState};
