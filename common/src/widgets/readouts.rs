//! Gauge readout formatting.
//!
//! Readouts are formatted into `heapless::String` with `core::fmt::Write`,
//! one decimal place. The gauges are unbounded, so a value too long for the
//! buffer is truncated rather than treated as an error.

use core::fmt::Write;

use heapless::String;

/// Capacity of a readout string in bytes.
pub const READOUT_LEN: usize = 48;

/// A formatted gauge line.
pub type Readout = String<READOUT_LEN>;

/// Text of the oil-change warning.
pub const OIL_WARNING_TEXT: &str = "Oil change required";

/// `Temperature: 80.0°C`
pub fn format_temperature(celsius: f64) -> Readout {
    let mut s = Readout::new();
    write!(s, "Temperature: {celsius:.1}\u{b0}C").ok();
    s
}

/// `Fuel: 50.0%`
pub fn format_fuel_level(percent: f64) -> Readout {
    let mut s = Readout::new();
    write!(s, "Fuel: {percent:.1}%").ok();
    s
}
