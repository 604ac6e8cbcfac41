//! Drawing widgets for the engine view.
//!
//! - [`primitives`]: filled rectangle, rounded rectangle, ellipse and label
//! - [`readouts`]: gauge text formatting into stack-allocated strings
//!
//! All primitives are generic over `DrawTarget<Color = Rgb565>`, so the same
//! code draws into the desktop simulator and into in-memory test targets.

mod primitives;
mod readouts;

pub use primitives::{fill_ellipse, fill_rect, fill_rounded_rect, draw_label};
pub use readouts::{OIL_WARNING_TEXT, READOUT_LEN, Readout, format_fuel_level, format_temperature};
