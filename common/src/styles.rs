//! Pre-computed static text styles.
//!
//! Text is positioned by the top-left corner of the first glyph, so every
//! label uses a top baseline. Colors vary per readout, so fonts are exposed
//! as references and callers build `MonoTextStyle::new(FONT, color)`.
//!
//! The readout font is an ISO 8859-1 variant so the degree sign renders.

use embedded_graphics::{
    mono_font::{MonoFont, iso_8859_1::FONT_9X15},
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

/// Left-aligned text anchored at its top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Temperature and fuel level readouts (9x15, Latin-1).
pub const READOUT_FONT: &MonoFont = &FONT_9X15;

/// Oil-change warning (`ProFont` 14pt, ASCII only).
pub const WARNING_FONT: &MonoFont = &PROFONT_14_POINT;
