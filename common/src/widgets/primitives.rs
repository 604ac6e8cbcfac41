//! Low-level drawing primitives.
//!
//! # Rounded Rectangle
//!
//! A rounded rectangle is four quarter-circle arcs of the corner radius, one
//! per corner, joined by straight edges into one closed outline and filled
//! solid. `RoundedRectangle::with_equal_corners` builds exactly that outline;
//! the corner `Size` is the arc radius on each axis.
//!
//! Draw results are discarded: every target used here is infallible.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Ellipse, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::styles::TOP_LEFT;

/// Fill an axis-aligned rectangle.
pub fn fill_rect<D>(
    display: &mut D,
    rect: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    rect.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}

/// Fill a rectangle whose four corners are quarter circles of `corner_radius`.
///
/// Radii larger than half the rectangle's shorter side are scaled down by
/// embedded-graphics so the outline stays closed.
pub fn fill_rounded_rect<D>(
    display: &mut D,
    rect: Rectangle,
    corner_radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(rect, Size::new(corner_radius, corner_radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Fill the ellipse inscribed in `bounds`.
pub fn fill_ellipse<D>(
    display: &mut D,
    bounds: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Ellipse::new(bounds.top_left, bounds.size)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw `text` with its top-left corner at `position`.
pub fn draw_label<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &'static MonoFont<'static>,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, MonoTextStyle::new(font, color), TOP_LEFT)
        .draw(display)
        .ok();
}
