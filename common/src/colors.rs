//! Color constants for the engine visualization.
//!
//! Pure colors come from the `RgbColor` trait constants. The remaining colors
//! approximate the classic named desktop brushes (silver, orange, dark green,
//! control gray) in RGB565.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Piston body.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure red (31, 0, 0). Oil-change warning text.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue (0, 0, 31). Open intake and exhaust valves.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Spark indicator.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Silver (192, 192, 192). Cylinder wall.
/// RGB565: (24, 48, 24).
pub const SILVER: Rgb565 = Rgb565::new(24, 48, 24);

/// Orange (255, 165, 0). Temperature readout.
/// RGB565: (31, 41, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 41, 0);

/// Dark green (0, 128, 0). Fuel level readout.
/// RGB565: (0, 32, 0) - half-intensity green, readable on a light background.
pub const GREEN: Rgb565 = Rgb565::new(0, 32, 0);

/// Light control gray (240, 240, 240). Window background, cleared every frame.
/// RGB565: (30, 60, 30).
pub const BACKGROUND: Rgb565 = Rgb565::new(30, 60, 30);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let palette = [BLACK, RED, BLUE, YELLOW, SILVER, ORANGE, GREEN, BACKGROUND];
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b, "Pixel-based render tests rely on every color being unique");
            }
        }
    }
}
