//! Window, timing and layout constants.
//!
//! Every coordinate the renderer uses is a `const Point`/`const Size`, so the
//! frame composer never computes fixed positions at runtime. Coordinates are
//! top-left based, y growing downward.

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Window Configuration
// =============================================================================

/// Framebuffer width in pixels.
pub const SCREEN_WIDTH: u32 = 800;

/// Framebuffer height in pixels.
pub const SCREEN_HEIGHT: u32 = 500;

/// Window title shown by the desktop host.
pub const WINDOW_TITLE: &str = "Four-Stroke Engine Simulation";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Nominal tick rate of the state updater.
pub const TICK_RATE_HZ: u32 = 60;

/// Simulated seconds added to `time_elapsed` on every tick.
pub const TICK_SECONDS: f64 = 1.0 / TICK_RATE_HZ as f64;

// =============================================================================
// Cylinder & Piston Layout
// =============================================================================

/// Top-left corner of the cylinder wall.
pub const CYLINDER_POS: Point = Point::new(110, 50);

/// Size of the cylinder wall.
pub const CYLINDER_SIZE: Size = Size::new(200, 200);

/// Left edge of the piston (aligned with the cylinder).
pub const PISTON_X: i32 = 110;

/// Piston top is drawn at `PISTON_ANCHOR_Y - piston_position`.
/// Higher piston positions move the piston up the screen.
pub const PISTON_ANCHOR_Y: i32 = 240;

/// Piston body size.
pub const PISTON_SIZE: Size = Size::new(200, 40);

/// Corner radius of the piston outline.
pub const PISTON_CORNER_RADIUS: u32 = 10;

// =============================================================================
// Valve & Spark Layout
// =============================================================================

/// Top edge shared by both valves (just above the cylinder head).
pub const VALVE_Y: i32 = 30;

/// Valve body size.
pub const VALVE_SIZE: Size = Size::new(40, 20);

/// Corner radius of the valve outline (half the height, a pill shape).
pub const VALVE_CORNER_RADIUS: u32 = 10;

/// Top-left corner of the intake valve (left side).
pub const INTAKE_VALVE_POS: Point = Point::new(130, VALVE_Y);

/// Top-left corner of the exhaust valve (right side).
pub const EXHAUST_VALVE_POS: Point = Point::new(230, VALVE_Y);

/// Top-left corner of the spark indicator's bounding box.
pub const SPARK_POS: Point = Point::new(200, 40);

/// Bounding box of the spark indicator (a circle).
pub const SPARK_SIZE: Size = Size::new(20, 20);

// =============================================================================
// Readout Layout
// =============================================================================

/// Temperature readout origin (top-left of the first glyph).
pub const TEMPERATURE_POS: Point = Point::new(350, 50);

/// Fuel level readout origin.
pub const FUEL_LEVEL_POS: Point = Point::new(350, 80);

/// Oil-change warning origin.
pub const OIL_WARNING_POS: Point = Point::new(350, 300);

// Layout sanity: the piston must fit inside the framebuffer at both extremes
const _: () = assert!(PISTON_ANCHOR_Y - crate::thresholds::PISTON_TOP >= 0);
const _: () = assert!(
    PISTON_ANCHOR_Y - crate::thresholds::PISTON_BOTTOM + PISTON_SIZE.height as i32 <= SCREEN_HEIGHT as i32
);
