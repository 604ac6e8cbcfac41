//! Frame composition and drawing.
//!
//! Rendering is split in two steps:
//!
//! 1. [`Frame::compose`] reads an [`EngineState`] and produces an ordered list
//!    of [`DrawCommand`]s. It is pure and never touches the state.
//! 2. [`Frame::draw`] issues the commands against any `DrawTarget`.
//!
//! # Draw Order
//!
//! | # | Element | Shape | Condition |
//! |---|---------|-------|-----------|
//! | 1 | Cylinder | filled rectangle | always |
//! | 2 | Piston | rounded rectangle | always |
//! | 3 | Intake valve | rounded rectangle | intake open |
//! | 4 | Exhaust valve | rounded rectangle | exhaust open |
//! | 5 | Spark | filled ellipse | spark plugged |
//! | 6 | Oil warning | text | oil change needed |
//! | 7 | Temperature | text | always |
//! | 8 | Fuel level | text | always |
//!
//! [`RenderState`] is the redraw latch between the updater and the renderer:
//! ticks request a redraw, the host loop draws once and clears the request.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::colors::{BLACK, BLUE, GREEN, ORANGE, RED, SILVER, YELLOW};
use crate::config::{
    CYLINDER_POS,
    CYLINDER_SIZE,
    EXHAUST_VALVE_POS,
    FUEL_LEVEL_POS,
    INTAKE_VALVE_POS,
    OIL_WARNING_POS,
    PISTON_ANCHOR_Y,
    PISTON_CORNER_RADIUS,
    PISTON_SIZE,
    PISTON_X,
    SPARK_POS,
    SPARK_SIZE,
    TEMPERATURE_POS,
    VALVE_CORNER_RADIUS,
    VALVE_SIZE,
};
use crate::engine::EngineState;
use crate::styles::{READOUT_FONT, WARNING_FONT};
use crate::widgets::{
    OIL_WARNING_TEXT,
    Readout,
    draw_label,
    fill_ellipse,
    fill_rect,
    fill_rounded_rect,
    format_fuel_level,
    format_temperature,
};

// =============================================================================
// Drawing Commands
// =============================================================================

/// Maximum number of commands in one frame (every element visible).
pub const FRAME_CAPACITY: usize = 8;

/// Visual element a command belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Element {
    Cylinder,
    Piston,
    IntakeValve,
    ExhaustValve,
    Spark,
    OilWarning,
    Temperature,
    FuelLevel,
}

/// Font selection for text commands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelFont {
    Readout,
    Warning,
}

impl LabelFont {
    #[inline]
    pub const fn mono_font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Readout => READOUT_FONT,
            Self::Warning => WARNING_FONT,
        }
    }
}

/// Geometry of a single drawing primitive.
#[derive(Clone, PartialEq, Debug)]
pub enum Shape {
    Rect(Rectangle),
    RoundedRect { rect: Rectangle, corner_radius: u32 },
    /// Ellipse inscribed in the rectangle.
    Ellipse(Rectangle),
    Label { position: Point, text: Readout, font: LabelFont },
}

/// One filled primitive or text run.
#[derive(Clone, PartialEq, Debug)]
pub struct DrawCommand {
    pub element: Element,
    pub shape: Shape,
    pub color: Rgb565,
}

// =============================================================================
// Frame
// =============================================================================

/// Ordered drawing commands for one repaint.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Frame {
    commands: Vec<DrawCommand, FRAME_CAPACITY>,
}

impl Frame {
    /// Build the drawing commands for `state`.
    pub fn compose(state: &EngineState) -> Self {
        let mut frame = Self::default();

        frame.push(
            Element::Cylinder,
            Shape::Rect(Rectangle::new(CYLINDER_POS, CYLINDER_SIZE)),
            SILVER,
        );

        let piston_top = Point::new(PISTON_X, PISTON_ANCHOR_Y - state.piston_position);
        frame.push(
            Element::Piston,
            Shape::RoundedRect {
                rect: Rectangle::new(piston_top, PISTON_SIZE),
                corner_radius: PISTON_CORNER_RADIUS,
            },
            BLACK,
        );

        if state.valves.intake_valve_open {
            frame.push(Element::IntakeValve, valve_shape(INTAKE_VALVE_POS), BLUE);
        }
        if state.valves.exhaust_valve_open {
            frame.push(Element::ExhaustValve, valve_shape(EXHAUST_VALVE_POS), BLUE);
        }

        if state.valves.spark_plugged {
            frame.push(Element::Spark, Shape::Ellipse(Rectangle::new(SPARK_POS, SPARK_SIZE)), YELLOW);
        }

        if state.oil_change_needed {
            let mut text = Readout::new();
            text.push_str(OIL_WARNING_TEXT).ok();
            frame.push(
                Element::OilWarning,
                Shape::Label {
                    position: OIL_WARNING_POS,
                    text,
                    font: LabelFont::Warning,
                },
                RED,
            );
        }

        frame.push(
            Element::Temperature,
            Shape::Label {
                position: TEMPERATURE_POS,
                text: format_temperature(state.engine_temperature),
                font: LabelFont::Readout,
            },
            ORANGE,
        );
        frame.push(
            Element::FuelLevel,
            Shape::Label {
                position: FUEL_LEVEL_POS,
                text: format_fuel_level(state.fuel_level),
                font: LabelFont::Readout,
            },
            GREEN,
        );

        frame
    }

    fn push(
        &mut self,
        element: Element,
        shape: Shape,
        color: Rgb565,
    ) {
        // Capacity covers every element, so this never drops a command
        self.commands.push(DrawCommand { element, shape, color }).ok();
    }

    /// Commands in draw order.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Elements in draw order.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ { self.commands.iter().map(|c| c.element) }

    /// Whether `element` is drawn in this frame.
    pub fn contains(
        &self,
        element: Element,
    ) -> bool {
        self.elements().any(|e| e == element)
    }

    /// Issue every command against `display`, in order.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        for command in &self.commands {
            match &command.shape {
                Shape::Rect(rect) => fill_rect(display, *rect, command.color),
                Shape::RoundedRect { rect, corner_radius } => {
                    fill_rounded_rect(display, *rect, *corner_radius, command.color);
                }
                Shape::Ellipse(bounds) => fill_ellipse(display, *bounds, command.color),
                Shape::Label { position, text, font } => {
                    draw_label(display, text.as_str(), *position, font.mono_font(), command.color);
                }
            }
        }
    }
}

fn valve_shape(top_left: Point) -> Shape {
    Shape::RoundedRect {
        rect: Rectangle::new(top_left, VALVE_SIZE),
        corner_radius: VALVE_CORNER_RADIUS,
    }
}

/// Compose and draw `state` in one call.
pub fn draw_engine<D>(
    display: &mut D,
    state: &EngineState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Frame::compose(state).draw(display);
}

// =============================================================================
// Render State
// =============================================================================

/// Redraw latch between the updater and the renderer.
pub struct RenderState {
    /// A tick asked for a repaint since the last frame.
    redraw_requested: bool,

    /// Nothing has been drawn yet; the first frame is always drawn.
    first_frame: bool,

    /// Frames completed with `end_frame`.
    frames_drawn: u64,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            redraw_requested: false,
            first_frame: true,
            frames_drawn: 0,
        }
    }

    /// Ask for a repaint on the next loop iteration.
    #[inline]
    pub const fn request_redraw(&mut self) { self.redraw_requested = true; }

    /// Whether the next loop iteration must repaint.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.first_frame || self.redraw_requested }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call after a frame has been presented.
    pub const fn end_frame(&mut self) {
        self.redraw_requested = false;
        self.first_frame = false;
        self.frames_drawn += 1;
    }

    #[inline]
    pub const fn frames_drawn(&self) -> u64 { self.frames_drawn }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::colors::BACKGROUND;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::cycle::ValveFlags;

    /// In-memory framebuffer the size of the window.
    struct PixelBuffer {
        pixels: std::vec::Vec<Rgb565>,
    }

    impl PixelBuffer {
        fn new() -> Self {
            Self {
                pixels: std::vec![BACKGROUND; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            }
        }

        fn pixel(
            &self,
            x: i32,
            y: i32,
        ) -> Rgb565 {
            self.pixels[(y as u32 * SCREEN_WIDTH + x as u32) as usize]
        }

        fn count_in(
            &self,
            region: Rectangle,
            color: Rgb565,
        ) -> usize {
            let mut n = 0;
            for y in region.top_left.y..region.top_left.y + region.size.height as i32 {
                for x in region.top_left.x..region.top_left.x + region.size.width as i32 {
                    if self.pixel(x, y) == color {
                        n += 1;
                    }
                }
            }
            n
        }

        fn count(
            &self,
            color: Rgb565,
        ) -> usize {
            self.pixels.iter().filter(|&&c| c == color).count()
        }
    }

    impl OriginDimensions for PixelBuffer {
        fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
    }

    impl DrawTarget for PixelBuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT {
                    let idx = (point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize;
                    self.pixels[idx] = color;
                }
            }
            Ok(())
        }
    }

    fn exhaust_and_spark_state() -> EngineState {
        EngineState {
            valves: ValveFlags {
                intake_valve_open: false,
                exhaust_valve_open: true,
                spark_plugged: true,
                ignition: true,
            },
            oil_change_needed: false,
            ..EngineState::new()
        }
    }

    // -------------------------------------------------------------------------
    // Composition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_compose_omits_closed_intake_and_oil_warning() {
        let frame = Frame::compose(&exhaust_and_spark_state());
        let elements: std::vec::Vec<Element> = frame.elements().collect();
        assert_eq!(
            elements,
            [
                Element::Cylinder,
                Element::Piston,
                Element::ExhaustValve,
                Element::Spark,
                Element::Temperature,
                Element::FuelLevel,
            ]
        );
        assert!(!frame.contains(Element::IntakeValve));
        assert!(!frame.contains(Element::OilWarning));
    }

    #[test]
    fn test_compose_everything_visible() {
        let state = EngineState {
            valves: ValveFlags {
                intake_valve_open: true,
                exhaust_valve_open: true,
                spark_plugged: true,
                ignition: false,
            },
            oil_change_needed: true,
            ..EngineState::new()
        };
        let frame = Frame::compose(&state);
        assert_eq!(frame.commands().len(), FRAME_CAPACITY, "All eight elements fit in one frame");
        assert!(frame.contains(Element::OilWarning));
    }

    #[test]
    fn test_compose_minimal_frame() {
        let state = EngineState {
            valves: ValveFlags {
                intake_valve_open: false,
                exhaust_valve_open: false,
                spark_plugged: false,
                ignition: false,
            },
            ..EngineState::new()
        };
        let elements: std::vec::Vec<Element> = Frame::compose(&state).elements().collect();
        assert_eq!(
            elements,
            [Element::Cylinder, Element::Piston, Element::Temperature, Element::FuelLevel],
            "Cylinder, piston and both readouts are always drawn"
        );
    }

    #[test]
    fn test_piston_offset_from_anchor() {
        let state = EngineState {
            piston_position: 120,
            ..EngineState::new()
        };
        let frame = Frame::compose(&state);
        let piston = frame
            .commands()
            .iter()
            .find(|c| c.element == Element::Piston)
            .map(|c| c.shape.clone());
        assert_eq!(
            piston,
            Some(Shape::RoundedRect {
                rect: Rectangle::new(Point::new(110, 120), Size::new(200, 40)),
                corner_radius: 10,
            })
        );
    }

    #[test]
    fn test_readout_text() {
        let state = EngineState {
            engine_temperature: 95.04,
            fuel_level: -0.36,
            ..EngineState::new()
        };
        let frame = Frame::compose(&state);
        let labels: std::vec::Vec<&str> = frame
            .commands()
            .iter()
            .filter_map(|c| match &c.shape {
                Shape::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["Temperature: 95.0\u{b0}C", "Fuel: -0.4%"]);
    }

    #[test]
    fn test_compose_does_not_mutate_state() {
        let state = exhaust_and_spark_state();
        let before = state.clone();
        let _ = Frame::compose(&state);
        assert_eq!(state, before);
    }

    // -------------------------------------------------------------------------
    // Pixel Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_pixels_match_visible_elements() {
        let mut display = PixelBuffer::new();
        draw_engine(&mut display, &exhaust_and_spark_state());

        // Piston at position 10 spans y = 230..270
        assert_eq!(display.pixel(210, 150), SILVER, "Cylinder body");
        assert_eq!(display.pixel(210, 250), BLACK, "Piston body");
        assert_eq!(display.pixel(150, 40), BACKGROUND, "Closed intake valve is not drawn");
        assert_eq!(display.pixel(250, 40), BLUE, "Open exhaust valve");
        assert_eq!(display.pixel(210, 50), YELLOW, "Spark drawn over the cylinder head");
        assert_eq!(display.count(RED), 0, "No oil warning");

        let text_band = Rectangle::new(Point::new(350, 50), Size::new(300, 20));
        assert!(display.count_in(text_band, ORANGE) > 0, "Temperature text");
        let fuel_band = Rectangle::new(Point::new(350, 80), Size::new(300, 20));
        assert!(display.count_in(fuel_band, GREEN) > 0, "Fuel text");
    }

    #[test]
    fn test_draw_oil_warning_and_intake() {
        let state = EngineState {
            oil_change_needed: true,
            ..EngineState::new()
        };
        let mut display = PixelBuffer::new();
        draw_engine(&mut display, &state);

        assert_eq!(display.pixel(150, 40), BLUE, "Startup intake valve is open");
        assert_eq!(display.count(YELLOW), 0, "No spark at startup");
        let warning_band = Rectangle::new(Point::new(350, 300), Size::new(300, 20));
        assert!(display.count_in(warning_band, RED) > 0, "Oil warning text");
    }

    #[test]
    fn test_piston_corners_are_rounded() {
        let mut display = PixelBuffer::new();
        draw_engine(&mut display, &EngineState::new());

        // Piston rect starts at (110, 230); the corner pixel lies outside the arc
        assert_eq!(display.pixel(110, 230), SILVER, "Top-left corner shows the cylinder behind");
        assert_eq!(display.pixel(120, 231), BLACK, "Inside the arc is filled");
        assert_eq!(display.pixel(309, 230), SILVER, "Top-right corner is rounded too");
    }

    // -------------------------------------------------------------------------
    // Render State Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_frame_always_drawn() {
        let state = RenderState::new();
        assert!(state.is_first_frame());
        assert!(state.needs_redraw(), "First frame is drawn without a request");
    }

    #[test]
    fn test_redraw_request_latches_until_end_frame() {
        let mut state = RenderState::new();
        state.end_frame();
        assert!(!state.needs_redraw());

        state.request_redraw();
        state.request_redraw();
        assert!(state.needs_redraw());

        state.end_frame();
        assert!(!state.needs_redraw(), "end_frame consumes the request");
        assert_eq!(state.frames_drawn(), 2);
    }
}
