//! Grid line rendering for chart backgrounds
//!
//! Provides a border plus evenly spaced vertical and horizontal grid lines.
//! Line positions are computed in draw space first so they can be inspected
//! without a display.

extern crate alloc;
use alloc::vec::Vec;

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};

use super::constants::{
    COLOR_OUTLINE, DEFAULT_GRID_LINE_WIDTH_PX, DEFAULT_HORIZONTAL_GRID_COUNT,
    DEFAULT_VERTICAL_GRID_COUNT,
};
use super::render::to_screen;
use super::viewport::{DrawPoint, DrawSize};

/// Complete grid configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of interior vertical lines
    pub vertical_lines: usize,
    /// Number of interior horizontal lines
    pub horizontal_lines: usize,
    /// Whether to stroke the frame outline
    pub border: bool,
    /// Line color
    pub color: Rgb565,
    /// Line width in pixels
    pub line_width: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            vertical_lines: DEFAULT_VERTICAL_GRID_COUNT,
            horizontal_lines: DEFAULT_HORIZONTAL_GRID_COUNT,
            border: true,
            color: COLOR_OUTLINE,
            line_width: DEFAULT_GRID_LINE_WIDTH_PX,
        }
    }
}

impl GridConfig {
    /// Set the line color
    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    /// Set the number of interior lines in each direction
    pub fn with_counts(mut self, vertical: usize, horizontal: usize) -> Self {
        self.vertical_lines = vertical;
        self.horizontal_lines = horizontal;
        self
    }

    /// Enable or disable the border
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }
}

/// Grid line positions in draw space
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLines {
    /// X position of every vertical line
    pub vertical: Vec<f32>,
    /// Y position of every horizontal line
    pub horizontal: Vec<f32>,
    /// Whether a border is drawn around the frame
    pub border: bool,
}

/// Compute evenly spaced grid line positions
///
/// `n` lines split the extent into `n + 1` equal parts; the edges
/// themselves are left to the border.
pub fn grid_lines(config: &GridConfig, size: DrawSize) -> GridLines {
    GridLines {
        vertical: even_positions(config.vertical_lines, size.width),
        horizontal: even_positions(config.horizontal_lines, size.height),
        border: config.border,
    }
}

fn even_positions(count: usize, extent: f32) -> Vec<f32> {
    let spacing = extent / (count + 1) as f32;
    (0..count).map(|i| spacing * (i + 1) as f32).collect()
}

/// Draw grid lines inside a frame
///
/// `frame` is the on-screen rectangle of the draw space the lines were
/// computed for. Nothing is drawn outside it, even for wide strokes.
pub(super) fn draw_grid<D: DrawTarget<Color = Rgb565>>(
    lines: &GridLines,
    config: &GridConfig,
    frame: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    if frame.is_zero_sized() {
        return Ok(());
    }

    let mut display = display.clipped(&frame);
    let line_style = PrimitiveStyle::with_stroke(config.color, config.line_width);
    let origin = frame.top_left;
    // Line end points are inclusive: stop on the last pixel row/column
    let last_row = (frame.size.height - 1) as f32;
    let last_column = (frame.size.width - 1) as f32;

    if lines.border {
        frame
            .into_styled(
                PrimitiveStyleBuilder::new()
                    .stroke_color(config.color)
                    .stroke_width(config.line_width)
                    .stroke_alignment(StrokeAlignment::Inside)
                    .build(),
            )
            .draw(&mut display)?;
    }

    // Draw vertical grid lines
    for x in lines.vertical.iter().copied() {
        let start = to_screen(origin, DrawPoint::new(x, 0.0));
        let end = to_screen(origin, DrawPoint::new(x, last_row));
        Line::new(start, end).into_styled(line_style).draw(&mut display)?;
    }

    // Draw horizontal grid lines
    for y in lines.horizontal.iter().copied() {
        let start = to_screen(origin, DrawPoint::new(0.0, y));
        let end = to_screen(origin, DrawPoint::new(last_column, y));
        Line::new(start, end).into_styled(line_style).draw(&mut display)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use alloc::vec;

    #[test]
    fn test_default_grid_positions() {
        let lines = grid_lines(&GridConfig::default(), DrawSize::new(300.0, 200.0));

        assert_eq!(lines.vertical, vec![60.0, 120.0, 180.0, 240.0]);
        assert_eq!(lines.horizontal, vec![50.0, 100.0, 150.0]);
        assert!(lines.border);
    }

    #[test]
    fn test_zero_count_has_no_lines() {
        let config = GridConfig::default().with_counts(0, 0).with_border(false);
        let lines = grid_lines(&config, DrawSize::new(300.0, 200.0));

        assert!(lines.vertical.is_empty());
        assert!(lines.horizontal.is_empty());
        assert!(!lines.border);
    }

    #[test]
    fn test_draw_grid_pixels() {
        let background = Rgb565::BLACK;
        let mut fb = FrameBuffer::new(Size::new(50, 40), background);
        let frame = Rectangle::new(Point::zero(), Size::new(50, 40));
        let config = GridConfig::default().with_color(Rgb565::WHITE);
        let lines = grid_lines(&config, frame.size.into());

        draw_grid(&lines, &config, frame, &mut fb).unwrap();

        // Border corners
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(49, 39)), Some(Rgb565::WHITE));
        // First vertical line at x = 10, first horizontal at y = 10
        assert_eq!(fb.pixel(Point::new(10, 25)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(25, 10)), Some(Rgb565::WHITE));
        // Interior cell stays untouched
        assert_eq!(fb.pixel(Point::new(5, 5)), Some(background));
    }

    #[test]
    fn test_draw_grid_stays_inside_frame() {
        let background = Rgb565::BLACK;
        let mut fb = FrameBuffer::new(Size::new(60, 50), background);
        let frame = Rectangle::new(Point::new(5, 5), Size::new(50, 40));
        let config = GridConfig::default()
            .with_color(Rgb565::WHITE)
            .with_border(false);
        let lines = grid_lines(&config, frame.size.into());

        draw_grid(&lines, &config, frame, &mut fb).unwrap();

        // Vertical line at x = 15 ends on the last row of the frame
        assert_eq!(fb.pixel(Point::new(15, 44)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(15, 45)), Some(background));
        // Horizontal line at y = 15 ends on the last column of the frame
        assert_eq!(fb.pixel(Point::new(54, 15)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(55, 15)), Some(background));
    }

    #[test]
    fn test_wide_border_stays_inside_frame() {
        let background = Rgb565::BLACK;
        let mut fb = FrameBuffer::new(Size::new(40, 40), background);
        let frame = Rectangle::new(Point::new(10, 10), Size::new(20, 20));
        let mut config = GridConfig::default()
            .with_color(Rgb565::WHITE)
            .with_counts(0, 0);
        config.line_width = 3;
        let lines = grid_lines(&config, frame.size.into());

        draw_grid(&lines, &config, frame, &mut fb).unwrap();

        assert_eq!(fb.pixel(Point::new(10, 10)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(12, 20)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(9, 20)), Some(background));
        assert_eq!(fb.pixel(Point::new(30, 20)), Some(background));
        assert_eq!(fb.pixel(Point::new(13, 20)), Some(background));
    }
}
