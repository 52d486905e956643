//! Frame rendering: geometry for one draw, and its rasterization
//!
//! [`render`] is a pure function from data, size and reveal progress to a
//! [`ChartFrame`]. The frame is then rasterized onto any RGB565 draw target
//! with [`ChartFrame::draw`]. Nothing is cached between draws.

extern crate alloc;
use alloc::vec::Vec;

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use log::debug;

use super::ChartResult;
use super::constants::{COLOR_CHART_BACKGROUND, DEFAULT_CURVE_SUBDIVISIONS};
use super::grid::{GridConfig, GridLines, draw_grid, grid_lines};
use super::path::{Path, build_filled_path, build_linear_path, build_smooth_path};
use super::series::{DataPoint, GradientFill, InterpolationType, SeriesStyle};
use super::viewport::{DrawPoint, DrawSize, normalize};

/// Geometry and style settings for a chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// How consecutive points are connected
    pub interpolation: InterpolationType,
    /// Line segments per cubic segment when rasterizing
    pub curve_subdivisions: usize,
    /// Grid configuration
    pub grid: GridConfig,
    /// Series stroke and fill style
    pub series: SeriesStyle,
    /// Background color of the chart frame
    pub background: Rgb565,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationType::default(),
            curve_subdivisions: DEFAULT_CURVE_SUBDIVISIONS,
            grid: GridConfig::default(),
            series: SeriesStyle::default(),
            background: COLOR_CHART_BACKGROUND,
        }
    }
}

impl ChartConfig {
    /// Set the interpolation type
    pub fn with_interpolation(mut self, interpolation: InterpolationType) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Set the grid configuration
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Set the series style
    pub fn with_series(mut self, series: SeriesStyle) -> Self {
        self.series = series;
        self
    }

    /// Set the background color
    pub fn with_background(mut self, background: Rgb565) -> Self {
        self.background = background;
        self
    }
}

/// Everything needed to draw one chart frame
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    /// Size of the draw space
    pub size: DrawSize,
    /// Grid line positions
    pub grid: GridLines,
    /// Open curve through the data
    pub curve: Path,
    /// Region between the curve and the bottom edge, if the style fills it
    pub fill: Option<Path>,
    /// Visible width from the left edge, in pixels
    pub clip_width: f32,
    /// Settings the frame was rendered with
    pub config: ChartConfig,
}

/// Compute the draw commands for one frame
///
/// `progress` is the reveal fraction; it is clamped to `[0, 1]` and NaN is
/// treated as nothing revealed.
pub fn render(
    points: &[DataPoint],
    size: DrawSize,
    progress: f32,
    config: &ChartConfig,
) -> ChartResult<ChartFrame> {
    let coords = normalize(points, size)?;

    let curve = match config.interpolation {
        InterpolationType::Linear => build_linear_path(&coords),
        InterpolationType::Smooth => build_smooth_path(&coords),
    };
    let fill = config
        .series
        .fill
        .map(|_| build_filled_path(&curve, size));

    let progress = clamp_progress(progress);

    debug!(
        "Rendered {} points into {}x{} at progress {}",
        points.len(),
        size.width,
        size.height,
        progress
    );

    Ok(ChartFrame {
        size,
        grid: grid_lines(&config.grid, size),
        curve,
        fill,
        clip_width: size.width * progress,
        config: *config,
    })
}

fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

impl ChartFrame {
    /// On-screen rectangle of the frame when drawn at `origin`
    pub fn screen_rect(&self, origin: Point) -> Rectangle {
        let width = round_to_i32(self.size.width).max(0) as u32;
        let height = round_to_i32(self.size.height).max(0) as u32;
        Rectangle::new(origin, Size::new(width, height))
    }

    /// On-screen clip rectangle for the revealed part of the chart
    pub fn clip_rect(&self, origin: Point) -> Rectangle {
        let frame = self.screen_rect(origin);
        let width = round_to_i32(self.clip_width).clamp(0, frame.size.width as i32) as u32;
        Rectangle::new(origin, Size::new(width, frame.size.height))
    }

    /// Rasterize the frame with its top-left corner at `origin`
    ///
    /// Layers: background, grid, then the fill and the stroked curve
    /// clipped to the revealed width.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        origin: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let frame = self.screen_rect(origin);
        let config = &self.config;

        display.fill_solid(&frame, config.background)?;
        draw_grid(&self.grid, &config.grid, frame, display)?;

        let clip = self.clip_rect(origin);
        if clip.size.width == 0 {
            return Ok(());
        }

        let mut clipped = display.clipped(&clip);

        if let (Some(fill_path), Some(fill)) = (&self.fill, &config.series.fill) {
            let rings = fill_path.flatten(config.curve_subdivisions);
            draw_gradient_fill(&rings, fill, config.background, frame, &mut clipped)?;
        }

        let stroke = PrimitiveStyle::with_stroke(config.series.color, config.series.line_width);
        for polyline in self.curve.flatten(config.curve_subdivisions) {
            draw_polyline(&polyline, origin, stroke, &mut clipped)?;
        }

        Ok(())
    }
}

/// Convert a draw-space point to screen pixels relative to `origin`
pub(super) fn to_screen(origin: Point, point: DrawPoint) -> Point {
    Point::new(
        origin.x + round_to_i32(point.x),
        origin.y + round_to_i32(point.y),
    )
}

fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

fn ceil_to_i32(value: f32) -> i32 {
    let truncated = value as i32;
    if (truncated as f32) < value {
        truncated + 1
    } else {
        truncated
    }
}

/// Draw connected line segments, skipping zero-length steps
fn draw_polyline<D: DrawTarget<Color = Rgb565>>(
    points: &[DrawPoint],
    origin: Point,
    style: PrimitiveStyle<Rgb565>,
    display: &mut D,
) -> Result<(), D::Error> {
    let mut prev: Option<Point> = None;

    for point in points.iter() {
        let screen = to_screen(origin, *point);
        match prev {
            Some(p) if p == screen => continue,
            Some(p) => Line::new(p, screen).into_styled(style).draw(display)?,
            None => {}
        }
        prev = Some(screen);
    }

    Ok(())
}

/// Fill closed rings with a vertical gradient (even-odd rule)
///
/// A pixel is filled when its center lies inside the shape. The gradient
/// spans the full frame height, so each row has a single color.
fn draw_gradient_fill<D: DrawTarget<Color = Rgb565>>(
    rings: &[Vec<DrawPoint>],
    fill: &GradientFill,
    background: Rgb565,
    frame: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    let colors = build_gradient_colors(fill, background);
    let height = frame.size.height;
    let mut crossings: Vec<f32> = Vec::new();

    for row in 0..height {
        let center_y = row as f32 + 0.5;

        crossings.clear();
        for ring in rings.iter() {
            for edge in ring.windows(2) {
                let (a, b) = (edge[0], edge[1]);
                if (a.y <= center_y) != (b.y <= center_y) {
                    crossings.push(a.x + (center_y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
        }

        if crossings.len() < 2 {
            continue;
        }
        crossings.sort_unstable_by(|a, b| a.total_cmp(b));

        let band = (row as usize * colors.len() / height as usize).min(colors.len() - 1);
        let color = colors[band];
        let y = frame.top_left.y + row as i32;

        for span in crossings.chunks_exact(2) {
            let start = ceil_to_i32(span[0] - 0.5);
            let end = ceil_to_i32(span[1] - 0.5);
            if end > start {
                let area = Rectangle::new(
                    Point::new(frame.top_left.x + start, y),
                    Size::new((end - start) as u32, 1),
                );
                display.fill_solid(&area, color)?;
            }
        }
    }

    Ok(())
}

/// One color per gradient band, top to bottom, pre-blended with the background
fn build_gradient_colors(fill: &GradientFill, background: Rgb565) -> Vec<Rgb565> {
    let bands = fill.bands.max(1) as usize;
    let mut colors = Vec::with_capacity(bands);

    for i in 0..bands {
        let t = if bands > 1 {
            i as f32 / (bands - 1) as f32
        } else {
            0.0
        };
        let top = fill.top_opacity as f32;
        let bottom = fill.bottom_opacity as f32;
        let alpha = (top + (bottom - top) * t) / 255.0;
        colors.push(blend_over(background, fill.color, alpha));
    }

    colors
}

/// Mix `color` over `background` with coverage `alpha` in `[0, 1]`
///
/// Works on the native 5/6/5-bit channels, rounding to the nearest level.
fn blend_over(background: Rgb565, color: Rgb565, alpha: f32) -> Rgb565 {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |under: u8, over: u8| {
        let under = under as f32;
        (under + (over as f32 - under) * alpha + 0.5) as u8
    };

    Rgb565::new(
        mix(background.r(), color.r()),
        mix(background.g(), color.g()),
        mix(background.b(), color.b()),
    )
}
