//! Data series types for chart rendering
//!
//! Provides the domain-space data point type along with the styling and
//! interpolation settings applied to a series.

use embedded_graphics::pixelcolor::Rgb565;

use super::constants::{
    COLOR_SERIES, DEFAULT_FILL_BOTTOM_OPACITY, DEFAULT_FILL_TOP_OPACITY, DEFAULT_GRADIENT_BANDS,
    DEFAULT_SERIES_LINE_WIDTH_PX,
};

/// A single data point in domain space
///
/// Typically x is a time value and y a measured quantity (a balance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// X-coordinate (domain value)
    pub x: f32,
    /// Y-coordinate (measured value)
    pub y: f32,
}

impl DataPoint {
    /// Create a new data point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Interpolation type for building the curve through the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationType {
    /// Straight segments between consecutive points
    Linear,
    /// Cubic segments with horizontal tangents at every point
    #[default]
    Smooth,
}

impl InterpolationType {
    /// The other interpolation type
    pub fn toggled(self) -> Self {
        match self {
            InterpolationType::Linear => InterpolationType::Smooth,
            InterpolationType::Smooth => InterpolationType::Linear,
        }
    }
}

/// Vertical gradient fill under the curve
///
/// The gradient runs from the top of the chart frame (`top_opacity`) to the
/// bottom (`bottom_opacity`); partially transparent bands are blended with
/// the chart background since RGB565 carries no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientFill {
    /// Fill color
    pub color: Rgb565,
    /// Opacity at the top of the frame (0 = transparent, 255 = opaque)
    pub top_opacity: u8,
    /// Opacity at the bottom of the frame
    pub bottom_opacity: u8,
    /// Number of gradient bands to render
    pub bands: u8,
}

impl GradientFill {
    /// Create a new gradient fill
    pub const fn new(color: Rgb565, top_opacity: u8, bottom_opacity: u8, bands: u8) -> Self {
        Self {
            color,
            top_opacity,
            bottom_opacity,
            bands,
        }
    }

    /// A fill of a single fully opaque color
    pub const fn solid(color: Rgb565) -> Self {
        Self::new(color, u8::MAX, u8::MAX, 1)
    }
}

impl Default for GradientFill {
    fn default() -> Self {
        Self::new(
            COLOR_SERIES,
            DEFAULT_FILL_TOP_OPACITY,
            DEFAULT_FILL_BOTTOM_OPACITY,
            DEFAULT_GRADIENT_BANDS,
        )
    }
}

/// Visual style configuration for a data series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Line color
    pub color: Rgb565,
    /// Line width in pixels
    pub line_width: u32,
    /// Optional gradient fill under the line
    pub fill: Option<GradientFill>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: COLOR_SERIES,
            line_width: DEFAULT_SERIES_LINE_WIDTH_PX,
            fill: Some(GradientFill::default()),
        }
    }
}
