//! Animated line/area chart rendering
//!
//! This module turns an ordered list of data points into drawable geometry
//! and rasterizes it onto an RGB565 display. It supports:
//!
//! - Normalization of domain-space data into draw space (origin top-left)
//! - Linear and smooth (horizontal-tangent cubic) curve paths
//! - A filled variant of the curve closed against the bottom edge
//! - A border plus evenly spaced vertical/horizontal grid lines
//! - A horizontal reveal clip driven by an external progress value
//!
//! Geometry is computed fresh for every draw through [`render`], which is a
//! pure function of the data, the drawing size and the progress value.
//!
//! # Examples
//!
//! ```ignore
//! use balance_chart::chart::*;
//! use balance_chart::sample_data::SAMPLE_BALANCES;
//!
//! let size = DrawSize::new(300.0, 200.0);
//! let frame = render(&SAMPLE_BALANCES, size, 0.5, &ChartConfig::default())?;
//! frame.draw(Point::new(8, 8), &mut display)?;
//! ```

use core::fmt;

use thiserror_no_std::Error;

// Module declarations
mod component;
pub mod constants;
mod grid;
pub mod path;
mod render;
pub mod series;
pub mod viewport;

// Re-export main types
pub use component::{Chart, GridPanel};
pub use grid::{GridConfig, GridLines, grid_lines};
pub use path::{Path, PathCommand, build_filled_path, build_linear_path, build_smooth_path};
pub use render::{ChartConfig, ChartFrame, render};
pub use series::{DataPoint, GradientFill, InterpolationType, SeriesStyle};
pub use viewport::{DataBounds, DrawPoint, DrawSize, Viewport, normalize};

/// Data axis, used when reporting range problems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal (domain) axis
    X,
    /// Vertical (value) axis
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Error types for chart geometry
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// No data points were supplied
    #[error("No data points available")]
    EmptyData,

    /// A data point holds a NaN or infinite coordinate
    #[error("Non-finite coordinate in data point {index}")]
    NonFiniteData {
        /// Position of the offending point in the input
        index: usize,
    },

    /// All values on one axis are equal, so the range cannot be normalized
    #[error("Degenerate {axis} range (min == max)")]
    DegenerateRange {
        /// Axis whose range collapsed
        axis: Axis,
    },

    /// The spread of finite values on one axis does not fit in an `f32`
    #[error("{axis} range overflows f32")]
    RangeOverflow {
        /// Axis whose range overflowed
        axis: Axis,
    },

    /// Drawing area is empty, negative or non-finite
    #[error("Invalid drawing size (width and height must be positive)")]
    InvalidSize,
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
