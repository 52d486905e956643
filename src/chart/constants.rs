//! Constants for chart rendering
//!
//! All magic numbers are defined here with descriptive names and units.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

// RGB565 format: R(5 bits), G(6 bits), B(5 bits)
// Convert from 8-bit RGB: R>>3, G>>2, B>>3

/// Chart background - neutral dark gray (#222222)
pub const COLOR_CHART_BACKGROUND: Rgb565 = Rgb565::new(0x22 >> 3, 0x22 >> 2, 0x22 >> 3);

/// Grid and border color - muted outline gray (#938F99)
pub const COLOR_OUTLINE: Rgb565 = Rgb565::new(0x93 >> 3, 0x8F >> 2, 0x99 >> 3);

/// Background of the grid-only panel - soft lavender (#D0BCFF)
pub const COLOR_PANEL_BACKGROUND: Rgb565 = Rgb565::new(0xD0 >> 3, 0xBC >> 2, 0xFF >> 3);

/// Series stroke and fill color
pub const COLOR_SERIES: Rgb565 = Rgb565::GREEN;

/// Default number of vertical grid lines (excluding the border)
pub const DEFAULT_VERTICAL_GRID_COUNT: usize = 4;

/// Default number of horizontal grid lines (excluding the border)
pub const DEFAULT_HORIZONTAL_GRID_COUNT: usize = 3;

/// Default grid and border line width in pixels
pub const DEFAULT_GRID_LINE_WIDTH_PX: u32 = 1;

/// Default series line width in pixels
pub const DEFAULT_SERIES_LINE_WIDTH_PX: u32 = 2;

/// Opacity of the gradient fill right under the curve (40%)
pub const DEFAULT_FILL_TOP_OPACITY: u8 = 102;

/// Opacity of the gradient fill at the bottom edge (fully transparent)
pub const DEFAULT_FILL_BOTTOM_OPACITY: u8 = 0;

/// Number of color bands in the vertical gradient
///
/// RGB565 cannot show much more than this on a dark background anyway.
pub const DEFAULT_GRADIENT_BANDS: u8 = 16;

/// Number of line segments each cubic segment is flattened into
pub const DEFAULT_CURVE_SUBDIVISIONS: usize = 16;
