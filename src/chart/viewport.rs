//! Viewport and coordinate transformation utilities
//!
//! Handles transformation between data space (domain values) and draw
//! space (pixel coordinates relative to the chart frame, origin top-left).

extern crate alloc;
use alloc::vec::Vec;

use log::warn;

use super::series::DataPoint;
use super::{Axis, ChartError, ChartResult};

/// A coordinate in draw space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawPoint {
    /// Horizontal offset from the left edge in pixels
    pub x: f32,
    /// Vertical offset from the top edge in pixels
    pub y: f32,
}

impl DrawPoint {
    /// Create a new draw-space point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing area in pixels
///
/// Supplied by the host on every draw; never cached across draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSize {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl DrawSize {
    /// Create a new drawing size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are finite and strictly positive
    pub fn validate(&self) -> ChartResult<()> {
        let valid = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;

        if valid {
            Ok(())
        } else {
            warn!("Rejecting drawing size {}x{}", self.width, self.height);
            Err(ChartError::InvalidSize)
        }
    }
}

impl From<embedded_graphics::geometry::Size> for DrawSize {
    fn from(size: embedded_graphics::geometry::Size) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

/// Data space bounds (min/max x and y values)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    /// Minimum X value in data space
    pub x_min: f32,
    /// Maximum X value in data space
    pub x_max: f32,
    /// Minimum Y value in data space
    pub y_min: f32,
    /// Maximum Y value in data space
    pub y_max: f32,
}

impl DataBounds {
    /// Create new data bounds
    pub const fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Calculate bounds from a slice of data points in a single pass
    ///
    /// Fails on empty input, non-finite coordinates, or when either axis
    /// has a zero range or one too wide to represent. Ranges are never
    /// widened to hide bad data.
    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        let first = points.first().ok_or(ChartError::EmptyData)?;

        let mut bounds = Self::new(first.x, first.x, first.y, first.y);

        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                warn!("Data point {} is not finite: {:?}", index, point);
                return Err(ChartError::NonFiniteData { index });
            }

            bounds.x_min = bounds.x_min.min(point.x);
            bounds.x_max = bounds.x_max.max(point.x);
            bounds.y_min = bounds.y_min.min(point.y);
            bounds.y_max = bounds.y_max.max(point.y);
        }

        if bounds.x_range() <= 0.0 {
            warn!("All {} data points share x = {}", points.len(), bounds.x_min);
            return Err(ChartError::DegenerateRange { axis: Axis::X });
        }

        if bounds.y_range() <= 0.0 {
            warn!("All {} data points share y = {}", points.len(), bounds.y_min);
            return Err(ChartError::DegenerateRange { axis: Axis::Y });
        }

        bounds.check_ranges()?;

        Ok(bounds)
    }

    /// Get the X range (width)
    pub fn x_range(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Get the Y range (height)
    pub fn y_range(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Check that both ranges are positive and finite
    ///
    /// Finite extremes can still be so far apart that `max - min`
    /// overflows; dividing by that range would turn the maximum into NaN.
    fn check_ranges(&self) -> ChartResult<()> {
        for (axis, range) in [(Axis::X, self.x_range()), (Axis::Y, self.y_range())] {
            if !(range > 0.0) {
                return Err(ChartError::DegenerateRange { axis });
            }
            if !range.is_finite() {
                warn!("Data {} range overflows: {:?}", axis, self);
                return Err(ChartError::RangeOverflow { axis });
            }
        }

        Ok(())
    }
}

/// Viewport for transforming data coordinates to draw coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Data space bounds
    data_bounds: DataBounds,
    /// Draw space size
    size: DrawSize,
}

impl Viewport {
    /// Create a new viewport
    ///
    /// The bounds must have positive, finite ranges (as produced by
    /// [`DataBounds::from_points`]) and the size must be positive.
    pub fn new(data_bounds: DataBounds, size: DrawSize) -> ChartResult<Self> {
        size.validate()?;
        data_bounds.check_ranges()?;

        Ok(Self { data_bounds, size })
    }

    /// Build a viewport that exactly fits the given points
    pub fn fit(points: &[DataPoint], size: DrawSize) -> ChartResult<Self> {
        Self::new(DataBounds::from_points(points)?, size)
    }

    /// Transform a data point to draw coordinates
    ///
    /// The y-axis is flipped: larger data values end up closer to the top.
    pub fn data_to_draw(&self, point: DataPoint) -> DrawPoint {
        let bounds = &self.data_bounds;
        let x = (point.x - bounds.x_min) / bounds.x_range() * self.size.width;
        let y = self.size.height - (point.y - bounds.y_min) / bounds.y_range() * self.size.height;

        DrawPoint::new(x, y)
    }

    /// Get the data bounds
    pub fn data_bounds(&self) -> &DataBounds {
        &self.data_bounds
    }

    /// Get the draw size
    pub fn size(&self) -> DrawSize {
        self.size
    }
}

/// Map domain-space points into draw space
///
/// Output has the same length and order as the input, with every
/// coordinate inside `[0, width] x [0, height]`.
pub fn normalize(points: &[DataPoint], size: DrawSize) -> ChartResult<Vec<DrawPoint>> {
    let viewport = Viewport::fit(points, size)?;

    Ok(points
        .iter()
        .map(|point| viewport.data_to_draw(*point))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::SAMPLE_BALANCES;
    use alloc::vec;

    #[test]
    fn test_normalize_scenario() {
        let points = [
            DataPoint::new(0.0, 0.0),
            DataPoint::new(10.0, 10.0),
            DataPoint::new(20.0, 0.0),
        ];

        let coords = normalize(&points, DrawSize::new(100.0, 100.0)).unwrap();

        assert_eq!(
            coords,
            vec![
                DrawPoint::new(0.0, 100.0),
                DrawPoint::new(50.0, 0.0),
                DrawPoint::new(100.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_normalize_stays_in_bounds() {
        let size = DrawSize::new(304.0, 202.0);
        let coords = normalize(&SAMPLE_BALANCES, size).unwrap();

        assert_eq!(coords.len(), SAMPLE_BALANCES.len());
        for coord in coords.iter() {
            assert!(coord.x >= 0.0 && coord.x <= size.width, "x out of range: {:?}", coord);
            assert!(coord.y >= 0.0 && coord.y <= size.height, "y out of range: {:?}", coord);
        }
    }

    #[test]
    fn test_extremes_map_to_edges() {
        let size = DrawSize::new(300.0, 200.0);
        let coords = normalize(&SAMPLE_BALANCES, size).unwrap();

        // First point has the smallest x, last point the largest
        assert_eq!(coords[0].x, 0.0);
        assert_eq!(coords[10].x, 300.0);
        // (7.7, 3.4) is the minimum value, (35.0, 14.0) the maximum
        assert_eq!(coords[1].y, 200.0);
        assert_eq!(coords[7].y, 0.0);
    }

    #[test]
    fn test_normalize_preserves_order() {
        // Deliberately not monotonic in x
        let points = [
            DataPoint::new(4.0, 1.0),
            DataPoint::new(0.0, 3.0),
            DataPoint::new(2.0, 2.0),
        ];

        let coords = normalize(&points, DrawSize::new(40.0, 20.0)).unwrap();

        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0], DrawPoint::new(40.0, 20.0));
        assert_eq!(coords[1], DrawPoint::new(0.0, 0.0));
        assert_eq!(coords[2], DrawPoint::new(20.0, 10.0));
    }

    #[test]
    fn test_degenerate_x_range_rejected() {
        let points = [
            DataPoint::new(5.0, 1.0),
            DataPoint::new(5.0, 2.0),
            DataPoint::new(5.0, 3.0),
        ];

        let result = normalize(&points, DrawSize::new(100.0, 100.0));
        assert_eq!(result, Err(ChartError::DegenerateRange { axis: Axis::X }));
    }

    #[test]
    fn test_degenerate_y_range_rejected() {
        let points = [DataPoint::new(1.0, 7.0), DataPoint::new(2.0, 7.0)];

        let result = normalize(&points, DrawSize::new(100.0, 100.0));
        assert_eq!(result, Err(ChartError::DegenerateRange { axis: Axis::Y }));
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let points = [DataPoint::new(3.0, 4.0)];

        let result = normalize(&points, DrawSize::new(100.0, 100.0));
        assert_eq!(result, Err(ChartError::DegenerateRange { axis: Axis::X }));
    }

    #[test]
    fn test_empty_data_rejected() {
        let result = normalize(&[], DrawSize::new(100.0, 100.0));
        assert_eq!(result, Err(ChartError::EmptyData));
    }

    #[test]
    fn test_non_finite_data_rejected() {
        let points = [
            DataPoint::new(0.0, 1.0),
            DataPoint::new(f32::NAN, 2.0),
            DataPoint::new(2.0, 3.0),
        ];

        let result = DataBounds::from_points(&points);
        assert_eq!(result, Err(ChartError::NonFiniteData { index: 1 }));
    }

    #[test]
    fn test_invalid_size_rejected() {
        let points = [DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)];

        assert_eq!(
            normalize(&points, DrawSize::new(0.0, 100.0)),
            Err(ChartError::InvalidSize)
        );
        assert_eq!(
            normalize(&points, DrawSize::new(100.0, -1.0)),
            Err(ChartError::InvalidSize)
        );
        assert_eq!(
            normalize(&points, DrawSize::new(f32::INFINITY, 10.0)),
            Err(ChartError::InvalidSize)
        );
    }

    #[test]
    fn test_bounds_from_sample_data() {
        let bounds = DataBounds::from_points(&SAMPLE_BALANCES).unwrap();

        assert_eq!(bounds, DataBounds::new(5.1, 70.0, 3.4, 14.0));
    }

    #[test]
    fn test_viewport_rejects_collapsed_bounds() {
        let bounds = DataBounds::new(1.0, 1.0, 0.0, 1.0);

        assert_eq!(
            Viewport::new(bounds, DrawSize::new(10.0, 10.0)),
            Err(ChartError::DegenerateRange { axis: Axis::X })
        );
    }

    #[test]
    fn test_overflowing_range_rejected() {
        let wide_x = [DataPoint::new(-3e38, 0.0), DataPoint::new(3e38, 1.0)];
        let wide_y = [DataPoint::new(0.0, 3e38), DataPoint::new(1.0, -3e38)];

        assert_eq!(
            normalize(&wide_x, DrawSize::new(100.0, 100.0)),
            Err(ChartError::RangeOverflow { axis: Axis::X })
        );
        assert_eq!(
            normalize(&wide_y, DrawSize::new(100.0, 100.0)),
            Err(ChartError::RangeOverflow { axis: Axis::Y })
        );
    }

    #[test]
    fn test_viewport_rejects_overflowing_bounds() {
        let bounds = DataBounds::new(0.0, 1.0, -f32::MAX, f32::MAX);

        assert_eq!(
            Viewport::new(bounds, DrawSize::new(10.0, 10.0)),
            Err(ChartError::RangeOverflow { axis: Axis::Y })
        );
    }

    #[test]
    fn test_large_finite_range_stays_finite() {
        let points = [DataPoint::new(-1e38, -1e38), DataPoint::new(1e38, 1e38)];

        let coords = normalize(&points, DrawSize::new(100.0, 100.0)).unwrap();

        assert_eq!(coords[0], DrawPoint::new(0.0, 100.0));
        assert_eq!(coords[1], DrawPoint::new(100.0, 0.0));
    }
}
