//! Path construction for chart curves
//!
//! A [`Path`] is an ordered list of drawing commands in draw space. The
//! builders here connect normalized coordinates either with straight
//! segments or with horizontal-tangent cubic segments, and derive the filled
//! region under a curve.

extern crate alloc;
use alloc::vec::Vec;

use super::viewport::{DrawPoint, DrawSize};

/// A single drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path at a point
    MoveTo(DrawPoint),
    /// Straight segment to a point
    LineTo(DrawPoint),
    /// Cubic Bezier segment to a point
    CubicTo {
        /// First control point
        ctrl1: DrawPoint,
        /// Second control point
        ctrl2: DrawPoint,
        /// End point
        to: DrawPoint,
    },
    /// Straight segment back to the start of the current sub-path
    Close,
}

/// Ordered sequence of drawing commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with room for `capacity` commands
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Begin a new sub-path
    pub fn move_to(&mut self, point: DrawPoint) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Append a straight segment
    pub fn line_to(&mut self, point: DrawPoint) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Append a cubic Bezier segment
    pub fn cubic_to(&mut self, ctrl1: DrawPoint, ctrl2: DrawPoint, to: DrawPoint) {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
    }

    /// Close the current sub-path
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// All commands in order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the path has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Point the path starts at
    pub fn start_point(&self) -> Option<DrawPoint> {
        self.commands.iter().find_map(|command| match command {
            PathCommand::MoveTo(point) => Some(*point),
            _ => None,
        })
    }

    /// Current point after the last command
    pub fn end_point(&self) -> Option<DrawPoint> {
        let mut subpath_start = None;
        let mut current = None;

        for command in self.commands.iter() {
            match *command {
                PathCommand::MoveTo(point) => {
                    subpath_start = Some(point);
                    current = Some(point);
                }
                PathCommand::LineTo(point) | PathCommand::CubicTo { to: point, .. } => {
                    current = Some(point);
                }
                PathCommand::Close => current = subpath_start,
            }
        }

        current
    }

    /// Convert the path into polylines, one per sub-path
    ///
    /// Cubic segments are sampled at `subdivisions` uniform steps of the
    /// curve parameter. A closed sub-path ends with a copy of its start.
    /// Segments issued before any move-to start from the origin.
    pub fn flatten(&self, subdivisions: usize) -> Vec<Vec<DrawPoint>> {
        let subdivisions = subdivisions.max(1);
        let step = 1.0 / subdivisions as f32;

        let mut polylines: Vec<Vec<DrawPoint>> = Vec::new();
        let mut current: Vec<DrawPoint> = Vec::new();
        let mut subpath_start = DrawPoint::default();

        for command in self.commands.iter() {
            match *command {
                PathCommand::MoveTo(point) => {
                    if !current.is_empty() {
                        polylines.push(core::mem::take(&mut current));
                    }
                    subpath_start = point;
                    current.push(point);
                }
                PathCommand::LineTo(point) => {
                    if current.is_empty() {
                        current.push(subpath_start);
                    }
                    current.push(point);
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    let from = current.last().copied().unwrap_or(subpath_start);
                    if current.is_empty() {
                        current.push(from);
                    }

                    for i in 1..subdivisions {
                        let t = i as f32 * step;
                        current.push(cubic_point(from, ctrl1, ctrl2, to, t));
                    }
                    current.push(to);
                }
                PathCommand::Close => {
                    if !current.is_empty() {
                        current.push(subpath_start);
                        polylines.push(core::mem::take(&mut current));
                    }
                }
            }
        }

        if !current.is_empty() {
            polylines.push(current);
        }

        polylines
    }
}

/// Evaluate a cubic Bezier segment at parameter `t`
fn cubic_point(p0: DrawPoint, p1: DrawPoint, p2: DrawPoint, p3: DrawPoint, t: f32) -> DrawPoint {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;

    DrawPoint::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// Connect coordinates in order with straight segments
pub fn build_linear_path(coords: &[DrawPoint]) -> Path {
    let mut path = Path::with_capacity(coords.len());

    for (i, point) in coords.iter().enumerate() {
        if i == 0 {
            path.move_to(*point);
        } else {
            path.line_to(*point);
        }
    }

    path
}

/// Connect coordinates in order with cubic segments
///
/// Both control points of a segment sit at the horizontal midpoint between
/// its ends, at the height of the end they belong to. The curve is flat at
/// every data point and only bends between points.
pub fn build_smooth_path(coords: &[DrawPoint]) -> Path {
    let mut path = Path::with_capacity(coords.len());

    for (i, point) in coords.iter().enumerate() {
        if i == 0 {
            path.move_to(*point);
            continue;
        }

        let prev = coords[i - 1];
        let mid_x = (prev.x + point.x) / 2.0;
        path.cubic_to(
            DrawPoint::new(mid_x, prev.y),
            DrawPoint::new(mid_x, point.y),
            *point,
        );
    }

    path
}

/// Close a curve against the bottom edge of the drawing area
///
/// Appends segments to the bottom-right and bottom-left corners and closes
/// the shape. An empty curve has nothing to fill and yields an empty path.
pub fn build_filled_path(curve: &Path, size: DrawSize) -> Path {
    if curve.is_empty() {
        return Path::new();
    }

    let mut filled = Path::with_capacity(curve.len() + 3);
    filled.commands.extend_from_slice(curve.commands());
    filled.line_to(DrawPoint::new(size.width, size.height));
    filled.line_to(DrawPoint::new(0.0, size.height));
    filled.close();

    filled
}
