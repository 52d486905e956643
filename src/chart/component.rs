//! Chart widgets implementing the crate's `Drawable` trait
//!
//! [`Chart`] owns the data, the on-screen frame and the current reveal
//! progress, and renders a fresh [`ChartFrame`] on every draw.
//! [`GridPanel`] is the same background grid without any series.

extern crate alloc;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, error};

use crate::ui::Drawable;

use super::ChartResult;
use super::constants::COLOR_PANEL_BACKGROUND;
use super::grid::{GridConfig, draw_grid, grid_lines};
use super::render::{ChartConfig, ChartFrame, render};
use super::series::{DataPoint, InterpolationType};
use super::viewport::{DataBounds, DrawSize};

/// Animated line/area chart
pub struct Chart {
    /// On-screen frame of the chart
    bounds: Rectangle,
    /// Data in domain space, in insertion order
    points: Vec<DataPoint>,
    /// Geometry and style settings
    config: ChartConfig,
    /// Reveal fraction in `[0, 1]`
    progress: f32,
    /// Dirty flag for rendering optimization
    dirty: bool,
}

impl Chart {
    /// Create a chart for the given data
    ///
    /// The data is checked once here (non-empty, finite, non-zero ranges),
    /// so later draws can only fail on an unusable frame size.
    pub fn new(bounds: Rectangle, points: &[DataPoint]) -> ChartResult<Self> {
        let data_bounds = DataBounds::from_points(points)?;
        debug!("Chart created with {} points, {:?}", points.len(), data_bounds);

        Ok(Self {
            bounds,
            points: points.to_vec(),
            config: ChartConfig::default(),
            progress: 0.0,
            dirty: true,
        })
    }

    /// Set the chart configuration
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Move or resize the chart frame
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    /// Update the reveal fraction
    ///
    /// Values are clamped to `[0, 1]`; the chart only becomes dirty when the
    /// stored value actually changes.
    pub fn set_progress(&mut self, progress: f32) {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        if progress != self.progress {
            self.progress = progress;
            self.dirty = true;
        }
    }

    /// Switch between linear and smooth curves
    pub fn set_interpolation(&mut self, interpolation: InterpolationType) {
        if self.config.interpolation != interpolation {
            self.config.interpolation = interpolation;
            self.dirty = true;
        }
    }

    /// Current reveal fraction
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Chart configuration
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Data points in insertion order
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Render the draw commands for the current frame size and progress
    pub fn frame(&self) -> ChartResult<ChartFrame> {
        render(
            &self.points,
            DrawSize::from(self.bounds.size),
            self.progress,
            &self.config,
        )
    }

    /// Draw background and grid only, used when the frame cannot be rendered
    fn draw_empty<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        display.fill_solid(&self.bounds, self.config.background)?;
        let lines = grid_lines(&self.config.grid, DrawSize::from(self.bounds.size));
        draw_grid(&lines, &self.config.grid, self.bounds, display)
    }
}

impl Drawable for Chart {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        match self.frame() {
            Ok(frame) => frame.draw(self.bounds.top_left, display),
            Err(e) => {
                error!("Chart frame {:?} could not be rendered: {}", self.bounds, e);
                self.draw_empty(display)
            }
        }
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Background grid on a solid panel, without any data
pub struct GridPanel {
    /// On-screen frame of the panel
    bounds: Rectangle,
    /// Grid configuration
    grid: GridConfig,
    /// Panel fill color
    background: Rgb565,
    /// Dirty flag for rendering optimization
    dirty: bool,
}

impl GridPanel {
    /// Create a grid panel with the default grid
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            grid: GridConfig::default(),
            background: COLOR_PANEL_BACKGROUND,
            dirty: true,
        }
    }

    /// Set the panel background color
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background = color;
        self
    }

    /// Set the grid configuration
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }
}

impl Drawable for GridPanel {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        display.fill_solid(&self.bounds, self.background)?;
        let lines = grid_lines(&self.grid, DrawSize::from(self.bounds.size));
        draw_grid(&lines, &self.grid, self.bounds, display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
