//! Heap-backed framebuffer with per-pixel change detection.
//!
//! Chart drawing can target this RAM buffer instead of the real display.
//! After drawing completes, only the rectangular region containing changed
//! pixels is flushed to the display in a single `fill_contiguous` call.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate.
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Create a new dirty rect covering a single pixel.
    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(
                (self.max_x - self.min_x + 1) as u32,
                (self.max_y - self.min_y + 1) as u32,
            ),
        )
    }
}

/// RGB565 framebuffer implementing `DrawTarget<Color = Rgb565>`.
///
/// Tracks a dirty bounding box so that only changed pixels are flushed to
/// the display.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a new framebuffer filled with `fill`.
    ///
    /// A freshly allocated buffer is clean: flushing it sends nothing until
    /// something is drawn.
    pub fn new(size: Size, fill: Rgb565) -> Self {
        let width = size.width as usize;
        let height = size.height as usize;

        Self {
            width,
            height,
            pixels: vec![fill; width * height],
            dirty: None,
        }
    }

    /// Read back a pixel, or `None` outside the buffer.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        let (x, y) = self.index_of(point)?;
        self.pixels.get(y * self.width + x).copied()
    }

    /// Bounding rectangle of pixels changed since the last flush.
    pub fn dirty_area(&self) -> Option<Rectangle> {
        self.dirty.map(DirtyRect::to_rectangle)
    }

    /// Mark every pixel as changed so the next flush sends the whole buffer.
    pub fn invalidate(&mut self) {
        if self.width > 0 && self.height > 0 {
            self.dirty = Some(DirtyRect {
                min_x: 0,
                min_y: 0,
                max_x: self.width - 1,
                max_y: self.height - 1,
            });
        }
    }

    fn index_of(&self, point: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Flush the dirty region to a display, then reset the dirty state.
    ///
    /// If nothing changed, this is a no-op.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        let area = rect.to_rectangle();
        let width = area.size.width as usize;

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            area.size.width, area.size.height, rect.min_x, rect.min_y
        );

        // Borrow the pixel slice so the closure captures a shared reference,
        // avoiding the `FnMut` escaping-reference issue with `&mut self`.
        let pixels = &self.pixels;
        let stride = self.width;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some((x, y)) = self.index_of(coord) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    /// Records every pixel written during a flush.
    struct Recorder {
        size: Size,
        writes: Vec<Pixel<Rgb565>>,
    }

    impl OriginDimensions for Recorder {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for Recorder {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.writes.extend(pixels);
            Ok(())
        }
    }

    #[test]
    fn test_new_buffer_is_clean() {
        let fb = FrameBuffer::new(Size::new(8, 4), Rgb565::BLACK);

        assert_eq!(fb.size(), Size::new(8, 4));
        assert_eq!(fb.dirty_area(), None);
        assert_eq!(fb.pixel(Point::new(7, 3)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(8, 0)), None);
        assert_eq!(fb.pixel(Point::new(-1, 0)), None);
    }

    #[test]
    fn test_dirty_rect_tracks_changes_only() {
        let mut fb = FrameBuffer::new(Size::new(10, 10), Rgb565::BLACK);

        // Same color as the existing pixels: nothing changes
        fb.fill_solid(&Rectangle::new(Point::zero(), Size::new(3, 3)), Rgb565::BLACK)
            .unwrap();
        assert_eq!(fb.dirty_area(), None);

        Pixel(Point::new(2, 3), Rgb565::RED).draw(&mut fb).unwrap();
        Pixel(Point::new(5, 1), Rgb565::RED).draw(&mut fb).unwrap();

        assert_eq!(
            fb.dirty_area(),
            Some(Rectangle::new(Point::new(2, 1), Size::new(4, 3)))
        );
    }

    #[test]
    fn test_draw_clips_to_buffer() {
        let mut fb = FrameBuffer::new(Size::new(4, 4), Rgb565::BLACK);

        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(Point::new(0, 0)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_flush_sends_dirty_region_once() {
        let mut fb = FrameBuffer::new(Size::new(6, 6), Rgb565::BLACK);
        let mut recorder = Recorder {
            size: Size::new(6, 6),
            writes: Vec::new(),
        };

        Pixel(Point::new(1, 1), Rgb565::BLUE).draw(&mut fb).unwrap();
        Pixel(Point::new(2, 2), Rgb565::BLUE).draw(&mut fb).unwrap();

        fb.flush(&mut recorder).unwrap();
        assert_eq!(recorder.writes.len(), 4);
        assert!(recorder.writes.contains(&Pixel(Point::new(2, 2), Rgb565::BLUE)));
        assert!(recorder.writes.contains(&Pixel(Point::new(2, 1), Rgb565::BLACK)));

        // Nothing left to send
        fb.flush(&mut recorder).unwrap();
        assert_eq!(recorder.writes.len(), 4);
    }

    #[test]
    fn test_invalidate_marks_whole_buffer() {
        let mut fb = FrameBuffer::new(Size::new(5, 3), Rgb565::BLACK);

        fb.invalidate();

        assert_eq!(
            fb.dirty_area(),
            Some(Rectangle::new(Point::zero(), Size::new(5, 3)))
        );
    }
}
