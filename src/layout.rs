//! Screen layout for the chart frame
//!
//! The chart sits inside the screen with a uniform padding, keeps a fixed
//! width/height ratio, and is centred in the remaining space.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_layout::prelude::*;

/// Padding between the screen edge and the chart frame in pixels
pub const CHART_PADDING_PX: u32 = 8;

/// Width/height ratio of the chart frame (3:2)
pub const CHART_ASPECT_RATIO: f32 = 3.0 / 2.0;

/// Largest centred rectangle of the given aspect ratio inside a padded area
///
/// The width is tried first; if the matching height does not fit, the
/// height is used and the width derived from it. A non-positive or NaN
/// ratio yields a zero-sized frame at the padded area's top-left corner.
pub fn chart_frame(screen: Rectangle, padding: u32, aspect_ratio: f32) -> Rectangle {
    let padded = screen.offset(-(padding.min(i32::MAX as u32) as i32));

    if !(aspect_ratio > 0.0) || padded.is_zero_sized() {
        return Rectangle::new(padded.top_left, Size::zero());
    }

    let available = padded.size;
    let mut width = available.width;
    let mut height = (available.width as f32 / aspect_ratio) as u32;

    if height > available.height {
        height = available.height;
        width = ((available.height as f32 * aspect_ratio) as u32).min(available.width);
    }

    Rectangle::new(padded.top_left, Size::new(width, height)).align_to(
        &padded,
        horizontal::Center,
        vertical::Center,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u32, height: u32) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(width, height))
    }

    fn contains(outer: &Rectangle, inner: &Rectangle) -> bool {
        let Some(inner_br) = inner.bottom_right() else {
            return true;
        };
        outer.contains(inner.top_left) && outer.contains(inner_br)
    }

    #[test]
    fn test_landscape_screen_is_width_limited() {
        let frame = chart_frame(screen(320, 240), CHART_PADDING_PX, CHART_ASPECT_RATIO);

        assert_eq!(frame.size, Size::new(304, 202));
        assert_eq!(frame.top_left.x, 8);
        assert!(contains(&screen(320, 240).offset(-8), &frame));
    }

    #[test]
    fn test_wide_screen_is_height_limited() {
        let frame = chart_frame(screen(500, 116), CHART_PADDING_PX, CHART_ASPECT_RATIO);

        assert_eq!(frame.size, Size::new(150, 100));
        assert_eq!(frame.top_left.y, 8);
        assert!(contains(&screen(500, 116).offset(-8), &frame));
        // Horizontally centred: equal space left and right (within a pixel)
        let left = frame.top_left.x - 8;
        let right = (500 - 8) - (frame.top_left.x + 150);
        assert!((left - right) <= 1 && (right - left) <= 1);
    }

    #[test]
    fn test_screen_smaller_than_padding() {
        let frame = chart_frame(screen(10, 10), 8, CHART_ASPECT_RATIO);

        assert!(frame.is_zero_sized());
    }

    #[test]
    fn test_invalid_ratio_gives_empty_frame() {
        let frame = chart_frame(screen(100, 100), 0, 0.0);

        assert!(frame.is_zero_sized());
    }
}
