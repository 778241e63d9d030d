//! Abstract drawing surface
//!
//! The core never talks to a concrete rasterizer. It draws through the
//! [`Surface`] capability trait and obtains exclusive per-frame access
//! through a [`SurfaceProvider`], mirroring an acquire/present swapchain
//! bracket. A provider is allowed to have no surface ready; the loop treats
//! that as "skip this frame", never as an error.

use crate::sim::Rect;

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Draw capabilities the engine needs from a drawing target.
///
/// Coordinates are in pixels with the origin at the top-left corner and y
/// growing downward.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Color);
    /// Filled circle centered at `(cx, cy)`.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    /// Filled axis-aligned rectangle.
    fn fill_rect(&mut self, rect: &Rect, color: Color);
    /// Text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color, size: f32);
    /// Bounding box the given text would occupy, anchored at the origin.
    fn measure_text(&self, text: &str, size: f32) -> Rect;
}

/// Hands out exclusive access to a drawing surface, one frame at a time.
///
/// `acquire` may legitimately return `None` (surface not ready yet, window
/// being torn down); callers retry on a later frame. Every acquired surface
/// must be given back through `present`.
pub trait SurfaceProvider {
    type Target: Surface;

    fn acquire(&mut self) -> Option<Self::Target>;
    fn present(&mut self, surface: Self::Target);
}

/// A surface that draws nowhere. Used by headless demos and tests.
#[derive(Debug, Clone)]
pub struct NullSurface {
    width: f32,
    height: f32,
}

impl NullSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Surface for NullSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, _color: Color) {}

    fn fill_circle(&mut self, _cx: f32, _cy: f32, _radius: f32, _color: Color) {}

    fn fill_rect(&mut self, _rect: &Rect, _color: Color) {}

    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _color: Color, _size: f32) {}

    fn measure_text(&self, text: &str, size: f32) -> Rect {
        // Fixed-advance metrics; good enough to center a label.
        Rect::from_size(0.0, 0.0, text.chars().count() as f32 * size * 0.6, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_surface_text_metrics() {
        let surface = NullSurface::new(480.0, 800.0);
        let short = surface.measure_text("Hi", 48.0);
        let long = surface.measure_text("You won!", 48.0);
        assert!(long.width() > short.width());
        assert_eq!(long.height(), 48.0);
        // Anchored at the origin so callers can center from the box alone
        assert_eq!(long.left, 0.0);
        assert_eq!(long.top, 0.0);
    }
}
