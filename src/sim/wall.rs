//! Horizontally oscillating wall obstacles
//!
//! A wall is an axis-aligned rectangle of fixed size (a fraction of the
//! surface) that slides left and right by a signed step, bouncing
//! elastically off the surface edges. The boundary correction happens in
//! the same `move_step` call that crossed the bound, so callers never
//! observe an overshoot.

use crate::consts::{WALL_HEIGHT_DIVISOR, WALL_WIDTH_DIVISOR};
use crate::sim::Rect;
use crate::surface::{Color, Surface};

/// Direction a wall starts moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A horizontally oscillating wall obstacle.
#[derive(Debug, Clone)]
pub struct Wall {
    rect: Rect,
    /// Signed per-frame horizontal displacement; the sign encodes the
    /// current direction and flips on each bounce.
    step: f32,
    color: Color,
    surface_width: f32,
}

impl Wall {
    /// Build a wall at the requested position, clamped so the rectangle
    /// fits fully on-screen. Size is fixed at `surface_width / 6` by
    /// `surface_height / 20` and never changes afterwards.
    pub fn new(
        x: f32,
        y: f32,
        direction: Direction,
        step: f32,
        surface_width: f32,
        surface_height: f32,
        color: Color,
    ) -> Self {
        let width = surface_width / WALL_WIDTH_DIVISOR;
        let height = surface_height / WALL_HEIGHT_DIVISOR;
        let x = x.min(surface_width - width).max(0.0);
        let y = y.min(surface_height - height).max(0.0);
        let step = match direction {
            Direction::Right => step.abs(),
            Direction::Left => -step.abs(),
        };
        Self {
            rect: Rect::from_size(x, y, width, height),
            step,
            color,
            surface_width,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(rect: Rect, step: f32, color: Color, surface_width: f32) -> Self {
        Self {
            rect,
            step,
            color,
            surface_width,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Current signed step; the sign is the current direction.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Move the wall horizontally to `x_target` (clamped on-screen). The
    /// vertical row never changes after construction, and the wall resumes
    /// moving in whatever direction it was already going.
    pub fn relocate(&mut self, x_target: f32) {
        let x = x_target.clamp(0.0, self.surface_width - self.rect.width());
        self.rect.set_left(x);
    }

    /// One frame of horizontal motion with elastic bouncing: on crossing a
    /// bound the rectangle snaps to that bound and the step flips sign.
    pub fn move_step(&mut self) {
        self.rect.translate(self.step, 0.0);
        if self.rect.right > self.surface_width {
            self.rect.set_left(self.surface_width - self.rect.width());
            self.step = -self.step;
        } else if self.rect.left < 0.0 {
            self.rect.set_left(0.0);
            self.step = -self.step;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(&self.rect, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const W: f32 = 480.0;
    const H: f32 = 800.0;

    #[test]
    fn test_construction_fixed_fraction_size() {
        let wall = Wall::new(0.0, 200.0, Direction::Right, 10.0, W, H, Color::WHITE);
        assert_eq!(wall.rect().width(), W / 6.0);
        assert_eq!(wall.rect().height(), H / 20.0);
    }

    #[test]
    fn test_construction_clamps_target_on_screen() {
        let wall = Wall::new(10_000.0, 200.0, Direction::Left, 10.0, W, H, Color::WHITE);
        assert_eq!(wall.rect().right, W);
        assert_eq!(wall.rect().top, 200.0);
        assert_eq!(wall.step(), -10.0);
    }

    #[test]
    fn test_move_flips_at_right_bound_without_overshoot() {
        let mut wall = Wall::new(10_000.0, 100.0, Direction::Right, 10.0, W, H, Color::WHITE);
        // Pinned with right == surface width and still moving right
        assert_eq!(wall.rect().right, W);
        assert_eq!(wall.step(), 10.0);

        wall.move_step();
        assert_eq!(wall.rect().right, W);
        assert_eq!(wall.step(), -10.0);

        // Next move walks away from the bound
        wall.move_step();
        assert_eq!(wall.rect().right, W - 10.0);
    }

    #[test]
    fn test_move_flips_at_left_bound() {
        let mut wall = Wall::new(0.0, 100.0, Direction::Left, 10.0, W, H, Color::WHITE);
        wall.move_step();
        assert_eq!(wall.rect().left, 0.0);
        assert_eq!(wall.step(), 10.0);
    }

    #[test]
    fn test_relocate_keeps_row_and_direction() {
        let mut wall = Wall::new(0.0, 300.0, Direction::Left, 10.0, W, H, Color::WHITE);
        wall.relocate(123.0);
        assert_eq!(wall.rect().left, 123.0);
        assert_eq!(wall.rect().top, 300.0);
        assert_eq!(wall.step(), -10.0);

        // Out-of-range targets clamp so the wall stays on-screen
        wall.relocate(-50.0);
        assert_eq!(wall.rect().left, 0.0);
        wall.relocate(W * 2.0);
        assert_eq!(wall.rect().right, W);
    }

    proptest! {
        #[test]
        fn prop_wall_never_leaves_surface(
            start_x in 0.0f32..W,
            step in 1.0f32..60.0,
            start_right in any::<bool>(),
            moves in 0usize..500,
        ) {
            let direction = if start_right { Direction::Right } else { Direction::Left };
            let mut wall = Wall::new(start_x, 100.0, direction, step, W, H, Color::WHITE);
            for _ in 0..moves {
                wall.move_step();
                prop_assert!(wall.rect().left >= 0.0);
                prop_assert!(wall.rect().right <= W);
            }
        }
    }
}
