//! The falling player ball
//!
//! Motion rule: horizontal displacement is inverted relative to the raw
//! tilt vector (tilt-sensor handedness), vertical displacement is applied
//! directly, and the center is hard-clamped into the surface after every
//! move.

use glam::Vec2;

use crate::sim::Wall;
use crate::surface::{Color, Surface};

/// The player-controlled ball.
#[derive(Debug, Clone)]
pub struct Ball {
    center: Vec2,
    radius: f32,
    color: Color,
}

impl Ball {
    pub fn new(radius: f32, color: Color) -> Self {
        Self {
            center: Vec2::ZERO,
            radius,
            color,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Lowest point of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.radius
    }

    /// Place the center unconditionally. No clamping; the caller supplies a
    /// valid spawn point.
    pub fn set_center(&mut self, x: f32, y: f32) {
        self.center = Vec2::new(x, y);
    }

    /// Apply one frame of tilt displacement, then clamp the center into
    /// `[radius, dim - radius]` on both axes so the ball never leaves the
    /// surface.
    pub fn move_by(&mut self, velocity: Vec2, surface_width: f32, surface_height: f32) {
        self.center.x -= velocity.x;
        self.center.y += velocity.y;
        self.center.x = self.center.x.clamp(self.radius, surface_width - self.radius);
        self.center.y = self.center.y.clamp(self.radius, surface_height - self.radius);
    }

    /// Circle vs axis-aligned rectangle test.
    ///
    /// Clamps the center into the rectangle and compares the squared
    /// distance against `radius²` (strict). No square root taken.
    pub fn intersects(&self, wall: &Wall) -> bool {
        let nearest = wall.rect().clamp_point(self.center);
        self.center.distance_squared(nearest) < self.radius * self.radius
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.center.x, self.center.y, self.radius, self.color);
    }
}
