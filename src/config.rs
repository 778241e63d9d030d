//! Tunable game parameters
//!
//! Structural ratios (wall sizing, row spacing) live in [`crate::consts`];
//! everything a caller might reasonably want to change per session lives
//! here.

use crate::consts::*;
use crate::surface::Color;

/// Colors for the fixed set of drawable things.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub ball: Color,
    pub wall: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            ball: Color::rgb(220, 40, 40),
            wall: Color::rgb(160, 160, 160),
            text: Color::rgb(60, 220, 60),
        }
    }
}

/// Tunable game parameters.
#[derive(Debug, Clone)]
pub struct RollerConfig {
    /// Number of oscillating walls
    pub wall_count: usize,
    /// Wall horizontal speed (pixels per frame)
    pub wall_step: f32,
    /// Ball radius (pixels)
    pub ball_radius: f32,
    /// Gap between the top edge and the spawned ball, beyond the radius
    pub spawn_margin: f32,
    /// Draw colors
    pub palette: Palette,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            wall_count: WALL_COUNT,
            wall_step: DEFAULT_WALL_STEP,
            ball_radius: DEFAULT_BALL_RADIUS,
            spawn_margin: DEFAULT_SPAWN_MARGIN,
            palette: Palette::default(),
        }
    }
}
