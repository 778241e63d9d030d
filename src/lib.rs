//! Tilt Roller - a tilt-controlled falling-ball arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, walls, game state)
//! - `surface`: Abstract drawing surface and frame provider traits
//! - `runner`: Dedicated update/render loop thread
//! - `config`: Tunable game parameters
//!
//! The core owns the simulation and the loop; accelerometer input, shake
//! detection and the concrete rendering backend are external collaborators
//! that talk to it through [`GameThread`] and the [`surface`] traits.

pub mod config;
pub mod error;
pub mod runner;
pub mod sim;
pub mod surface;

pub use config::{Palette, RollerConfig};
pub use error::RollerError;
pub use runner::GameThread;
pub use sim::{GamePhase, RollerGame};

/// Game configuration constants
pub mod consts {
    /// Walls per session
    pub const WALL_COUNT: usize = 3;
    /// Wall width is the surface width divided by this
    pub const WALL_WIDTH_DIVISOR: f32 = 6.0;
    /// Wall height is the surface height divided by this
    pub const WALL_HEIGHT_DIVISOR: f32 = 20.0;

    /// Default per-frame horizontal wall displacement (pixels)
    pub const DEFAULT_WALL_STEP: f32 = 10.0;
    /// Default ball radius (pixels)
    pub const DEFAULT_BALL_RADIUS: f32 = 25.0;
    /// Default gap between the top edge and the spawned ball, beyond the radius
    pub const DEFAULT_SPAWN_MARGIN: f32 = 10.0;

    /// Text size of the end-of-round label
    pub const WIN_LABEL_SIZE: f32 = 48.0;
}
