//! Error types for the game core
//!
//! The taxonomy is deliberately small: the only recoverable condition is a
//! missing surface, and the loop already handles that by skipping the frame.

use thiserror::Error;

/// Errors the game core can produce.
#[derive(Debug, Error)]
pub enum RollerError {
    /// The engine needs a positive drawing area to lay out walls and clamp
    /// the ball; anything else is a caller bug.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurfaceSize { width: f32, height: f32 },

    /// The provider had no surface to hand out during the priming acquire.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,

    /// The OS refused to start the loop thread.
    #[error("failed to spawn game thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),
}
