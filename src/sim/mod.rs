//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One step per `update` call, no wall-clock time
//! - Seeded RNG only
//! - No platform dependencies; drawing goes through the `Surface` trait

pub mod ball;
pub mod game;
pub mod rect;
pub mod wall;

pub use ball::Ball;
pub use game::{GamePhase, RollerGame};
pub use rect::Rect;
pub use wall::{Direction, Wall};
