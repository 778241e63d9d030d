//! Game engine: one ball, a fixed set of walls, terminal-state evaluation
//!
//! Two phases: `Playing` and `Over`. A wall hit and reaching the floor both
//! end the round with the same flag; whether the frozen round was a win is
//! recomputed from the ball's position (see [`RollerGame::has_won`]), which
//! keeps the engine free of a separate outcome code.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::RollerConfig;
use crate::consts::WIN_LABEL_SIZE;
use crate::error::RollerError;
use crate::sim::{Ball, Direction, Wall};
use crate::surface::Surface;

const WIN_LABEL: &str = "You won!";

/// Engine phase. `Over` covers both outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Over,
}

/// The game session: owns the ball and walls exclusively, advances the
/// simulation one step per `update` call.
#[derive(Debug)]
pub struct RollerGame {
    width: f32,
    height: f32,
    ball: Ball,
    walls: Vec<Wall>,
    phase: GamePhase,
    config: RollerConfig,
    rng: Pcg32,
}

impl RollerGame {
    /// Build the engine for a surface of the given size and enter the first
    /// round. Walls are laid out on evenly spaced rows
    /// (`height / (n + 1) * index`) with alternating initial directions.
    ///
    /// The surface must be positive on both axes and large enough to hold
    /// the ball; anything else is [`RollerError::InvalidSurfaceSize`].
    pub fn new(
        width: f32,
        height: f32,
        config: RollerConfig,
        seed: u64,
    ) -> Result<Self, RollerError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(RollerError::InvalidSurfaceSize { width, height });
        }
        // Clamping the ball needs room for its diameter on both axes.
        if width < config.ball_radius * 2.0 || height < config.ball_radius * 2.0 {
            return Err(RollerError::InvalidSurfaceSize { width, height });
        }

        let ball = Ball::new(config.ball_radius, config.palette.ball);
        let row_gap = height / (config.wall_count + 1) as f32;
        let walls = (1..=config.wall_count)
            .map(|index| {
                let direction = if index % 2 == 0 {
                    Direction::Right
                } else {
                    Direction::Left
                };
                Wall::new(
                    0.0,
                    row_gap * index as f32,
                    direction,
                    config.wall_step,
                    width,
                    height,
                    config.palette.wall,
                )
            })
            .collect();

        let mut game = Self {
            width,
            height,
            ball,
            walls,
            phase: GamePhase::Playing,
            config,
            rng: Pcg32::seed_from_u64(seed),
        };
        game.new_game();
        Ok(game)
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    #[inline]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// True once the ball has reached the floor. A round ended by a wall
    /// hit leaves this false.
    pub fn has_won(&self) -> bool {
        self.ball.bottom() >= self.height
    }

    /// Start a fresh round: ball back to the top center, every wall
    /// relocated to an independent random horizontal position. Wall rows
    /// and directions carry over from wherever the walls were.
    pub fn new_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.ball.set_center(
            self.width / 2.0,
            self.config.ball_radius + self.config.spawn_margin,
        );
        for wall in &mut self.walls {
            let x = self.rng.random_range(0.0..self.width);
            wall.relocate(x);
        }
        log::debug!("new round started");
    }

    /// Advance the simulation one frame. A frozen (`Over`) round ignores
    /// updates until `new_game` is called.
    pub fn update(&mut self, velocity: Vec2) {
        if self.phase == GamePhase::Over {
            return;
        }

        self.ball.move_by(velocity, self.width, self.height);
        for wall in &mut self.walls {
            wall.move_step();
        }

        // Terminal checks run strictly after all motion for the frame.
        if self.walls.iter().any(|wall| self.ball.intersects(wall)) {
            self.phase = GamePhase::Over;
            log::debug!("round over: wall hit");
        }
        if self.ball.bottom() >= self.height {
            self.phase = GamePhase::Over;
            log::debug!("round over: floor reached");
        }
    }

    /// Render the current frame. Never mutates game state.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(self.config.palette.background);
        self.ball.draw(surface);
        for wall in &self.walls {
            wall.draw(surface);
        }
        if self.has_won() {
            // Center the label from its measured box so font metrics don't
            // matter.
            let bounds = surface.measure_text(WIN_LABEL, WIN_LABEL_SIZE);
            let offset = bounds.center();
            surface.draw_text(
                WIN_LABEL,
                self.width / 2.0 - offset.x,
                self.height / 2.0 - offset.y,
                self.config.palette.text,
                WIN_LABEL_SIZE,
            );
        }
    }
}
