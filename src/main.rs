//! Tilt Roller entry point
//!
//! Headless demo: runs the game loop against a null surface, feeds it a
//! scripted tilt, shakes once for a new round and shuts down. Real hosts
//! supply their own `SurfaceProvider` and accelerometer plumbing.

use std::thread;
use std::time::Duration;

use tilt_roller::surface::{NullSurface, SurfaceProvider};
use tilt_roller::{GameThread, RollerConfig};

/// Provider that always hands out a null surface of a fixed size.
struct NullProvider {
    width: f32,
    height: f32,
}

impl SurfaceProvider for NullProvider {
    type Target = NullSurface;

    fn acquire(&mut self) -> Option<NullSurface> {
        Some(NullSurface::new(self.width, self.height))
    }

    fn present(&mut self, _surface: NullSurface) {}
}

fn main() {
    env_logger::init();
    log::info!("Tilt Roller (headless demo) starting...");

    let provider = NullProvider {
        width: 480.0,
        height: 800.0,
    };
    let game = match GameThread::spawn(provider, RollerConfig::default(), 0xB411) {
        Ok(game) => game,
        Err(err) => {
            log::error!("failed to start game loop: {err}");
            return;
        }
    };

    // Tilt steadily downward for a moment, then shake for a new round.
    game.submit_velocity(0.0, 4.0);
    thread::sleep(Duration::from_millis(500));

    log::info!("shake: starting a new round");
    game.trigger_reset();
    game.submit_velocity(1.5, 4.0);
    thread::sleep(Duration::from_millis(500));

    game.stop();
    log::info!("demo finished");
}
