//! Dedicated update/render loop thread
//!
//! The loop owns the engine and the drawing surface; the input thread only
//! touches a handful of atomics. Each frame: consume a pending reset,
//! acquire the surface (skip the frame when it isn't ready), update with
//! the latest velocity, draw, present. There is no frame-rate cap and no
//! fixed timestep; the loop runs as fast as the surface allows.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread::JoinHandle;

use glam::Vec2;

use crate::config::RollerConfig;
use crate::error::RollerError;
use crate::sim::RollerGame;
use crate::surface::{Surface, SurfaceProvider};

/// State shared between the input thread and the loop thread.
///
/// The velocity components are two independent relaxed atomics. A torn read
/// (x and y from different input events) shows up as at most one frame of
/// imperceptible jitter; only the latest sample matters, so no lock.
struct Shared {
    vel_x: AtomicU32,
    vel_y: AtomicU32,
    running: AtomicBool,
    reset: AtomicBool,
}

/// Handle to the game loop thread.
///
/// Created with [`GameThread::spawn`]; dropped or [`stop`](Self::stop)ped,
/// it signals the loop and joins it. All methods are callable from the
/// input-owning thread while the loop runs.
pub struct GameThread {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl GameThread {
    /// Prime the provider to learn the surface size, build the engine for
    /// those dimensions and start the loop thread.
    ///
    /// The priming acquire reads width/height and releases the surface
    /// without drawing. A provider with no surface ready at this point is
    /// an error; once the loop runs, unavailability just skips frames.
    pub fn spawn<P>(mut provider: P, config: RollerConfig, seed: u64) -> Result<Self, RollerError>
    where
        P: SurfaceProvider + Send + 'static,
    {
        let surface = provider.acquire().ok_or(RollerError::SurfaceUnavailable)?;
        let (width, height) = (surface.width(), surface.height());
        provider.present(surface);

        let mut game = RollerGame::new(width, height, config, seed)?;

        let shared = Arc::new(Shared {
            vel_x: AtomicU32::new(0f32.to_bits()),
            vel_y: AtomicU32::new(0f32.to_bits()),
            running: AtomicBool::new(true),
            reset: AtomicBool::new(false),
        });

        let loop_shared = Arc::clone(&shared);
        let handle = std::thread::Builder::new()
            .name("roller-game".into())
            .spawn(move || {
                log::info!("game loop started ({width}x{height})");
                while loop_shared.running.load(Ordering::Relaxed) {
                    if loop_shared.reset.swap(false, Ordering::Relaxed) {
                        game.new_game();
                    }

                    // Surface not ready: skip the frame, retry immediately.
                    let Some(mut surface) = provider.acquire() else {
                        continue;
                    };

                    let velocity = Vec2::new(
                        f32::from_bits(loop_shared.vel_x.load(Ordering::Relaxed)),
                        f32::from_bits(loop_shared.vel_y.load(Ordering::Relaxed)),
                    );
                    game.update(velocity);
                    game.draw(&mut surface);
                    provider.present(surface);
                }
                log::info!("game loop stopped");
            })?;

        Ok(Self {
            shared,
            handle: Some(handle),
        })
    }

    /// Overwrite the stored tilt velocity with the latest sample.
    pub fn submit_velocity(&self, x: f32, y: f32) {
        self.shared.vel_x.store(x.to_bits(), Ordering::Relaxed);
        self.shared.vel_y.store(y.to_bits(), Ordering::Relaxed);
    }

    /// Request a fresh round ("shake"). Consumed by the loop at the top of
    /// its next frame; repeated triggers before then collapse into one.
    pub fn trigger_reset(&self) {
        self.shared.reset.store(true, Ordering::Relaxed);
    }

    /// Stop the loop at its next iteration boundary and join the thread.
    /// Never interrupts a frame mid-draw.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.shared.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("game loop thread panicked");
            }
        }
    }
}

impl Drop for GameThread {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;
    use crate::surface::Color;
    use std::sync::Mutex;
    use std::time::Duration;

    /// What the loop has drawn so far, observable from the test thread.
    #[derive(Default)]
    struct DrawLog {
        frames: u32,
        skipped_acquires: u32,
        last_circle: Option<(f32, f32)>,
        text_draws: u32,
    }

    #[derive(Clone)]
    struct ProbeSurface {
        width: f32,
        height: f32,
        log: Arc<Mutex<DrawLog>>,
    }

    impl Surface for ProbeSurface {
        fn width(&self) -> f32 {
            self.width
        }
        fn height(&self) -> f32 {
            self.height
        }
        fn clear(&mut self, _color: Color) {}
        fn fill_circle(&mut self, cx: f32, cy: f32, _radius: f32, _color: Color) {
            self.log.lock().unwrap().last_circle = Some((cx, cy));
        }
        fn fill_rect(&mut self, _rect: &Rect, _color: Color) {}
        fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _color: Color, _size: f32) {
            self.log.lock().unwrap().text_draws += 1;
        }
        fn measure_text(&self, text: &str, size: f32) -> Rect {
            Rect::from_size(0.0, 0.0, text.len() as f32 * size * 0.6, size)
        }
    }

    struct ProbeProvider {
        surface: ProbeSurface,
        /// Remaining acquires to refuse; writable from the test thread
        refuse: Arc<AtomicU32>,
    }

    impl SurfaceProvider for ProbeProvider {
        type Target = ProbeSurface;

        fn acquire(&mut self) -> Option<ProbeSurface> {
            if self
                .refuse
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
                .is_ok()
            {
                self.surface.log.lock().unwrap().skipped_acquires += 1;
                return None;
            }
            Some(self.surface.clone())
        }

        fn present(&mut self, _surface: ProbeSurface) {
            self.surface.log.lock().unwrap().frames += 1;
        }
    }

    fn probe(
        width: f32,
        height: f32,
        refuse_first: u32,
    ) -> (ProbeProvider, Arc<Mutex<DrawLog>>, Arc<AtomicU32>) {
        let log = Arc::new(Mutex::new(DrawLog::default()));
        let refuse = Arc::new(AtomicU32::new(refuse_first));
        let provider = ProbeProvider {
            surface: ProbeSurface {
                width,
                height,
                log: Arc::clone(&log),
            },
            refuse: Arc::clone(&refuse),
        };
        (provider, log, refuse)
    }

    fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
        for _ in 0..500 {
            if cond() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_loop_pumps_frames_and_stops() {
        let (provider, log, _refuse) = probe(480.0, 800.0, 0);
        let thread = GameThread::spawn(provider, RollerConfig::default(), 7).unwrap();

        assert!(wait_until(|| log.lock().unwrap().frames > 20));
        thread.stop();

        // No more frames after the join returned
        let frames = log.lock().unwrap().frames;
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(log.lock().unwrap().frames, frames);
    }

    #[test]
    fn test_velocity_reaches_engine() {
        let (provider, log, _refuse) = probe(480.0, 800.0, 0);
        let thread = GameThread::spawn(provider, RollerConfig::default(), 7).unwrap();

        // With zero velocity the ball sits at the spawn point
        assert!(wait_until(|| log.lock().unwrap().last_circle.is_some()));
        let (_, y0) = log.lock().unwrap().last_circle.unwrap();
        assert_eq!(y0, 35.0);

        thread.submit_velocity(0.0, 2.0);
        assert!(wait_until(|| {
            log.lock()
                .unwrap()
                .last_circle
                .is_some_and(|(_, y)| y > y0)
        }));
        thread.stop();
    }

    #[test]
    fn test_reset_restores_spawn_after_game_over() {
        let (provider, log, _refuse) = probe(480.0, 800.0, 0);
        let thread = GameThread::spawn(provider, RollerConfig::default(), 7).unwrap();

        // Slam the ball to the floor; the won label shows up once frozen
        thread.submit_velocity(0.0, 2000.0);
        assert!(wait_until(|| log.lock().unwrap().text_draws > 0));

        thread.submit_velocity(0.0, 0.0);
        // Re-trigger while polling: the relaxed stores give no ordering
        // between the velocity and the reset flag, so the first reset may
        // still be consumed alongside a stale velocity sample.
        assert!(wait_until(|| {
            thread.trigger_reset();
            log.lock()
                .unwrap()
                .last_circle
                .is_some_and(|(x, y)| x == 240.0 && y == 35.0)
        }));
        thread.stop();
    }

    #[test]
    fn test_priming_requires_a_surface() {
        let (provider, _log, _refuse) = probe(480.0, 800.0, 1);
        let result = GameThread::spawn(provider, RollerConfig::default(), 7);
        assert!(matches!(result, Err(RollerError::SurfaceUnavailable)));
    }

    #[test]
    fn test_unavailable_surface_skips_frames_then_recovers() {
        let (provider, log, refuse) = probe(480.0, 800.0, 0);
        let thread = GameThread::spawn(provider, RollerConfig::default(), 7).unwrap();
        assert!(wait_until(|| log.lock().unwrap().frames > 5));

        // Starve the loop for a burst of acquires; it must skip those
        // frames and carry on drawing once the surface is back.
        let frames_before = log.lock().unwrap().frames;
        refuse.store(50, Ordering::Relaxed);
        assert!(wait_until(|| log.lock().unwrap().skipped_acquires >= 50));
        assert!(wait_until(
            || log.lock().unwrap().frames > frames_before + 5
        ));
        thread.stop();
    }
}
