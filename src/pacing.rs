use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame loop at a fixed rate by sleeping out the rest of each frame.
///
/// `next_frame().await` only waits for the display's vsync, which is usually
/// faster than the game's fixed step. The physics has no time scaling, so the
/// loop must not run faster than `FRAME_RATE`; this sleep is what enforces it.
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        FramePacer {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Blocks until the next frame boundary and returns the time since the last tick.
    pub fn tick(&mut self) -> Duration {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        delta
    }
}
