//=========================================================================
// Frame Clock
//=========================================================================
//
// Fixed-rate pacing for the logic loop.
//
// Each frame: `begin_frame()` measures the time since the previous frame
// (capped at `max_dt` so a hitch cannot produce a huge step), the loop
// runs its tick, then `end_frame()` sleeps off the rest of the frame
// budget.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use log::trace;

//=== FrameClock ==========================================================

/// Fixed-rate frame pacer producing capped delta times.
#[derive(Debug)]
pub struct FrameClock {
    frame_duration: Duration,
    max_dt: f32,
    last_frame: Instant,
    frame_start: Instant,
}

impl FrameClock {
    /// Creates a clock targeting `fps` frames per second.
    ///
    /// # Panics
    ///
    /// Panics if `fps` or `max_dt` is not positive.
    pub fn new(fps: f64, max_dt: f32) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        assert!(max_dt > 0.0, "max_dt must be positive, got {}", max_dt);

        let now = Instant::now();
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / fps),
            max_dt,
            last_frame: now,
            frame_start: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }

    /// Starts a frame and returns the capped seconds since the last one.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_start = now;
        self.cap(elapsed)
    }

    /// Sleeps for whatever is left of this frame's budget.
    pub fn end_frame(&self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            thread::sleep(self.frame_duration - elapsed);
        } else {
            trace!("Frame overran budget by {:?}", elapsed - self.frame_duration);
        }
    }

    /// Converts an elapsed duration to seconds, capped at `max_dt`.
    pub fn cap(&self, elapsed: Duration) -> f32 {
        elapsed.as_secs_f32().min(self.max_dt)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
