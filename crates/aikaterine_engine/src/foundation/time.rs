//! Frame timing

use std::time::Instant;

/// Measures the time between consecutive frames
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame: Instant,
    delta_time: f32,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Start timing from now
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Mark the start of a new frame and return the seconds since the last one
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Seconds between the last two ticks
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
