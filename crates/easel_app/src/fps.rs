//! Frame pacing and the FPS estimate

use std::time::{Duration, Instant};

/// Computes how long to sleep so frames start at most `target_fps` times
/// a second
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpsGovernor {
    frame_budget: Option<Duration>,
}

impl FpsGovernor {
    /// `target_fps == 0` means uncapped
    pub fn new(target_fps: u32) -> Self {
        let frame_budget = (target_fps > 0)
            .then(|| Duration::from_nanos(1_000_000_000 / u64::from(target_fps)));
        Self { frame_budget }
    }

    pub fn frame_budget(&self) -> Option<Duration> {
        self.frame_budget
    }

    /// Time left in the frame budget after `elapsed`, if any
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame_budget
            .and_then(|budget| budget.checked_sub(elapsed))
            .filter(|pause| !pause.is_zero())
    }
}

/// Rolling FPS estimate, refreshed every `sample` presented frames
#[derive(Clone, Debug)]
pub struct FpsCounter {
    sample: u32,
    frames: u32,
    window_start: Instant,
    fps: u32,
}

impl FpsCounter {
    pub fn new(sample: u32, now: Instant) -> Self {
        Self {
            sample: sample.max(1),
            frames: 0,
            window_start: now,
            fps: 0,
        }
    }

    /// Last computed estimate; stale until the next full sample
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Count a presented frame; returns the new estimate when one is computed
    pub fn frame_presented(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        if self.frames < self.sample {
            return None;
        }

        let secs = now.duration_since(self.window_start).as_secs_f64();
        if secs > 0.0 {
            self.fps = (f64::from(self.frames) / secs) as u32;
        }
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }
}
