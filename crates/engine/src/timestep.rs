//! Fixed-timestep accumulator
//!
//! Elapsed wall time is added to an accumulator. A poll runs at most one
//! frame, and only once the accumulator holds strictly more than one step;
//! the step is then subtracted and the remainder carried. A stalled host
//! therefore catches up one frame per poll instead of drifting.

use std::time::Duration;

use crate::types::FRAME_MICROS;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulated: Duration,
}

impl FixedTimestep {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulated: Duration::ZERO,
        }
    }

    /// 60 Hz (16 666 µs per frame)
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_micros(FRAME_MICROS))
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time carried toward the next frame
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Wall time still missing before the next frame is due
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulated)
    }

    /// Add elapsed time without running anything
    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulated += elapsed;
    }

    /// True once strictly more than one step has accumulated
    pub fn is_due(&self) -> bool {
        self.accumulated > self.step
    }

    /// Take one step out of the accumulator; a no-op unless a frame is due
    pub fn consume(&mut self) -> bool {
        if self.is_due() {
            self.accumulated -= self.step;
            true
        } else {
            false
        }
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::sixty_hz()
    }
}
