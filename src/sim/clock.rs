//! Fixed-rate tick clock
//!
//! Shape speeds are pixels per tick, so the app runs ticks at a constant
//! logical rate no matter how fast frames are presented.

use crate::consts::{DEFAULT_TICK_HZ, MAX_FRAME_DT, MAX_SUBSTEPS};

/// Accumulates frame time and hands out whole ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    /// Seconds per tick
    dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_HZ, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    /// Non-positive rates fall back to the default rate
    pub fn new(tick_hz: f32, max_substeps: u32) -> Self {
        let tick_hz = if tick_hz.is_finite() && tick_hz > 0.0 {
            tick_hz
        } else {
            log::warn!("Invalid tick rate {}, using {}", tick_hz, DEFAULT_TICK_HZ);
            DEFAULT_TICK_HZ
        };
        Self {
            dt: 1.0 / tick_hz,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Add one frame's elapsed time and return how many ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += frame_dt;

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < self.max_substeps {
            self.accumulator -= self.dt;
            ticks += 1;
        }

        // Drop any backlog the substep cap left behind
        if ticks == self.max_substeps && self.accumulator >= self.dt {
            log::debug!("Tick backlog of {:.3}s dropped", self.accumulator);
            self.accumulator %= self.dt;
        }
        ticks
    }

    /// Forget accumulated time (after a pause)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
