//! Simulation module
//!
//! Shape motion is a fixed per-tick step:
//! - Speeds are in pixels per tick, never scaled by frame time
//! - The app drives ticks at a fixed rate through `FixedStep`
//! - No rendering or platform dependencies

pub mod clock;
pub mod step;

pub use clock::FixedStep;
pub use step::{Viewport, step, step_scene};
