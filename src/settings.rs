//! Runtime preferences
//!
//! Read once at startup from an optional JSON file. Missing fields take their
//! defaults, and a missing or broken file falls back to defaults entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TICK_HZ, MAX_SUBSTEPS};
use crate::scene::Color;

/// Environment variable overriding `tick_hz`
pub const TICK_HZ_ENV: &str = "SHAPE_BOUNCE_TICK_HZ";

/// App settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Logical ticks per second
    pub tick_hz: f32,
    /// Most ticks run in a single frame
    pub max_substeps: u32,

    // === Display ===
    /// Frame rate cap for the window
    pub target_fps: usize,
    /// Clear color
    pub background: Color,
    /// Show the debug panel at startup
    pub show_panel: bool,
    /// Draw shape names at startup
    pub draw_labels: bool,

    // === Panel step sizes ===
    /// Velocity change per key press (pixels per tick)
    pub velocity_step: f32,
    /// Color channel change per key press
    pub color_step: u8,
    /// Geometry scale factor per key press (> 1)
    pub scale_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            max_substeps: MAX_SUBSTEPS,

            target_fps: 60,
            background: Color::BLACK,
            show_panel: true,
            draw_labels: true,

            velocity_step: 0.5,
            color_step: 8,
            scale_step: 1.1,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read settings file: {}", e))?;

        serde_json::from_str(&content).map_err(|e| format!("Failed to parse settings file: {}", e))
    }

    /// Load from `path` if it exists, otherwise defaults; then apply env overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let mut settings = if path.exists() {
            match Self::load_from_file(path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("{} ({}), using defaults", e, path.display());
                    Self::default()
                }
            }
        } else {
            log::info!("Using default settings");
            Self::default()
        };
        settings.merge_with_env();
        settings.sanitize();
        settings
    }

    /// Apply environment variable overrides
    pub fn merge_with_env(&mut self) {
        if let Ok(value) = std::env::var(TICK_HZ_ENV) {
            self.apply_tick_hz(&value);
        }
    }

    fn apply_tick_hz(&mut self, value: &str) {
        match value.trim().parse::<f32>() {
            Ok(hz) => self.tick_hz = hz,
            Err(_) => log::warn!("Ignoring {}={:?}: not a number", TICK_HZ_ENV, value),
        }
    }

    /// Pull out-of-range values back to something usable
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if !(self.tick_hz.is_finite() && self.tick_hz > 0.0) {
            self.tick_hz = defaults.tick_hz;
        }
        self.max_substeps = self.max_substeps.max(1);
        if !(self.scale_step.is_finite() && self.scale_step > 1.0) {
            self.scale_step = defaults.scale_step;
        }
        if !self.velocity_step.is_finite() {
            self.velocity_step = defaults.velocity_step;
        }
        self.velocity_step = self.velocity_step.abs();
    }
}
