//! Shape Bounce - config-driven bouncing shapes with a live debug panel
//!
//! Core modules:
//! - `scene`: Scene description and the line-oriented config parser
//! - `sim`: Per-tick movement and edge reflection, fixed-step clock
//! - `panel`: Debug panel state and shape edits
//! - `renderer`: Software framebuffer rendering (shapes, text)
//! - `settings`: Runtime preferences
//! - `app`: Window and frame loop
//! - `cli`: Argument handling and process exit status

pub mod app;
pub mod cli;
pub mod error;
pub mod panel;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{Result, SceneError};
pub use panel::{DebugPanel, PanelAction, ShapeEdit};
pub use scene::{Color, FontConfig, Scene, Shape, ShapeKind, WindowConfig};
pub use settings::Settings;

/// Application configuration constants
pub mod consts {
    /// Scene file read when no path is given
    pub const DEFAULT_CONFIG_PATH: &str = "config.txt";
    /// Optional settings file read when no path is given
    pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

    /// Default logical tick rate (shape speeds are in pixels per tick)
    pub const DEFAULT_TICK_HZ: f32 = 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time the clock will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Circle tessellation
    pub const CIRCLE_SEGMENTS: u32 = 64;
    pub const MIN_CIRCLE_SEGMENTS: u32 = 3;

    /// Defaults used when the config has no Window/Font record
    pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
    pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;
    pub const DEFAULT_FONT_PATH: &str = "fonts/arial.ttf";
    pub const DEFAULT_FONT_SIZE: u32 = 18;
}
