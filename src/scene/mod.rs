//! Scene description loaded from the config file
//!
//! The scene owns every shape. Order in `shapes` is the order they appear in
//! the file and is used for both drawing and panel selection.

pub mod parser;
pub mod shape;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;

pub use shape::{Aabb, Channel, Color, Shape, ShapeKind};

/// Window size in pixels (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Font used for labels and the debug panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    pub path: PathBuf,
    pub size: u32,
    pub color: Color,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FONT_PATH),
            size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
        }
    }
}

/// Everything the config file describes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub window: WindowConfig,
    pub font: FontConfig,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Read and parse a config file
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// stray Latin-1 comment does not stop the file from loading.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| crate::SceneError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let scene = Self::parse(&text)?;
        log::info!(
            "Loaded scene from {}: {}x{} window, {} shapes",
            path.display(),
            scene.window.width,
            scene.window.height,
            scene.shapes.len()
        );
        Ok(scene)
    }

    /// Parse config text
    pub fn parse(text: &str) -> crate::Result<Self> {
        parser::parse_scene(text)
    }

    /// Viewport the simulation bounces shapes inside
    pub fn viewport(&self) -> crate::sim::Viewport {
        crate::sim::Viewport::new(self.window.width as f32, self.window.height as f32)
    }

    pub fn visible_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.visible).count()
    }
}
