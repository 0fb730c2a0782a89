//! Vertex types for 2D rendering

use glam::Vec2;

/// 2D vertex with position and packed 0RGB color
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: u32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: u32) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(p: Vec2, color: u32) -> Self {
        Self::new(p.x, p.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }
}

/// Colors for app chrome
pub mod colors {
    pub const PANEL_BACKGROUND: u32 = 0x0014_1420;
    pub const PANEL_ALPHA: u8 = 200;
    pub const SELECTION_OUTLINE: u32 = 0x00FF_FF66;
}
