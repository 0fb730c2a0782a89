//! Shape records: the things that bounce around the window

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CIRCLE_SEGMENTS, MIN_CIRCLE_SEGMENTS};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0RGB, the framebuffer pixel format
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Add `delta` to one channel, saturating at 0 and 255
    pub fn nudge(&mut self, channel: Channel, delta: i16) {
        let slot = match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        };
        *slot = (*slot as i16).saturating_add(delta).clamp(0, 255) as u8;
    }
}

/// One color channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Variant-specific geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    Circle { radius: f32, segments: u32 },
    Rectangle { size: Vec2 },
}

impl ShapeKind {
    pub fn circle(radius: f32) -> Self {
        ShapeKind::Circle {
            radius,
            segments: CIRCLE_SEGMENTS,
        }
    }

    pub fn rectangle(width: f32, height: f32) -> Self {
        ShapeKind::Rectangle {
            size: Vec2::new(width, height),
        }
    }

    /// Extent of the bounding box
    pub fn extent(&self) -> Vec2 {
        match *self {
            ShapeKind::Circle { radius, .. } => Vec2::splat(radius * 2.0),
            ShapeKind::Rectangle { size } => size,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Circle { .. } => "Circle",
            ShapeKind::Rectangle { .. } => "Rectangle",
        }
    }

    /// Clamp fields back into their valid ranges
    fn sanitized(self) -> Self {
        match self {
            ShapeKind::Circle { radius, segments } => ShapeKind::Circle {
                radius: radius.max(0.0),
                segments: segments.max(MIN_CIRCLE_SEGMENTS),
            },
            ShapeKind::Rectangle { size } => ShapeKind::Rectangle {
                size: size.max(Vec2::ZERO),
            },
        }
    }
}

/// A named shape with motion and appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub name: String,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub color: Color,
    #[serde(default = "visible_default")]
    pub visible: bool,
    pub kind: ShapeKind,
}

fn visible_default() -> bool {
    true
}

impl Shape {
    pub fn new(name: impl Into<String>, pos: Vec2, vel: Vec2, color: Color, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            pos,
            vel,
            color,
            visible: true,
            kind: kind.sanitized(),
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb {
            min: self.pos,
            max: self.pos + self.kind.extent(),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.bounding_box().center()
    }

    pub fn is_circle(&self) -> bool {
        matches!(self.kind, ShapeKind::Circle { .. })
    }

    /// Replace the geometry, keeping it non-negative
    pub fn with_geometry(mut self, kind: ShapeKind) -> Self {
        self.set_geometry(kind);
        self
    }

    pub fn set_geometry(&mut self, kind: ShapeKind) {
        self.kind = kind.sanitized();
    }

    /// Multiply every length of the geometry by `factor` (negative factors clamp to zero)
    pub fn scale_geometry(&mut self, factor: f32) {
        let factor = factor.max(0.0);
        self.kind = match self.kind {
            ShapeKind::Circle { radius, segments } => ShapeKind::Circle {
                radius: radius * factor,
                segments,
            },
            ShapeKind::Rectangle { size } => ShapeKind::Rectangle { size: size * factor },
        };
    }

    /// Change circle tessellation; rectangles ignore this
    pub fn adjust_segments(&mut self, delta: i32) {
        if let ShapeKind::Circle { radius, segments } = self.kind {
            let segments = (segments as i64 + delta as i64)
                .clamp(MIN_CIRCLE_SEGMENTS as i64, u32::MAX as i64) as u32;
            self.kind = ShapeKind::Circle { radius, segments };
        }
    }
}
