//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::scene::{Shape, ShapeKind};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: u32, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(segments as usize * 3);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rectangle(min: Vec2, size: Vec2, color: u32) -> Vec<Vertex> {
    let max = min + size;
    let tl = Vertex::at(min, color);
    let tr = Vertex::new(max.x, min.y, color);
    let bl = Vertex::new(min.x, max.y, color);
    let br = Vertex::at(max, color);

    // Two triangles
    vec![tl, tr, bl, bl, tr, br]
}

/// Triangles for a scene shape; circles are centered inside their bounding box
pub fn shape(shape: &Shape) -> Vec<Vertex> {
    let color = shape.color.to_u32();
    match shape.kind {
        ShapeKind::Circle { radius, segments } => circle(shape.center(), radius, color, segments),
        ShapeKind::Rectangle { size } => rectangle(shape.pos, size, color),
    }
}
