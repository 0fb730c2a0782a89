//! Per-tick shape movement and edge reflection

use crate::scene::{Scene, Shape};

/// Area shapes bounce inside, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// True when an extent `[min, max]` pokes out of `[0, limit]`
#[inline]
fn out_of_bounds(min: f32, max: f32, limit: f32) -> bool {
    min < 0.0 || max > limit
}

/// Advance one shape by one tick
///
/// Position moves by the full velocity first. Each axis whose bounding box
/// then crosses a viewport edge has its velocity negated. Position is not
/// pushed back inside, so a fast shape can overshoot an edge for a tick.
pub fn step(shape: &mut Shape, viewport: Viewport) {
    shape.pos += shape.vel;

    let bb = shape.bounding_box();
    if out_of_bounds(bb.min.x, bb.max.x, viewport.width) {
        shape.vel.x = -shape.vel.x;
    }
    if out_of_bounds(bb.min.y, bb.max.y, viewport.height) {
        shape.vel.y = -shape.vel.y;
    }
}

/// Advance every visible shape by one tick, in list order
pub fn step_scene(scene: &mut Scene) {
    let viewport = scene.viewport();
    for shape in scene.shapes.iter_mut().filter(|s| s.visible) {
        step(shape, viewport);
    }
}
