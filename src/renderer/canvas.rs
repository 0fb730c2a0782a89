//! Software canvas: packed u32 0RGB pixel buffer
//!
//! Pixel format matches what minifb presents: 0x00RRGGBB.

use glam::Vec2;

use super::vertex::Vertex;

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Mix `src` over `dst` with `alpha` in 0..=255
    #[inline]
    pub fn blend(src: u32, dst: u32, alpha: u8) -> u32 {
        match alpha {
            255 => src,
            0 => dst,
            a => {
                let a = a as u32;
                let inv = 255 - a;
                let mix = |shift: u32| {
                    let s = (src >> shift) & 0xFF;
                    let d = (dst >> shift) & 0xFF;
                    ((s * a + d * inv + 127) / 255) << shift
                };
                mix(16) | mix(8) | mix(0)
            }
        }
    }

    /// Blend one pixel; coordinates outside the canvas are ignored
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: u32, alpha: u8) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.pixels[idx] = Self::blend(color, self.pixels[idx], alpha);
    }

    /// Fill an axis-aligned rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, min: Vec2, size: Vec2, color: u32, alpha: u8) {
        let x0 = min.x.round().max(0.0) as usize;
        let y0 = min.y.round().max(0.0) as usize;
        let x1 = ((min.x + size.x).round().max(0.0) as usize).min(self.width);
        let y1 = ((min.y + size.y).round().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let row = y * self.width;
            for px in &mut self.pixels[row + x0.min(x1)..row + x1] {
                *px = Self::blend(color, *px, alpha);
            }
        }
    }

    /// Fill a triangle, sampling at pixel centers
    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: u32) {
        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let min = a.min(b).min(c).floor().max(Vec2::ZERO);
        let max = a.max(b).max(c).ceil();
        let x_end = (max.x.max(0.0) as usize).min(self.width);
        let y_end = (max.y.max(0.0) as usize).min(self.height);

        for y in (min.y as usize)..y_end {
            for x in (min.x as usize)..x_end {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(b, c, p);
                let w1 = edge(c, a, p);
                let w2 = edge(a, b, p);
                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };
                if inside {
                    self.pixels[y * self.width + x] = color;
                }
            }
        }
    }

    /// Fill a triangle list; each triangle takes its first vertex's color
    pub fn fill_triangles(&mut self, vertices: &[Vertex]) {
        for tri in vertices.chunks_exact(3) {
            self.fill_triangle(tri[0].pos(), tri[1].pos(), tri[2].pos(), tri[0].color);
        }
    }

    /// One-pixel rectangle outline
    pub fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: u32) {
        let max = min + size;
        self.fill_rect(min, Vec2::new(size.x, 1.0), color, 255);
        self.fill_rect(Vec2::new(min.x, max.y - 1.0), Vec2::new(size.x, 1.0), color, 255);
        self.fill_rect(min, Vec2::new(1.0, size.y), color, 255);
        self.fill_rect(Vec2::new(max.x - 1.0, min.y), Vec2::new(1.0, size.y), color, 255);
    }
}

/// Twice the signed area of (a, b, p)
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend() {
        assert_eq!(Canvas::blend(0x00FF_FFFF, 0, 255), 0x00FF_FFFF);
        assert_eq!(Canvas::blend(0x00FF_FFFF, 0x0012_3456, 0), 0x0012_3456);
        assert_eq!(Canvas::blend(0x00FF_0000, 0x0000_00FF, 128), 0x0080_007F);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(Vec2::new(-2.0, 2.0), Vec2::new(4.0, 10.0), 0x00AB_CDEF, 255);
        assert_eq!(canvas.pixel(0, 2), Some(0x00AB_CDEF));
        assert_eq!(canvas.pixel(1, 3), Some(0x00AB_CDEF));
        assert_eq!(canvas.pixel(2, 2), Some(0));
        assert_eq!(canvas.pixel(0, 1), Some(0));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_triangle_either_winding() {
        for (a, b, c) in [
            (Vec2::new(0.0, 0.0), Vec2::new(8.0, 0.0), Vec2::new(0.0, 8.0)),
            (Vec2::new(0.0, 0.0), Vec2::new(0.0, 8.0), Vec2::new(8.0, 0.0)),
        ] {
            let mut canvas = Canvas::new(8, 8);
            canvas.fill_triangle(a, b, c, 1);
            assert_eq!(canvas.pixel(1, 1), Some(1));
            assert_eq!(canvas.pixel(7, 7), Some(0));
        }
    }

    #[test]
    fn test_offscreen_triangle_is_noop() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_triangle(
            Vec2::new(-20.0, -20.0),
            Vec2::new(-10.0, -20.0),
            Vec2::new(-10.0, -10.0),
            1,
        );
        canvas.blend_pixel(-1, 3, 1, 255);
        assert!(canvas.pixels().iter().all(|&p| p == 0));
    }
}
