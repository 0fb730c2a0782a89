//! Text rendering with fontdue
//!
//! Glyph coverage is blended straight into the canvas in a single color.

use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use glam::Vec2;
use thiserror::Error;

use super::canvas::Canvas;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("could not read font '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse font '{}': {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
}

pub struct TextRenderer {
    font: fontdue::Font,
    px: f32,
}

impl TextRenderer {
    pub fn from_file<P: AsRef<Path>>(path: P, px: f32) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, px).map_err(|reason| FontError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self, String> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| e.to_string())?;
        Ok(Self { font, px: px.max(1.0) })
    }

    /// Distance between baselines
    pub fn line_height(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|lm| lm.new_line_size)
            .unwrap_or(self.px * 1.2)
    }

    fn layout(&self, text: &str, origin: Vec2) -> Layout {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: origin.x,
            y: origin.y,
            ..LayoutSettings::default()
        });
        layout.append(&[&self.font], &TextStyle::new(text, self.px, 0));
        layout
    }

    /// Width and height of a single line of text
    pub fn measure(&self, text: &str) -> Vec2 {
        let layout = self.layout(text, Vec2::ZERO);
        let width = layout
            .glyphs()
            .iter()
            .map(|g| g.x + g.width as f32)
            .fold(0.0, f32::max);
        Vec2::new(width, layout.height())
    }

    /// Draw text with its top-left corner at `origin`
    pub fn draw(&self, canvas: &mut Canvas, text: &str, origin: Vec2, color: u32) {
        let layout = self.layout(text, origin);
        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (metrics, coverage) = self.font.rasterize_config(glyph.key);
            let gx = glyph.x.round() as i64;
            let gy = glyph.y.round() as i64;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = coverage[row * metrics.width + col];
                    if alpha > 0 {
                        canvas.blend_pixel(gx + col as i64, gy + row as i64, color, alpha);
                    }
                }
            }
        }
    }

    /// Draw text centered on `center`
    pub fn draw_centered(&self, canvas: &mut Canvas, text: &str, center: Vec2, color: u32) {
        let size = self.measure(text);
        self.draw(canvas, text, center - size * 0.5, color);
    }
}
