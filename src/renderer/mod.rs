//! Software rendering module
//!
//! Shapes are tessellated into triangles and rasterized into a `Canvas`.
//! Text (labels and the debug panel) uses the scene's font.

pub mod canvas;
pub mod shapes;
pub mod text;
pub mod vertex;

use glam::Vec2;

pub use canvas::Canvas;
pub use text::{FontError, TextRenderer};
pub use vertex::Vertex;

use crate::panel::DebugPanel;
use crate::scene::Scene;
use crate::settings::Settings;
use vertex::colors;

/// Panel padding in pixels
const PANEL_MARGIN: f32 = 8.0;

/// Draws a scene and its debug panel into a framebuffer
pub struct Renderer {
    pub canvas: Canvas,
    text: Option<TextRenderer>,
}

impl Renderer {
    /// Load the scene's font; a missing font disables text instead of failing
    pub fn new(scene: &Scene) -> Self {
        let text = match TextRenderer::from_file(&scene.font.path, scene.font.size as f32) {
            Ok(text) => {
                log::info!("Loaded font {} at {}px", scene.font.path.display(), scene.font.size);
                Some(text)
            }
            Err(e) => {
                log::warn!("{}; labels and panel text disabled", e);
                None
            }
        };
        Self::with_text(scene, text)
    }

    pub fn with_text(scene: &Scene, text: Option<TextRenderer>) -> Self {
        Self {
            canvas: Canvas::new(scene.window.width as usize, scene.window.height as usize),
            text,
        }
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    /// Draw one full frame
    pub fn render(&mut self, scene: &Scene, panel: &DebugPanel, settings: &Settings) {
        self.canvas.clear(settings.background.to_u32());

        if panel.draw_shapes {
            for shape in scene.shapes.iter().filter(|s| s.visible) {
                self.canvas.fill_triangles(&shapes::shape(shape));
            }

            if panel.show_panel {
                if let Some(shape) = panel.selected_shape(scene).filter(|s| s.visible) {
                    let bb = shape.bounding_box();
                    self.canvas.stroke_rect(bb.min, bb.size(), colors::SELECTION_OUTLINE);
                }
            }
        }

        let font_color = scene.font.color.to_u32();
        if let Some(text) = &self.text {
            if panel.draw_shapes && panel.draw_labels {
                for shape in scene.shapes.iter().filter(|s| s.visible) {
                    text.draw_centered(&mut self.canvas, &shape.name, shape.center(), font_color);
                }
            }

            if panel.show_panel {
                draw_panel(&mut self.canvas, text, &panel.lines(scene), font_color);
            }
        }
    }
}

/// Translucent box in the top-left corner with one text line per entry
fn draw_panel(canvas: &mut Canvas, text: &TextRenderer, lines: &[String], color: u32) {
    let line_height = text.line_height();
    let width = lines
        .iter()
        .map(|line| text.measure(line).x)
        .fold(0.0, f32::max);
    let size = Vec2::new(
        width + PANEL_MARGIN * 2.0,
        line_height * lines.len() as f32 + PANEL_MARGIN * 2.0,
    );

    canvas.fill_rect(Vec2::ZERO, size, colors::PANEL_BACKGROUND, colors::PANEL_ALPHA);
    for (i, line) in lines.iter().enumerate() {
        let origin = Vec2::new(PANEL_MARGIN, PANEL_MARGIN + i as f32 * line_height);
        text.draw(canvas, line, origin, color);
    }
}
