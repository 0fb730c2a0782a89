//! Debug panel state and shape edits
//!
//! The panel refers to the selected shape by index into `Scene::shapes`.
//! Every change the user makes goes through `ShapeEdit` so the renderer and
//! the window code never mutate shapes directly.

use glam::Vec2;

use crate::scene::{Channel, Scene, Shape, ShapeKind};
use crate::settings::Settings;

/// A single change to one shape
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEdit {
    ToggleVisible,
    SetVisible(bool),
    SetVelocity(Vec2),
    NudgeVelocity(Vec2),
    NudgeChannel(Channel, i16),
    /// Multiply geometry lengths
    Scale(f32),
    AdjustSegments(i32),
}

impl ShapeEdit {
    pub fn apply(&self, shape: &mut Shape) {
        match self {
            ShapeEdit::ToggleVisible => shape.visible = !shape.visible,
            ShapeEdit::SetVisible(visible) => shape.visible = *visible,
            ShapeEdit::SetVelocity(vel) => shape.vel = *vel,
            ShapeEdit::NudgeVelocity(delta) => shape.vel += *delta,
            ShapeEdit::NudgeChannel(channel, delta) => shape.color.nudge(*channel, *delta),
            ShapeEdit::Scale(factor) => shape.scale_geometry(*factor),
            ShapeEdit::AdjustSegments(delta) => shape.adjust_segments(*delta),
        }
    }
}

/// User-level panel commands (one per key press)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    SelectNext,
    SelectPrev,
    ToggleSelectedVisible,
    /// Make every shape visible again
    ShowAll,
    ToggleDrawShapes,
    ToggleLabels,
    TogglePanel,
    TogglePause,
    Grow,
    Shrink,
    MoreSegments,
    FewerSegments,
    /// Zero the selected shape's velocity
    Stop,
    /// Nudge velocity by one step in a direction (-1, 0, 1 per axis)
    Accelerate { dx: i8, dy: i8 },
    ChannelUp(Channel),
    ChannelDown(Channel),
}

/// Panel view state
#[derive(Debug, Clone, PartialEq)]
pub struct DebugPanel {
    /// Index into `Scene::shapes`; `None` only for an empty scene
    pub selected: Option<usize>,
    pub show_panel: bool,
    pub draw_shapes: bool,
    pub draw_labels: bool,
    pub paused: bool,
}

impl DebugPanel {
    pub fn new(scene: &Scene, settings: &Settings) -> Self {
        Self {
            selected: if scene.shapes.is_empty() { None } else { Some(0) },
            show_panel: settings.show_panel,
            draw_shapes: true,
            draw_labels: settings.draw_labels,
            paused: false,
        }
    }

    /// Keep the selection valid for a list of `len` shapes
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    pub fn select_next(&mut self, len: usize) {
        self.clamp_selection(len);
        if let Some(i) = self.selected {
            self.selected = Some((i + 1) % len);
        }
    }

    pub fn select_prev(&mut self, len: usize) {
        self.clamp_selection(len);
        if let Some(i) = self.selected {
            self.selected = Some((i + len - 1) % len);
        }
    }

    pub fn selected_shape<'a>(&self, scene: &'a Scene) -> Option<&'a Shape> {
        self.selected.and_then(|i| scene.shapes.get(i))
    }

    /// Apply an edit to the selected shape; returns false when nothing is selected
    pub fn edit_selected(&self, scene: &mut Scene, edit: &ShapeEdit) -> bool {
        match self.selected.and_then(|i| scene.shapes.get_mut(i)) {
            Some(shape) => {
                edit.apply(shape);
                true
            }
            None => false,
        }
    }

    /// Translate a panel command into state changes and shape edits
    pub fn apply(&mut self, action: PanelAction, scene: &mut Scene, settings: &Settings) {
        log::debug!("Panel action {:?} (selected {:?})", action, self.selected);
        let len = scene.shapes.len();
        let color_step = settings.color_step as i16;

        let edit = match action {
            PanelAction::SelectNext => {
                self.select_next(len);
                None
            }
            PanelAction::SelectPrev => {
                self.select_prev(len);
                None
            }
            PanelAction::ToggleDrawShapes => {
                self.draw_shapes = !self.draw_shapes;
                None
            }
            PanelAction::ToggleLabels => {
                self.draw_labels = !self.draw_labels;
                None
            }
            PanelAction::TogglePanel => {
                self.show_panel = !self.show_panel;
                None
            }
            PanelAction::TogglePause => {
                self.paused = !self.paused;
                log::info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
                None
            }
            PanelAction::ShowAll => {
                let show = ShapeEdit::SetVisible(true);
                scene.shapes.iter_mut().for_each(|shape| show.apply(shape));
                None
            }
            PanelAction::ToggleSelectedVisible => Some(ShapeEdit::ToggleVisible),
            PanelAction::Grow => Some(ShapeEdit::Scale(settings.scale_step)),
            PanelAction::Shrink => Some(ShapeEdit::Scale(1.0 / settings.scale_step)),
            PanelAction::MoreSegments => Some(ShapeEdit::AdjustSegments(1)),
            PanelAction::FewerSegments => Some(ShapeEdit::AdjustSegments(-1)),
            PanelAction::Stop => Some(ShapeEdit::SetVelocity(Vec2::ZERO)),
            PanelAction::Accelerate { dx, dy } => Some(ShapeEdit::NudgeVelocity(
                Vec2::new(dx as f32, dy as f32) * settings.velocity_step,
            )),
            PanelAction::ChannelUp(channel) => Some(ShapeEdit::NudgeChannel(channel, color_step)),
            PanelAction::ChannelDown(channel) => {
                Some(ShapeEdit::NudgeChannel(channel, -color_step))
            }
        };

        if let Some(edit) = edit {
            self.clamp_selection(len);
            self.edit_selected(scene, &edit);
        }
    }

    /// Panel text, one entry per line
    pub fn lines(&self, scene: &Scene) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Shapes: {} ({} visible){}",
                scene.shapes.len(),
                scene.visible_count(),
                if self.paused { "  [paused]" } else { "" }
            ),
            format!(
                "[V] draw shapes: {}  [T] labels: {}",
                on_off(self.draw_shapes),
                on_off(self.draw_labels)
            ),
        ];

        for (i, shape) in scene.shapes.iter().enumerate() {
            let marker = if Some(i) == self.selected { '>' } else { ' ' };
            let check = if shape.visible { 'x' } else { ' ' };
            lines.push(format!("{} [{}] {} {}", marker, check, shape.kind.label(), shape.name));
        }

        if let Some(shape) = self.selected_shape(scene) {
            lines.push(String::new());
            lines.push(format!("pos  ({:.1}, {:.1})", shape.pos.x, shape.pos.y));
            lines.push(format!("vel  ({:.2}, {:.2})", shape.vel.x, shape.vel.y));
            lines.push(format!(
                "rgb  ({}, {}, {})",
                shape.color.r, shape.color.g, shape.color.b
            ));
            lines.push(match shape.kind {
                ShapeKind::Circle { radius, segments } => {
                    format!("radius {:.1}  segments {}", radius, segments)
                }
                ShapeKind::Rectangle { size } => format!("size {:.1} x {:.1}", size.x, size.y),
            });
        }
        lines
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Color;

    fn scene() -> Scene {
        Scene::parse(
            "Window 800 600\n\
             Circle A 10 10 1 1 100 100 100 20\n\
             Rectangle B 50 50 -1 2 0 0 0 10 30\n\
             Circle C 0 0 0 0 250 5 5 4",
        )
        .unwrap()
    }

    fn panel(scene: &Scene) -> DebugPanel {
        DebugPanel::new(scene, &Settings::default())
    }

    #[test]
    fn test_selection_wraps() {
        let scene = scene();
        let mut p = panel(&scene);
        assert_eq!(p.selected, Some(0));

        p.select_prev(3);
        assert_eq!(p.selected, Some(2));
        p.select_next(3);
        p.select_next(3);
        assert_eq!(p.selected, Some(1));
    }

    #[test]
    fn test_empty_scene_has_no_selection() {
        let mut empty = Scene::default();
        let settings = Settings::default();
        let mut p = DebugPanel::new(&empty, &settings);
        assert_eq!(p.selected, None);

        p.apply(PanelAction::SelectNext, &mut empty, &settings);
        p.apply(PanelAction::Grow, &mut empty, &settings);
        assert_eq!(p.selected, None);
        assert!(!p.edit_selected(&mut empty, &ShapeEdit::ToggleVisible));
    }

    #[test]
    fn test_selection_clamped_after_shrink() {
        let mut p = DebugPanel {
            selected: Some(5),
            ..panel(&scene())
        };
        p.clamp_selection(2);
        assert_eq!(p.selected, Some(1));
        p.clamp_selection(0);
        assert_eq!(p.selected, None);
    }

    #[test]
    fn test_toggle_selected_visibility() {
        let mut scene = scene();
        let settings = Settings::default();
        let mut p = panel(&scene);

        p.apply(PanelAction::SelectNext, &mut scene, &settings);
        p.apply(PanelAction::ToggleSelectedVisible, &mut scene, &settings);
        assert!(scene.shapes[0].visible);
        assert!(!scene.shapes[1].visible);
        assert_eq!(scene.visible_count(), 2);
    }

    #[test]
    fn test_grow_and_shrink_geometry() {
        let mut scene = scene();
        let settings = Settings {
            scale_step: 2.0,
            ..Default::default()
        };
        let mut p = panel(&scene);
        p.select_next(3);

        p.apply(PanelAction::Grow, &mut scene, &settings);
        assert_eq!(scene.shapes[1].kind, ShapeKind::rectangle(20.0, 60.0));
        p.apply(PanelAction::Shrink, &mut scene, &settings);
        p.apply(PanelAction::Shrink, &mut scene, &settings);
        assert_eq!(scene.shapes[1].kind, ShapeKind::rectangle(5.0, 15.0));
    }

    #[test]
    fn test_accelerate_and_color() {
        let mut scene = scene();
        let settings = Settings {
            velocity_step: 0.5,
            color_step: 10,
            ..Default::default()
        };
        let mut p = panel(&scene);
        p.select_prev(3);

        p.apply(PanelAction::Accelerate { dx: 1, dy: -1 }, &mut scene, &settings);
        assert_eq!(scene.shapes[2].vel, Vec2::new(0.5, -0.5));

        p.apply(PanelAction::ChannelUp(Channel::Red), &mut scene, &settings);
        p.apply(PanelAction::ChannelDown(Channel::Green), &mut scene, &settings);
        assert_eq!(scene.shapes[2].color, Color::new(255, 0, 5));
    }

    #[test]
    fn test_global_toggles() {
        let mut scene = scene();
        let settings = Settings::default();
        let mut p = panel(&scene);
        let before = scene.clone();

        p.apply(PanelAction::ToggleDrawShapes, &mut scene, &settings);
        p.apply(PanelAction::ToggleLabels, &mut scene, &settings);
        p.apply(PanelAction::TogglePanel, &mut scene, &settings);
        p.apply(PanelAction::TogglePause, &mut scene, &settings);

        assert!(!p.draw_shapes);
        assert!(!p.draw_labels);
        assert!(!p.show_panel);
        assert!(p.paused);
        assert_eq!(scene, before);
    }

    #[test]
    fn test_direct_edits() {
        let mut shape = scene().shapes[0].clone();
        ShapeEdit::SetVelocity(Vec2::new(3.0, 4.0)).apply(&mut shape);
        ShapeEdit::NudgeVelocity(Vec2::new(1.0, -1.0)).apply(&mut shape);
        ShapeEdit::SetVisible(false).apply(&mut shape);
        ShapeEdit::AdjustSegments(-60).apply(&mut shape);

        assert_eq!(shape.vel, Vec2::new(4.0, 3.0));
        assert!(!shape.visible);
        assert_eq!(shape.kind, ShapeKind::Circle { radius: 20.0, segments: 4 });
    }

    #[test]
    fn test_stop_zeroes_selected_velocity() {
        let mut scene = scene();
        let settings = Settings::default();
        let mut p = panel(&scene);
        p.select_next(3);

        p.apply(PanelAction::Stop, &mut scene, &settings);
        assert_eq!(scene.shapes[1].vel, Vec2::ZERO);
        assert_eq!(scene.shapes[0].vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_show_all_restores_hidden_shapes() {
        let mut scene = scene();
        let settings = Settings::default();
        let mut p = panel(&scene);
        scene.shapes[0].visible = false;
        scene.shapes[2].visible = false;

        p.apply(PanelAction::ShowAll, &mut scene, &settings);
        assert_eq!(scene.visible_count(), 3);
        assert_eq!(p.selected, Some(0));
    }

    #[test]
    fn test_panel_lines_mark_selection() {
        let scene = scene();
        let mut p = panel(&scene);
        p.select_next(3);
        let lines = p.lines(&scene);

        assert!(lines[0].starts_with("Shapes: 3 (3 visible)"));
        assert_eq!(lines[2], "  [x] Circle A");
        assert_eq!(lines[3], "> [x] Rectangle B");
        assert!(lines.iter().any(|l| l == "size 10.0 x 30.0"));
    }
}
