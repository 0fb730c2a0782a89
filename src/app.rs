//! Window and frame loop
//!
//! Each frame: read keys into panel actions, run however many fixed ticks the
//! clock owes, draw, present.

use std::time::Instant;

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use thiserror::Error;

use crate::panel::{DebugPanel, PanelAction};
use crate::renderer::Renderer;
use crate::scene::{Channel, Scene};
use crate::settings::Settings;
use crate::sim::{FixedStep, step_scene};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not open window: {0}")]
    Window(String),
}

/// Map a key press to a panel command
pub fn action_for_key(key: Key, shift: bool) -> Option<PanelAction> {
    let channel = |c: Channel| {
        if shift {
            PanelAction::ChannelDown(c)
        } else {
            PanelAction::ChannelUp(c)
        }
    };

    Some(match key {
        Key::Tab if shift => PanelAction::SelectPrev,
        Key::Tab => PanelAction::SelectNext,
        Key::Space => PanelAction::ToggleSelectedVisible,
        Key::A => PanelAction::ShowAll,
        Key::V => PanelAction::ToggleDrawShapes,
        Key::T => PanelAction::ToggleLabels,
        Key::F1 => PanelAction::TogglePanel,
        Key::P => PanelAction::TogglePause,
        Key::Equal | Key::NumPadPlus => PanelAction::Grow,
        Key::Minus | Key::NumPadMinus => PanelAction::Shrink,
        Key::Period => PanelAction::MoreSegments,
        Key::Comma => PanelAction::FewerSegments,
        Key::X => PanelAction::Stop,
        Key::Left => PanelAction::Accelerate { dx: -1, dy: 0 },
        Key::Right => PanelAction::Accelerate { dx: 1, dy: 0 },
        Key::Up => PanelAction::Accelerate { dx: 0, dy: -1 },
        Key::Down => PanelAction::Accelerate { dx: 0, dy: 1 },
        Key::R => channel(Channel::Red),
        Key::G => channel(Channel::Green),
        Key::B => channel(Channel::Blue),
        _ => return None,
    })
}

/// App instance holding all state
pub struct App {
    pub scene: Scene,
    pub panel: DebugPanel,
    pub settings: Settings,
    clock: FixedStep,
    renderer: Renderer,
}

impl App {
    pub fn new(scene: Scene, settings: Settings) -> Self {
        let renderer = Renderer::new(&scene);
        Self::with_renderer(scene, settings, renderer)
    }

    pub fn with_renderer(scene: Scene, settings: Settings, renderer: Renderer) -> Self {
        Self {
            panel: DebugPanel::new(&scene, &settings),
            clock: FixedStep::new(settings.tick_hz, settings.max_substeps),
            scene,
            settings,
            renderer,
        }
    }

    pub fn handle_key(&mut self, key: Key, shift: bool) {
        if let Some(action) = action_for_key(key, shift) {
            self.panel.apply(action, &mut self.scene, &self.settings);
        }
    }

    /// Run the ticks owed for `frame_dt` seconds; returns the tick count
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        if self.panel.paused {
            self.clock.reset();
            return 0;
        }
        let ticks = self.clock.advance(frame_dt);
        for _ in 0..ticks {
            step_scene(&mut self.scene);
        }
        ticks
    }

    pub fn render(&mut self) -> &[u32] {
        self.renderer.render(&self.scene, &self.panel, &self.settings);
        self.renderer.canvas.pixels()
    }

    /// Open the window and loop until it closes or Escape is pressed
    pub fn run(mut self) -> Result<(), AppError> {
        let width = self.scene.window.width as usize;
        let height = self.scene.window.height as usize;

        let mut window = Window::new(
            "Shape Bounce (Tab: select, Space: hide, F1: panel, Esc: quit)",
            width,
            height,
            WindowOptions::default(),
        )
        .map_err(|e| AppError::Window(e.to_string()))?;
        window.set_target_fps(self.settings.target_fps);

        log::info!(
            "Running {} shapes at {} ticks/s",
            self.scene.shapes.len(),
            self.settings.tick_hz
        );

        let mut last = Instant::now();
        while window.is_open() && !window.is_key_down(Key::Escape) {
            let shift = window.is_key_down(Key::LeftShift) || window.is_key_down(Key::RightShift);
            for key in window.get_keys_pressed(KeyRepeat::Yes) {
                self.handle_key(key, shift);
            }

            let now = Instant::now();
            self.update(now.duration_since(last).as_secs_f32());
            last = now;

            let frame = self.render();
            window
                .update_with_buffer(frame, width, height)
                .map_err(|e| AppError::Window(e.to_string()))?;
        }

        log::info!("Window closed");
        Ok(())
    }
}
