//! Application context and host-facing seams.
//!
//! The process host owns the window and the frame loop; the core owns the
//! editor. `AppContext` is constructed explicitly at startup and threaded
//! through — there is no process-wide singleton. Each frame the host feeds
//! the events it polled into `tick` and hands the returned frame to its
//! `Renderer` implementation via `present`.

use crate::draw::{self, DrawCommand, Frame};
use crate::editor::{Editor, InputEvent};
use crate::scene::GeometryResult;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Window and loop configuration the host applies at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub target_fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Euclidean Geometry".into(),
            target_fps: 60,
        }
    }
}

/// Primitive draw calls the external renderer must provide.
///
/// The core never draws; it describes. `begin_frame`/`end_frame` bracket
/// one presented frame.
pub trait Renderer {
    fn begin_frame(&mut self);
    fn clear(&mut self, color: draw::Color);
    fn draw_circle(&mut self, center: [f64; 2], radius: f64, color: draw::Color);
    fn draw_segment(&mut self, from: [f64; 2], to: [f64; 2], thickness: f64, color: draw::Color);
    fn draw_text(&mut self, text: &str, position: [f64; 2], size: f64, color: draw::Color);
    fn end_frame(&mut self);
}

/// Replay a render model through a renderer, in painter's order.
pub fn present<R: Renderer>(frame: &Frame, renderer: &mut R) {
    renderer.begin_frame();
    renderer.clear(draw::color::WHITE);
    for command in &frame.commands {
        match command {
            DrawCommand::Circle { center, radius, color } => {
                renderer.draw_circle(*center, *radius, *color)
            }
            DrawCommand::Segment { from, to, thickness, color } => {
                renderer.draw_segment(*from, *to, *thickness, *color)
            }
            DrawCommand::Text { text, position, size, color } => {
                renderer.draw_text(text, *position, *size, *color)
            }
        }
    }
    renderer.end_frame();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppContext {
    pub config: AppConfig,
    pub editor: Editor,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        info!(title = %config.title, width = config.width, height = config.height, "app context created");
        let editor = Editor::new(config.width as f64, config.height as f64);
        Self { config, editor }
    }

    /// One cooperative step: apply this frame's input events, then emit the
    /// render model. Events are applied in arrival order and every
    /// transition completes within the frame that triggered it.
    pub fn tick(&mut self, events: &[InputEvent]) -> GeometryResult<Frame> {
        for event in events {
            self.editor.handle_event(*event)?;
        }
        Ok(self.editor.frame())
    }
}
