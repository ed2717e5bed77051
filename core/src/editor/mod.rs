//! The interaction state machine.
//!
//! Owns the mutable scene and the current editing mode, consumes abstract
//! input events, and emits a render model once per frame. All transitions
//! are synchronous; a failed primitive construction aborts the triggering
//! operation and leaves the scene in its prior valid state.

use crate::draw::{self, Frame};
use crate::scene::{EntityId, GeometryResult, Scene};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub mod events;

pub use events::{InputEvent, Key, MouseButton};

#[cfg(test)]
mod tests_construction;
#[cfg(test)]
mod tests_selection;

/// Default interactive hit-radius for points, in screen pixels.
pub const DEFAULT_HIT_RADIUS: f64 = 8.0;

const DEFAULT_POINT_RADIUS: f64 = 5.0;
const HOVERED_POINT_RADIUS: f64 = 7.0;
const SELECTED_POINT_RADIUS: f64 = 8.0;
const LINE_THICKNESS: f64 = 2.0;
const PREVIEW_THICKNESS: f64 = 1.0;

/// Current editing mode. TAB cycles POINT → LINE → SELECT → POINT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Point,
    Line,
    Select,
}

impl Mode {
    pub fn next(self) -> Self {
        match self {
            Mode::Point => Mode::Line,
            Mode::Line => Mode::Select,
            Mode::Select => Mode::Point,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Point => "POINT",
            Mode::Line => "LINE",
            Mode::Select => "SELECT",
        }
    }
}

/// Ephemeral line shown while a line construction is in progress.
/// Recomputed on every pointer update, never persisted into the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewLine {
    pub from: EntityId,
    pub to: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Editor {
    scene: Scene,
    mode: Mode,
    cursor: [f64; 2],
    view_size: [f64; 2],
    hit_radius: f64,
    selected_point: Option<EntityId>,
    line_start: Option<EntityId>,
    preview_line: Option<PreviewLine>,
}

impl Editor {
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            scene: Scene::new(),
            mode: Mode::Point,
            cursor: [0.0, 0.0],
            view_size: [view_width, view_height],
            hit_radius: DEFAULT_HIT_RADIUS,
            selected_point: None,
            line_start: None,
            preview_line: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_point(&self) -> Option<EntityId> {
        self.selected_point
    }

    pub fn line_start(&self) -> Option<EntityId> {
        self.line_start
    }

    pub fn preview_line(&self) -> Option<PreviewLine> {
        self.preview_line
    }

    pub fn set_hit_radius(&mut self, radius: f64) {
        self.hit_radius = radius;
    }

    /// Apply one input event. Errors indicate a primitive-level invariant
    /// violation; the triggering operation is aborted with no partial
    /// mutation of the scene.
    pub fn handle_event(&mut self, event: InputEvent) -> GeometryResult<()> {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.cursor = [x, y];
                self.refresh_preview();
                Ok(())
            }
            InputEvent::KeyPressed(key) => self.handle_key(key),
            InputEvent::PointerPressed { button: MouseButton::Left, x, y } => {
                self.cursor = [x, y];
                let result = match self.mode {
                    Mode::Point => self.click_point_mode(x, y),
                    Mode::Line => self.click_line_mode(x, y),
                    Mode::Select => {
                        self.click_select_mode(x, y);
                        Ok(())
                    }
                };
                self.refresh_preview();
                result
            }
            InputEvent::PointerPressed { .. } => Ok(()),
        }
    }

    fn handle_key(&mut self, key: Key) -> GeometryResult<()> {
        match key {
            Key::Tab => {
                self.mode = self.mode.next();
                // No transient state leaks across modes.
                self.clear_transient();
                debug!(mode = self.mode.label(), "switched mode");
            }
            Key::Escape => {
                self.clear_transient();
                debug!("operation cancelled");
            }
            Key::Delete | Key::Backspace => {
                if let Some(id) = self.selected_point.take() {
                    let removed = self.scene.remove_point(id);
                    info!(%id, removed_lines = removed, "point deleted");
                }
                self.refresh_preview();
            }
            Key::Unknown => {}
        }
        Ok(())
    }

    fn clear_transient(&mut self) {
        self.selected_point = None;
        self.line_start = None;
        self.preview_line = None;
    }

    fn hovered(&self) -> Option<EntityId> {
        self.scene
            .hovered_point(self.cursor[0], self.cursor[1], self.hit_radius)
    }

    fn refresh_preview(&mut self) {
        self.preview_line = match (self.mode, self.line_start, self.hovered()) {
            (Mode::Line, Some(from), None) => Some(PreviewLine { from, to: self.cursor }),
            _ => None,
        };
    }

    fn click_point_mode(&mut self, x: f64, y: f64) -> GeometryResult<()> {
        // Clicking an existing point is a no-op: no duplicate points at the
        // same screen location.
        if self.hovered().is_some() {
            return Ok(());
        }
        let id = self.scene.add_point(x, y)?;
        info!(%id, x, y, "point created");
        Ok(())
    }

    fn click_line_mode(&mut self, _x: f64, _y: f64) -> GeometryResult<()> {
        let hovered = self.hovered();
        match (self.line_start, hovered) {
            (None, Some(point)) => {
                self.line_start = Some(point);
                debug!(%point, "line started");
            }
            (Some(start), Some(point)) if point != start => {
                let line = self.scene.add_line(start, point)?;
                info!(%line, "line created");
                self.line_start = None;
                self.preview_line = None;
                self.close_polygon_if_any()?;
            }
            (Some(_), Some(_)) => {
                // Clicked the line's own start point: user-initiated abort.
                self.line_start = None;
                debug!("line construction cancelled");
            }
            (_, None) => {
                // Clicking empty space aborts construction; unlike POINT
                // mode it never creates a point.
                self.line_start = None;
                debug!("line construction cancelled");
            }
        }
        Ok(())
    }

    fn close_polygon_if_any(&mut self) -> GeometryResult<()> {
        if let Some(cycle) = self.scene.detect_polygon() {
            // Skip cycles already committed as surfaces; detection always
            // reports the earliest cycle in scene order, which after the
            // first commit is the existing polygon itself.
            let ring = &cycle[..cycle.len() - 1];
            let known = self.scene.surfaces().iter().any(|s| {
                s.vertices().len() == ring.len() && ring.iter().all(|p| s.vertices().contains(p))
            });
            if !known {
                let surface = self.scene.surface_from_cycle(&cycle)?;
                let id = self.scene.add_surface(surface);
                info!(%id, vertices = cycle.len() - 1, "polygon closed");
            }
        }
        Ok(())
    }

    fn click_select_mode(&mut self, _x: f64, _y: f64) {
        match self.hovered() {
            Some(point) if self.selected_point == Some(point) => {
                self.selected_point = None;
                debug!(%point, "point deselected");
            }
            Some(point) => {
                self.selected_point = Some(point);
                debug!(%point, "point selected");
            }
            None => {
                self.selected_point = None;
                debug!("selection cleared");
            }
        }
    }

    /// Emit the render model for the current state: committed lines, the
    /// preview line, points styled by role, and the UI text layer.
    pub fn frame(&self) -> Frame {
        let mut frame = Frame::new();
        let hovered = self.hovered();

        for line in self.scene.lines() {
            if let (Some(a), Some(b)) = (self.scene.point(line.a), self.scene.point(line.b)) {
                frame.segment([a.x, a.y], [b.x, b.y], LINE_THICKNESS, draw::color::BLACK);
            }
        }

        if let Some(preview) = &self.preview_line {
            if let Some(from) = self.scene.point(preview.from) {
                frame.segment([from.x, from.y], preview.to, PREVIEW_THICKNESS, draw::color::GRAY);
            }
        }

        for point in self.scene.points() {
            let mut color = point.color.unwrap_or(draw::color::RED);
            let mut radius = point.radius.unwrap_or(DEFAULT_POINT_RADIUS);
            if hovered == Some(point.id) {
                color = draw::color::ORANGE;
                radius = HOVERED_POINT_RADIUS;
            }
            if self.selected_point == Some(point.id) {
                color = draw::color::GREEN;
                radius = SELECTED_POINT_RADIUS;
            }
            if self.line_start == Some(point.id) {
                color = draw::color::BLUE;
                radius = SELECTED_POINT_RADIUS;
            }
            frame.circle([point.x, point.y], radius, color);
        }

        self.draw_ui(&mut frame);
        frame
    }

    fn draw_ui(&self, frame: &mut Frame) {
        frame.text(
            format!("Mode: {}", self.mode.label()),
            [10.0, 10.0],
            20.0,
            draw::color::BLACK,
        );

        let instruction = match self.mode {
            Mode::Point => "Left click: Add point",
            Mode::Line if self.line_start.is_some() => "Click another point to complete line",
            Mode::Line => "Click a point to start line",
            Mode::Select => "Click point to select/deselect",
        };
        frame.text(instruction, [10.0, 35.0], 16.0, draw::color::DARK_GRAY);

        frame.text(
            "TAB: Switch mode | ESC: Cancel | DEL: Delete selected",
            [10.0, self.view_size[1] - 80.0],
            14.0,
            draw::color::DARK_GRAY,
        );
    }
}
