//! The render model: a frame of primitive draw commands.
//!
//! The editor emits one `Frame` per update; it never draws anything itself.
//! An external renderer walks the command list in order (painter's order,
//! lines under points under text).

use super::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Circle {
        center: [f64; 2],
        radius: f64,
        color: Color,
    },
    Segment {
        from: [f64; 2],
        to: [f64; 2],
        thickness: f64,
        color: Color,
    },
    Text {
        text: String,
        position: [f64; 2],
        size: f64,
        color: Color,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle(&mut self, center: [f64; 2], radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    pub fn segment(&mut self, from: [f64; 2], to: [f64; 2], thickness: f64, color: Color) {
        self.commands.push(DrawCommand::Segment { from, to, thickness, color });
    }

    pub fn text(&mut self, text: impl Into<String>, position: [f64; 2], size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            position,
            size,
            color,
        });
    }
}
