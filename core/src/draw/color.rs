//! RGBA color type and the editor's role palette.

use serde::{Deserialize, Serialize};

/// An RGBA color with floating-point components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Default point fill.
pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
/// Hovered point highlight.
pub const ORANGE: Color = Color::opaque(1.0, 0.63, 0.0);
/// Selected point highlight.
pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
/// Line-start point highlight.
pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);
/// Committed lines and the mode label.
pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
/// Preview line.
pub const GRAY: Color = Color::opaque(0.5, 0.5, 0.5);
/// Instruction and help text.
pub const DARK_GRAY: Color = Color::opaque(0.31, 0.31, 0.31);
/// Canvas clear color.
pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
