//! Abstract input events, decoupled from any windowing backend.
//!
//! The host polls its input source, maps native key codes and button ids to
//! these generic values, and feeds the editor one event per physical press
//! (edge-triggered, never repeated per frame held).

use serde::{Deserialize, Serialize};

/// Generic key representation for cross-backend compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Tab key (cycle editing mode)
    Tab,
    /// Escape key (cancel in-progress construction / selection)
    Escape,
    /// Delete key (delete selected point)
    Delete,
    /// Backspace key (alias for Delete)
    Backspace,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button (primary construction button)
    Left,
    /// Right mouse button (currently unused)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// One discrete input event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMoved { x: f64, y: f64 },
    PointerPressed { button: MouseButton, x: f64, y: f64 },
    KeyPressed(Key),
}
