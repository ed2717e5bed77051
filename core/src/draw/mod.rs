pub mod color;
pub mod frame;

pub use color::Color;
pub use frame::{DrawCommand, Frame};
