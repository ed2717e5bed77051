pub mod app;
pub mod draw;
pub mod editor;
pub mod geometry;
pub mod scene;

pub fn version() -> &'static str {
    "0.1.0"
}
