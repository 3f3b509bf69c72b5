//! Coordinate and geometry types shared by the pipeline, sprites and surfaces.
//!
//! Canonical space:
//! - surface pixels before the controller scale is applied
//! - origin top-left
//! - +X right, +Y down (larger Y is "closer" for the depth sort)

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
