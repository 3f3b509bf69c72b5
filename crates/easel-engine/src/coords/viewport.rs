use serde::Deserialize;

/// Pan offset applied to every sprite draw, in surface pixels.
///
/// A positive `left` shifts the scene right; a positive `top` shifts it down.
#[derive(Debug, Copy, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}
