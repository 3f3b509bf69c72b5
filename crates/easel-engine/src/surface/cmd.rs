use crate::coords::{ColorRgba, Rect};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    Clear(Rect),
    SetOpacity(f32),
    Scale { sx: f32, sy: f32 },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate(f32),
    GlobalAlpha(f32),
    ImageSmoothing(bool),
    FillRect { rect: Rect, color: ColorRgba },
    /// `image` is the source identifier of the blitted image.
    DrawImage { image: String, src: Rect, dst: Rect },
}

impl SurfaceCmd {
    #[inline]
    pub fn is_draw(&self) -> bool {
        matches!(self, SurfaceCmd::FillRect { .. } | SurfaceCmd::DrawImage { .. })
    }
}
