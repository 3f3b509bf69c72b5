//! Drawing-surface boundary.
//!
//! The controller acquires one [`Surface`] from a [`SurfaceProvider`] at
//! construction and hands it to entities through `FrameCtx`. The primitive set
//! mirrors a canvas 2D context: clear, fill, transform stack, alpha and image
//! blits. [`RecordingSurface`] is the headless implementation.

mod cmd;
mod error;
mod recording;

use crate::assets::ImageHandle;
use crate::coords::{ColorRgba, Rect};

pub use cmd::SurfaceCmd;
pub use error::SurfaceError;
pub use recording::{CommandLog, RecordingProvider, RecordingSurface};

/// Canvas-like 2D drawing target.
pub trait Surface {
    /// `(width, height)` in surface pixels.
    fn size(&self) -> (u32, u32);

    fn clear_rect(&mut self, rect: Rect);

    /// Opacity of the whole surface as composited by the host, `0.0..=1.0`.
    fn set_opacity(&mut self, opacity: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    /// Pushes the transform/alpha state.
    fn save(&mut self);

    /// Pops the state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);

    fn rotate(&mut self, radians: f32);

    fn set_global_alpha(&mut self, alpha: f32);

    fn set_image_smoothing(&mut self, enabled: bool);

    fn fill_rect(&mut self, rect: Rect, color: ColorRgba);

    /// Blits the `src` region of `image` into `dst` (current transform applies).
    fn draw_image(&mut self, image: &ImageHandle, src: Rect, dst: Rect);
}

/// Creates surfaces. Acquisition failure is fatal to controller construction.
pub trait SurfaceProvider {
    fn acquire(&mut self, label: &str, width: u32, height: u32) -> Result<Box<dyn Surface>, SurfaceError>;
}
