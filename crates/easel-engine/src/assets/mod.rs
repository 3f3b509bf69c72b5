//! Image loading boundary.
//!
//! Loaders hand out an [`ImageHandle`] immediately and resolve it later, on
//! [`ImageLoader::poll`]. The controller polls once per frame before the
//! pipeline runs, so a sprite sees its image size at the earliest on the frame
//! after it was requested. Only the pixel size is consumed by the engine;
//! decoded pixels stay with the surface implementation.

mod file;
mod handle;
mod memory;

pub use file::FileImageLoader;
pub use handle::{ImageHandle, ImageState};
pub use memory::MemoryImageLoader;

pub trait ImageLoader {
    /// Returns a handle for `src`; repeated requests may share one handle.
    fn request(&mut self, src: &str) -> ImageHandle;

    /// Resolves pending handles. Returns how many settled during this call.
    fn poll(&mut self) -> usize;
}
