use std::collections::HashMap;

use super::{ImageHandle, ImageLoader, ImageState};

/// Loader backed by a table of known sizes; unknown sources fail.
///
/// Handles settle on the first `poll` after the request, like a real loader.
#[derive(Debug, Default)]
pub struct MemoryImageLoader {
    sizes: HashMap<String, (u32, u32)>,
    pending: Vec<ImageHandle>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, src: impl Into<String>, width: u32, height: u32) -> Self {
        self.insert(src, width, height);
        self
    }

    pub fn insert(&mut self, src: impl Into<String>, width: u32, height: u32) {
        self.sizes.insert(src.into(), (width, height));
    }
}

impl ImageLoader for MemoryImageLoader {
    fn request(&mut self, src: &str) -> ImageHandle {
        let handle = ImageHandle::new(src);
        self.pending.push(handle.clone());
        handle
    }

    fn poll(&mut self) -> usize {
        let settled = self.pending.len();
        for handle in self.pending.drain(..) {
            let state = match self.sizes.get(handle.src()) {
                Some(&(width, height)) => ImageState::Ready { width, height },
                None => {
                    log::warn!("image '{}' is not registered", handle.src());
                    ImageState::Failed
                }
            };
            handle.settle(state);
        }
        settled
    }
}
