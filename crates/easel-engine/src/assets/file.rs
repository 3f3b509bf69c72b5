use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{ImageHandle, ImageLoader, ImageState};

/// Loads images from a directory, reading their size with the `image` crate.
///
/// Requests for the same source share a handle, so each file is probed once.
#[derive(Debug)]
pub struct FileImageLoader {
    root: PathBuf,
    cache: HashMap<String, ImageHandle>,
    pending: Vec<ImageHandle>,
}

impl FileImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
            pending: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn probe(&self, src: &str) -> ImageState {
        let path = self.root.join(src);
        match image::image_dimensions(&path) {
            Ok((width, height)) => {
                log::debug!("image '{}' loaded ({width}x{height})", path.display());
                ImageState::Ready { width, height }
            }
            Err(e) => {
                log::warn!("failed to load image '{}': {e}", path.display());
                ImageState::Failed
            }
        }
    }
}

impl ImageLoader for FileImageLoader {
    fn request(&mut self, src: &str) -> ImageHandle {
        if let Some(handle) = self.cache.get(src) {
            return handle.clone();
        }
        let handle = ImageHandle::new(src);
        self.cache.insert(src.to_string(), handle.clone());
        self.pending.push(handle.clone());
        handle
    }

    fn poll(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        for handle in &pending {
            handle.settle(self.probe(handle.src()));
        }
        pending.len()
    }
}
