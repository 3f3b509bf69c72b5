use std::cell::Cell;
use std::rc::Rc;

/// Load state of an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ImageState {
    #[default]
    Pending,
    Ready { width: u32, height: u32 },
    Failed,
}

#[derive(Debug)]
struct Slot {
    src: String,
    state: Cell<ImageState>,
}

/// Shared handle to an image being loaded by an [`ImageLoader`](super::ImageLoader).
///
/// Clones observe the same state, so a loader can settle a handle that
/// sprites already hold.
#[derive(Debug, Clone)]
pub struct ImageHandle(Rc<Slot>);

impl ImageHandle {
    pub fn new(src: impl Into<String>) -> Self {
        Self(Rc::new(Slot {
            src: src.into(),
            state: Cell::new(ImageState::Pending),
        }))
    }

    #[inline]
    pub fn src(&self) -> &str {
        &self.0.src
    }

    #[inline]
    pub fn state(&self) -> ImageState {
        self.0.state.get()
    }

    /// `(width, height)` once the image is ready.
    pub fn size(&self) -> Option<(u32, u32)> {
        match self.state() {
            ImageState::Ready { width, height } => Some((width, height)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.state() == ImageState::Pending
    }

    pub(crate) fn settle(&self, state: ImageState) {
        self.0.state.set(state);
    }
}
