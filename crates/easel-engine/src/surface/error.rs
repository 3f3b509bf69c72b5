use std::fmt;

/// A surface could not be created.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceError {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub reason: String,
}

impl SurfaceError {
    pub fn new(label: impl Into<String>, width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to acquire surface '{}' ({}x{}): {}",
            self.label, self.width, self.height, self.reason
        )
    }
}

impl std::error::Error for SurfaceError {}
