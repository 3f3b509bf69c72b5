use std::fmt;

use crate::surface::SurfaceError;

/// Errors that stop a controller from being built.
///
/// Nothing past construction fails loudly: lookups return `Option`, duplicate
/// ids overwrite, image failures degrade to background-only sprites.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The surface provider could not create the drawing surface.
    SurfaceAcquisition(SurfaceError),
    /// A configuration value is out of its accepted range.
    InvalidConfig(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SurfaceAcquisition(e) => write!(f, "surface acquisition failed: {e}"),
            EngineError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::SurfaceAcquisition(e) => Some(e),
            EngineError::InvalidConfig(_) => None,
        }
    }
}

impl From<SurfaceError> for EngineError {
    fn from(e: SurfaceError) -> Self {
        EngineError::SurfaceAcquisition(e)
    }
}
