//! Controller configuration.
//!
//! Every field has a default, so a config file only lists what it changes:
//!
//! ```toml
//! fps = 30
//! scale = 2.0
//! render_mode = "isometric"
//!
//! [viewport]
//! left = -64
//!
//! [layout]
//! width = 640
//! height = 360
//! opacity = 100
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::coords::Viewport;
use crate::error::EngineError;

/// How the pipeline orders component updates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Depth-sorted, five layer passes.
    #[default]
    Isometric,
    /// Registry order, no sort, no layers.
    Flat,
}

/// Surface size and whole-surface opacity.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// 0..=100.
    pub opacity: u8,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            opacity: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target frame rate; the tick delay is `1 / fps` seconds.
    pub fps: f32,
    /// Surface scale factor, also used by sprites to size their draws.
    pub scale: f32,
    pub viewport: Viewport,
    pub layout: Layout,
    pub render_mode: RenderMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 60.0,
            scale: 1.0,
            viewport: Viewport::default(),
            layout: Layout::default(),
            render_mode: RenderMode::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).context("failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(EngineError::InvalidConfig(format!("fps must be positive, got {}", self.fps)));
        }
        if Duration::try_from_secs_f64(self.budget_secs()).is_err() {
            return Err(EngineError::InvalidConfig(format!(
                "fps {} is too low for a representable frame delay",
                self.fps
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(EngineError::InvalidConfig(format!("scale must be positive, got {}", self.scale)));
        }
        if self.layout.opacity > 100 {
            return Err(EngineError::InvalidConfig(format!(
                "layout.opacity must be within 0..=100, got {}",
                self.layout.opacity
            )));
        }
        Ok(())
    }

    /// Delay between scheduled ticks.
    /// Saturates at `Duration::MAX` for configs that fail validation.
    pub fn frame_budget(&self) -> Duration {
        Duration::try_from_secs_f64(self.budget_secs()).unwrap_or(Duration::MAX)
    }

    fn budget_secs(&self) -> f64 {
        1.0 / f64::from(self.fps)
    }
}
