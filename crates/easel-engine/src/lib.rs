//! Easel engine crate.
//!
//! Retained-mode controller for a 2D drawing surface. It owns the frame loop,
//! the entity registry, behavior composition and the isometric depth sort that
//! orders flat sprite draws.
//!
//! The drawing surface, the frame-scheduling primitive and image decoding are
//! collaborators behind traits ([`surface::Surface`],
//! [`schedule::FrameScheduler`], [`assets::ImageLoader`]); headless and
//! deterministic implementations ship with the crate.

pub mod assets;
pub mod behavior;
pub mod config;
pub mod controller;
pub mod coords;
pub mod core;
pub mod error;
pub mod id;
pub mod logging;
pub mod pipeline;
pub mod registry;
pub mod schedule;
pub mod sprite;
pub mod surface;
pub mod time;

#[cfg(test)]
pub(crate) mod testing;

pub mod prelude {
    pub use crate::assets::{FileImageLoader, ImageHandle, ImageLoader, ImageState, MemoryImageLoader};
    pub use crate::behavior::{Behavior, Fade, FrameAnimation, MoveTo, TraitKind, TraitMap};
    pub use crate::config::{Config, Layout, RenderMode};
    pub use crate::controller::{
        Commands, Controller, ControllerBuilder, ControllerHooks, ControllerState, FrameReport,
        TickOutcome,
    };
    pub use crate::coords::{ColorRgba, Rect, Vec2, Viewport};
    pub use crate::core::{
        AttributePatch, Attributes, Base, BaseComponent, Entity, EntityKind, EntityState, FrameCtx,
    };
    pub use crate::error::EngineError;
    pub use crate::id::{EntityId, IdSource};
    pub use crate::pipeline::PassReport;
    pub use crate::schedule::{FrameScheduler, ManualScheduler, TickHandle, TimerScheduler};
    pub use crate::sprite::{Sheet, Sprite};
    pub use crate::surface::{CommandLog, RecordingProvider, Surface, SurfaceCmd, SurfaceProvider};
}
