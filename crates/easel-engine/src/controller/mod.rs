//! The controller: owner of the registry, the surface and the frame loop.
//!
//! This module defines the stable surface application code drives: building a
//! controller, adding and removing entities, and `start`/`pause`/`resume`.
//! Entities and hooks talk back through [`Commands`], which are applied
//! between passes.

mod commands;
mod controller;
mod hooks;
mod state;

pub use commands::Commands;
pub use controller::{Controller, ControllerBuilder};
pub use hooks::{ControllerHooks, FrameReport};
pub use state::{ControllerState, TickOutcome};
