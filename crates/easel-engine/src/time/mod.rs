//! Frame timing.
//!
//! The controller owns one [`FrameClock`] and ticks it once per rendered
//! frame; the resulting [`FrameTime`] is exposed to entities via `FrameCtx`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
