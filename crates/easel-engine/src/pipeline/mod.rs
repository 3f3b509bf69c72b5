//! Render pipeline: one pass per frame.
//!
//! Isometric pass, in order:
//! 1. partition components (traits dispatched on every one of them): destroyed
//!    ones are set aside, generic ones are updated immediately, drawables are
//!    collected
//! 2. stable sort of drawables by [`DepthKey`]
//! 3. five layer passes (0..=4) over the sorted drawables
//! 4. reap the destroyed components
//!
//! The final draw order is keyed by layer, then depth, then `z_index`, then
//! registry order.

mod depth;
mod pass;

pub use depth::DepthKey;
pub use pass::{dispatch_traits, run_pass, PassReport};
