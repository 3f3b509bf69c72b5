//! Behaviors ("traits"): small attachable units an entity delegates to every
//! frame, before its own update.
//!
//! An entity holds at most one behavior per [`TraitKind`]. The slot holding a
//! behavior records which entity it was last dispatched for; that host
//! reference is rebound on every dispatch, so a behavior copied from another
//! entity never acts on its old host.

mod animation;
mod fade;
mod map;
mod move_to;

use core::fmt;

use crate::core::Attributes;

pub use animation::FrameAnimation;
pub use fade::Fade;
pub use map::{TraitMap, TraitSlot};
pub use move_to::MoveTo;

/// Closed set of behavior slots, dispatched in declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum TraitKind {
    Fade,
    MoveTo,
    Animation,
}

impl TraitKind {
    pub const ALL: [TraitKind; 3] = [TraitKind::Fade, TraitKind::MoveTo, TraitKind::Animation];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A behavior unit. `host` is the attribute bag of the entity dispatching it.
pub trait Behavior: fmt::Debug + 'static {
    /// Called once when the host enters the registry.
    fn init(&mut self, host: &mut Attributes) {
        let _ = host;
    }

    /// Called every frame before the host's own update.
    fn update(&mut self, host: &mut Attributes);

    /// Fresh, unbound duplicate for another host.
    fn copy(&self) -> Box<dyn Behavior>;
}
