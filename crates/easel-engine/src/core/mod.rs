//! Entity contracts.
//!
//! Everything the registry holds (services and components) implements
//! [`Entity`]: an [`Attributes`] bag plus a [`TraitMap`](crate::behavior::TraitMap),
//! composed through [`Base`]. Concrete kinds embed a `Base` built from the
//! shared defaults and override what they need at construction.

mod attributes;
mod ctx;
mod entity;

pub use attributes::{AttributePatch, Attributes, EntityKind, EntityState};
pub use ctx::FrameCtx;
pub use entity::{Base, BaseComponent, Entity};
