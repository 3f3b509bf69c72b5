use crate::behavior::TraitMap;
use crate::id::{EntityId, IdSource};

use super::attributes::{AttributePatch, Attributes, EntityKind, EntityState};
use super::ctx::FrameCtx;

/// Shared part of every entity: the attribute bag and the trait map.
#[derive(Debug)]
pub struct Base {
    pub attributes: Attributes,
    pub traits: TraitMap,
}

impl Base {
    /// Fresh id, kind defaults, no traits.
    pub fn new(ids: &IdSource, kind: EntityKind) -> Self {
        Self {
            attributes: Attributes::new(ids.next(), kind),
            traits: TraitMap::new(),
        }
    }

    /// Kind defaults with `patch` merged over them.
    pub fn with_patch(ids: &IdSource, kind: EntityKind, patch: AttributePatch) -> Self {
        let mut base = Self::new(ids, kind);
        base.attributes.merge(patch);
        base
    }

    /// Same attributes under a new id, with every trait copied (unbound).
    pub fn copy(&self, ids: &IdSource) -> Self {
        let mut attributes = self.attributes.clone();
        attributes.id = ids.next();
        Self {
            attributes,
            traits: self.traits.copy(),
        }
    }
}

/// Capability set of everything the controller manages.
///
/// Services and components share this contract. Components are also traited
/// and updated by the render pipeline every frame; services only get `init`.
pub trait Entity: 'static {
    fn base(&self) -> &Base;
    fn base_mut(&mut self) -> &mut Base;

    /// One-time bind when the entity enters the registry.
    fn init(&mut self, ctx: &mut FrameCtx<'_>) {
        let _ = ctx;
    }

    /// Per-frame update. For drawables this is also the draw call.
    fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        let _ = ctx;
    }

    /// Independent duplicate under a new id.
    fn copy(&self, ids: &IdSource) -> Box<dyn Entity>;

    fn on_create(&mut self) {}

    /// Called once, when the entity is removed from the registry.
    fn on_destroy(&mut self) {}

    #[inline]
    fn id(&self) -> EntityId {
        self.base().attributes.id
    }

    #[inline]
    fn attributes(&self) -> &Attributes {
        &self.base().attributes
    }

    #[inline]
    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.base_mut().attributes
    }

    fn set(&mut self, patch: AttributePatch) {
        self.attributes_mut().merge(patch);
    }

    /// Marks the entity for removal. Nothing is removed until the next pass.
    fn destroy(&mut self) {
        self.attributes_mut().state = EntityState::Destroyed;
    }
}

/// Plain entity with no behavior of its own; traits still run on it.
#[derive(Debug)]
pub struct BaseComponent {
    base: Base,
}

impl BaseComponent {
    pub fn new(ids: &IdSource, patch: AttributePatch) -> Self {
        Self { base: Base::with_patch(ids, EntityKind::Base, patch) }
    }

    pub fn with_base(base: Base) -> Self {
        Self { base }
    }
}

impl Entity for BaseComponent {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn copy(&self, ids: &IdSource) -> Box<dyn Entity> {
        Box::new(Self { base: self.base.copy(ids) })
    }
}
