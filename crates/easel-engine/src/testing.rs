//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::assets::MemoryImageLoader;
use crate::behavior::Behavior;
use crate::config::Layout;
use crate::controller::Commands;
use crate::coords::Viewport;
use crate::core::{AttributePatch, Attributes, Base, Entity, EntityKind, FrameCtx};
use crate::id::{EntityId, IdSource};
use crate::surface::{CommandLog, RecordingSurface};
use crate::time::FrameClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Init(EntityId),
    Update(EntityId),
    Destroy(EntityId),
    Trait(EntityId),
}

/// Shared event log written by every probe that holds a clone.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Ids in update-call order.
    pub fn updates(&self) -> Vec<EntityId> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Update(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn destroyed(&self, id: EntityId) -> usize {
        self.0.borrow().iter().filter(|e| **e == Event::Destroy(id)).count()
    }

    pub fn inits(&self, id: EntityId) -> usize {
        self.0.borrow().iter().filter(|e| **e == Event::Init(id)).count()
    }
}

type UpdateHook = Rc<dyn Fn(EntityId, &mut FrameCtx<'_>)>;

pub const PROBE_DRAWABLE: EntityKind = EntityKind::Custom { name: "Probe", drawable: true };

/// Entity that records its lifecycle calls into a [`Journal`].
pub struct Probe {
    base: Base,
    journal: Journal,
    hook: Option<UpdateHook>,
}

impl Probe {
    pub fn new(ids: &IdSource, kind: EntityKind, patch: AttributePatch, journal: Journal) -> Self {
        Self {
            base: Base::with_patch(ids, kind, patch),
            journal,
            hook: None,
        }
    }

    pub fn generic(ids: &IdSource) -> (Self, Journal) {
        let journal = Journal::new();
        (Self::new(ids, EntityKind::Base, AttributePatch::new(), journal.clone()), journal)
    }

    pub fn drawable(ids: &IdSource, patch: AttributePatch, journal: &Journal) -> Self {
        Self::new(ids, PROBE_DRAWABLE, patch, journal.clone())
    }

    pub fn on_update(mut self, hook: impl Fn(EntityId, &mut FrameCtx<'_>) + 'static) -> Self {
        self.hook = Some(Rc::new(hook));
        self
    }
}

impl Entity for Probe {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn init(&mut self, _ctx: &mut FrameCtx<'_>) {
        self.journal.push(Event::Init(self.id()));
    }

    fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        self.journal.push(Event::Update(self.id()));
        if let Some(hook) = &self.hook {
            hook(self.id(), ctx);
        }
    }

    fn copy(&self, ids: &IdSource) -> Box<dyn Entity> {
        Box::new(Self {
            base: self.base.copy(ids),
            journal: self.journal.clone(),
            hook: self.hook.clone(),
        })
    }

    fn on_destroy(&mut self) {
        self.journal.push(Event::Destroy(self.id()));
    }
}

/// Behavior that logs an [`Event::Trait`] with the host it was dispatched for.
#[derive(Debug, Clone)]
pub struct TraitProbe {
    journal: Journal,
}

impl TraitProbe {
    pub fn new(journal: &Journal) -> Self {
        Self { journal: journal.clone() }
    }
}

impl Behavior for TraitProbe {
    fn update(&mut self, host: &mut Attributes) {
        self.journal.push(Event::Trait(host.id));
    }

    fn copy(&self) -> Box<dyn Behavior> {
        Box::new(self.clone())
    }
}

/// Owns everything a `FrameCtx` borrows, for driving entities and passes by hand.
pub struct Rig {
    pub ids: IdSource,
    pub log: CommandLog,
    pub images: MemoryImageLoader,
    pub commands: Commands,
    pub scale: f32,
    pub viewport: Viewport,
    surface: RecordingSurface,
    clock: FrameClock,
}

impl Rig {
    pub fn new() -> Self {
        let log = CommandLog::new();
        Self {
            ids: IdSource::new(),
            surface: RecordingSurface::new("rig", 320, 240, log.clone()),
            log,
            images: MemoryImageLoader::new(),
            commands: Commands::default(),
            scale: 1.0,
            viewport: Viewport::default(),
            clock: FrameClock::new(),
        }
    }

    pub fn ctx(&mut self) -> FrameCtx<'_> {
        FrameCtx::new(
            &mut self.surface,
            &mut self.images,
            &self.ids,
            &mut self.commands,
            self.clock.tick(),
            self.scale,
            self.viewport,
            Layout::default(),
        )
    }
}
