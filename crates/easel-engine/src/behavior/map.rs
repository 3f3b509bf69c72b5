use crate::core::Attributes;
use crate::id::EntityId;

use super::{Behavior, TraitKind};

/// A behavior plus the id of the entity it is currently bound to.
#[derive(Debug)]
pub struct TraitSlot {
    host: Option<EntityId>,
    behavior: Box<dyn Behavior>,
}

impl TraitSlot {
    fn new(behavior: Box<dyn Behavior>) -> Self {
        Self { host: None, behavior }
    }

    /// Host bound by the last `init`/`dispatch`; `None` until then.
    #[inline]
    pub fn host(&self) -> Option<EntityId> {
        self.host
    }

    #[inline]
    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }

    fn bind(&mut self, host: &Attributes) {
        self.host = Some(host.id);
    }
}

/// Fixed map from [`TraitKind`] to an optional behavior.
#[derive(Debug, Default)]
pub struct TraitMap {
    slots: [Option<TraitSlot>; TraitKind::ALL.len()],
}

impl TraitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `behavior` under `kind`, returning the one it replaces.
    pub fn insert(&mut self, kind: TraitKind, behavior: Box<dyn Behavior>) -> Option<Box<dyn Behavior>> {
        self.slots[kind.index()]
            .replace(TraitSlot::new(behavior))
            .map(|slot| slot.behavior)
    }

    pub fn remove(&mut self, kind: TraitKind) -> Option<Box<dyn Behavior>> {
        self.slots[kind.index()].take().map(|slot| slot.behavior)
    }

    #[inline]
    pub fn contains(&self, kind: TraitKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    #[inline]
    pub fn get(&self, kind: TraitKind) -> Option<&TraitSlot> {
        self.slots[kind.index()].as_ref()
    }

    #[inline]
    pub fn host_of(&self, kind: TraitKind) -> Option<EntityId> {
        self.get(kind).and_then(TraitSlot::host)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Binds every present behavior to `host` and runs its `init`.
    pub fn init_all(&mut self, host: &mut Attributes) {
        for slot in self.slots.iter_mut().flatten() {
            slot.bind(host);
            slot.behavior.init(host);
        }
    }

    /// Rebinds every present behavior to `host`, then runs its `update`.
    pub fn dispatch(&mut self, host: &mut Attributes) {
        for slot in self.slots.iter_mut().flatten() {
            slot.bind(host);
            slot.behavior.update(host);
        }
    }

    /// Copies every behavior; copies start unbound.
    pub fn copy(&self) -> Self {
        let mut out = Self::new();
        for (dst, src) in out.slots.iter_mut().zip(&self.slots) {
            *dst = src.as_ref().map(|slot| TraitSlot::new(slot.behavior.copy()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::EntityKind;

    /// Records the host id seen by each update.
    #[derive(Debug, Clone, Default)]
    struct Witness {
        seen: Rc<RefCell<Vec<EntityId>>>,
        inits: Rc<RefCell<u32>>,
    }

    impl Behavior for Witness {
        fn init(&mut self, _host: &mut Attributes) {
            *self.inits.borrow_mut() += 1;
        }

        fn update(&mut self, host: &mut Attributes) {
            self.seen.borrow_mut().push(host.id);
        }

        fn copy(&self) -> Box<dyn Behavior> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn absent_slots_are_none() {
        let map = TraitMap::new();
        for kind in TraitKind::ALL {
            assert!(map.get(kind).is_none());
        }
        assert!(map.is_empty());
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut map = TraitMap::new();
        assert!(map.insert(TraitKind::Fade, Box::new(Witness::default())).is_none());
        assert!(map.insert(TraitKind::Fade, Box::new(Witness::default())).is_some());
        assert_eq!(map.len(), 1);
        let slot = map.get(TraitKind::Fade).unwrap();
        assert!(format!("{:?}", slot.behavior()).starts_with("Witness"));
        assert!(map.remove(TraitKind::Fade).is_some());
        assert!(map.is_empty());
    }

    #[test]
    fn dispatch_rebinds_host_before_update() {
        let witness = Witness::default();
        let mut map = TraitMap::new();
        map.insert(TraitKind::Animation, Box::new(witness.clone()));

        let mut first = Attributes::new(EntityId(1), EntityKind::Sprite);
        map.dispatch(&mut first);
        assert_eq!(map.host_of(TraitKind::Animation), Some(EntityId(1)));

        // Same map now driven by another host: the binding follows.
        let mut second = Attributes::new(EntityId(2), EntityKind::Sprite);
        map.dispatch(&mut second);
        assert_eq!(map.host_of(TraitKind::Animation), Some(EntityId(2)));
        assert_eq!(*witness.seen.borrow(), vec![EntityId(1), EntityId(2)]);
    }

    #[test]
    fn copy_is_unbound_and_rebinds_on_dispatch() {
        let witness = Witness::default();
        let mut map = TraitMap::new();
        map.insert(TraitKind::MoveTo, Box::new(witness.clone()));
        let mut host = Attributes::new(EntityId(5), EntityKind::Sprite);
        map.init_all(&mut host);
        assert_eq!(*witness.inits.borrow(), 1);

        let mut copied = map.copy();
        assert_eq!(copied.host_of(TraitKind::MoveTo), None);

        let mut other = Attributes::new(EntityId(6), EntityKind::Sprite);
        copied.dispatch(&mut other);
        assert_eq!(copied.host_of(TraitKind::MoveTo), Some(EntityId(6)));
        assert_eq!(map.host_of(TraitKind::MoveTo), Some(EntityId(5)));
        assert_eq!(*witness.seen.borrow(), vec![EntityId(6)]);
    }
}
