//! Keyed storage for services and components.
//!
//! Both collections are ordered by id, so iteration follows creation order for
//! entities minted by one `IdSource`. That order is what the generic update
//! pass uses and what the depth sort treats as "original order" for ties.

use std::collections::BTreeMap;

use crate::core::Entity;
use crate::id::EntityId;

#[derive(Default)]
pub struct Registry {
    services: BTreeMap<EntityId, Box<dyn Entity>>,
    components: BTreeMap<EntityId, Box<dyn Entity>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts under the service's id. Last write wins; the displaced
    /// service is returned.
    pub fn insert_service(&mut self, service: Box<dyn Entity>) -> Option<Box<dyn Entity>> {
        self.services.insert(service.id(), service)
    }

    /// Inserts under the component's id. Last write wins; the displaced
    /// component is returned without its `on_destroy` being called.
    pub fn insert_component(&mut self, component: Box<dyn Entity>) -> Option<Box<dyn Entity>> {
        self.components.insert(component.id(), component)
    }

    pub fn service(&self, id: EntityId) -> Option<&dyn Entity> {
        self.services.get(&id).map(|s| s.as_ref())
    }

    pub fn service_mut(&mut self, id: EntityId) -> Option<&mut (dyn Entity + 'static)> {
        self.services.get_mut(&id).map(|s| s.as_mut())
    }

    pub fn component(&self, id: EntityId) -> Option<&dyn Entity> {
        self.components.get(&id).map(|c| c.as_ref())
    }

    pub fn component_mut(&mut self, id: EntityId) -> Option<&mut (dyn Entity + 'static)> {
        self.components.get_mut(&id).map(|c| c.as_mut())
    }

    /// Runs `on_destroy` and removes the component. `None` if absent.
    pub fn remove_component(&mut self, id: EntityId) -> Option<Box<dyn Entity>> {
        let mut component = self.components.remove(&id)?;
        component.on_destroy();
        Some(component)
    }

    /// Runs `on_destroy` and removes the service. `None` if absent.
    pub fn remove_service(&mut self, id: EntityId) -> Option<Box<dyn Entity>> {
        let mut service = self.services.remove(&id)?;
        service.on_destroy();
        Some(service)
    }

    pub fn contains_id(&self, id: EntityId) -> bool {
        self.services.contains_key(&id) || self.components.contains_key(&id)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// Component ids in iteration order.
    pub fn component_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.components.keys().copied()
    }

    pub(crate) fn components_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Entity>> + '_ {
        self.components.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttributePatch, BaseComponent};
    use crate::id::IdSource;
    use crate::testing::Probe;

    #[test]
    fn component_round_trip() {
        let ids = IdSource::new();
        let mut registry = Registry::new();
        let e = BaseComponent::new(&ids, AttributePatch::new().position(3.0, 4.0));
        let id = e.id();

        assert!(registry.insert_component(Box::new(e)).is_none());
        let found = registry.component(id).unwrap();
        assert_eq!(found.id(), id);
        assert_eq!(found.attributes().x, 3.0);

        assert!(registry.remove_component(id).is_some());
        assert!(registry.component(id).is_none());
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut registry = Registry::new();
        assert!(registry.remove_component(EntityId(12)).is_none());
        assert_eq!(registry.component_count(), 0);
    }

    #[test]
    fn remove_runs_on_destroy_once() {
        let ids = IdSource::new();
        let (probe, journal) = Probe::generic(&ids);
        let id = probe.id();
        let mut registry = Registry::new();
        registry.insert_component(Box::new(probe));

        registry.remove_component(id);
        registry.remove_component(id);
        assert_eq!(journal.destroyed(id), 1);
    }

    #[test]
    fn duplicate_id_last_write_wins() {
        let ids = IdSource::new();
        let mut registry = Registry::new();
        let first = BaseComponent::new(&ids, AttributePatch::new().id(EntityId(7)).size(1.0, 1.0));
        let second = BaseComponent::new(&ids, AttributePatch::new().id(EntityId(7)).size(2.0, 2.0));

        assert!(registry.insert_service(Box::new(first)).is_none());
        let displaced = registry.insert_service(Box::new(second)).unwrap();
        assert_eq!(displaced.attributes().width, 1.0);
        assert_eq!(registry.service(EntityId(7)).unwrap().attributes().width, 2.0);
        assert_eq!(registry.service_count(), 1);
    }

    #[test]
    fn iteration_follows_id_order() {
        let ids = IdSource::new();
        let mut registry = Registry::new();
        let a = BaseComponent::new(&ids, AttributePatch::new());
        let b = BaseComponent::new(&ids, AttributePatch::new());
        let (ia, ib) = (a.id(), b.id());
        registry.insert_component(Box::new(b));
        registry.insert_component(Box::new(a));
        assert_eq!(registry.component_ids().collect::<Vec<_>>(), vec![ia, ib]);
    }
}
