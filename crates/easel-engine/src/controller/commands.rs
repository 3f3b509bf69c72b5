use std::fmt;

use crate::core::Entity;
use crate::id::EntityId;

pub(crate) enum Command {
    AddComponent(Box<dyn Entity>),
    AddService(Box<dyn Entity>),
    RemoveComponent(EntityId),
    Pause,
}

/// Deferred controller requests.
///
/// Reachable from `FrameCtx` and from hooks. Requests are buffered and
/// applied, in order, after the current pass or hook returns, so the registry
/// is never mutated while the pipeline iterates it.
#[derive(Default)]
pub struct Commands {
    queue: Vec<Command>,
}

impl Commands {
    pub fn add_component(&mut self, component: impl Entity) {
        self.queue.push(Command::AddComponent(Box::new(component)));
    }

    pub fn add_component_boxed(&mut self, component: Box<dyn Entity>) {
        self.queue.push(Command::AddComponent(component));
    }

    pub fn add_service(&mut self, service: impl Entity) {
        self.queue.push(Command::AddService(Box::new(service)));
    }

    /// Removes immediately after the pass (with `on_destroy`), without
    /// waiting for the next reap.
    pub fn remove_component(&mut self, id: EntityId) {
        self.queue.push(Command::RemoveComponent(id));
    }

    pub fn pause(&mut self) {
        self.queue.push(Command::Pause);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.queue)
    }
}

impl fmt::Debug for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commands").field("queued", &self.queue.len()).finish()
    }
}
