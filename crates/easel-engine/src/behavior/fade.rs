use crate::core::{Attributes, EntityState};

use super::Behavior;

/// Walks the host's opacity toward `target` by `step` per frame.
///
/// With [`destroy_on_finish`](Self::destroy_on_finish) the host is marked
/// destroyed on the frame the target is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    pub target: u8,
    pub step: u8,
    pub destroy_on_finish: bool,
    finished: bool,
}

impl Fade {
    pub fn new(target: u8, step: u8) -> Self {
        Self {
            target: target.min(100),
            step: step.max(1),
            destroy_on_finish: false,
            finished: false,
        }
    }

    pub fn destroy_on_finish(mut self) -> Self {
        self.destroy_on_finish = true;
        self
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Behavior for Fade {
    fn update(&mut self, host: &mut Attributes) {
        if self.finished {
            return;
        }

        let current = host.opacity.min(100);
        host.opacity = if current < self.target {
            current.saturating_add(self.step).min(self.target)
        } else {
            current.saturating_sub(self.step).max(self.target)
        };

        if host.opacity == self.target {
            self.finished = true;
            if self.destroy_on_finish {
                host.state = EntityState::Destroyed;
            }
        }
    }

    fn copy(&self) -> Box<dyn Behavior> {
        Box::new(Self { finished: false, ..self.clone() })
    }
}
