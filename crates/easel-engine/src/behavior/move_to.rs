use crate::coords::Vec2;
use crate::core::Attributes;

use super::Behavior;

/// Moves the host toward `target` by at most `speed` pixels per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveTo {
    pub target: Vec2,
    pub speed: f32,
}

impl MoveTo {
    pub fn new(target: Vec2, speed: f32) -> Self {
        Self { target, speed: speed.abs() }
    }

    pub fn arrived(&self, host: &Attributes) -> bool {
        host.x == self.target.x && host.y == self.target.y
    }
}

impl Behavior for MoveTo {
    fn update(&mut self, host: &mut Attributes) {
        let next = Vec2::new(host.x, host.y).step_toward(self.target, self.speed);
        host.x = next.x;
        host.y = next.y;
    }

    fn copy(&self) -> Box<dyn Behavior> {
        Box::new(self.clone())
    }
}
