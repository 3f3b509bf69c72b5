use core::ops::{Add, Sub};

/// Point or offset on the surface, in surface pixels. Used for sprite
/// origins and movement targets.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = other - self;
        d.x.hypot(d.y)
    }

    /// Moves toward `target` by at most `max_step`, landing exactly on it
    /// when it is within reach. Non-finite distances snap to `target`.
    pub fn step_toward(self, target: Vec2, max_step: f32) -> Vec2 {
        let dist = self.distance(target);
        if dist <= max_step || !dist.is_finite() {
            return target;
        }
        let t = max_step / dist;
        let d = target - self;
        Vec2::new(self.x + d.x * t, self.y + d.y * t)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
