use crate::core::Attributes;

use super::Behavior;

/// Cycles the host's `frame` through `0..frames`, advancing once every
/// `ticks_per_frame` updates.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnimation {
    pub frames: u32,
    pub ticks_per_frame: u32,
    ticks: u32,
}

impl FrameAnimation {
    pub fn new(frames: u32, ticks_per_frame: u32) -> Self {
        Self {
            frames: frames.max(1),
            ticks_per_frame: ticks_per_frame.max(1),
            ticks: 0,
        }
    }
}

impl Behavior for FrameAnimation {
    fn init(&mut self, host: &mut Attributes) {
        self.ticks = 0;
        host.frame %= self.frames;
    }

    fn update(&mut self, host: &mut Attributes) {
        self.ticks += 1;
        if self.ticks >= self.ticks_per_frame {
            self.ticks = 0;
            host.frame = (host.frame % self.frames + 1) % self.frames;
        }
    }

    fn copy(&self) -> Box<dyn Behavior> {
        Box::new(Self::new(self.frames, self.ticks_per_frame))
    }
}
