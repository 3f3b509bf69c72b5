use std::time::Duration;

use super::{FrameScheduler, TickHandle, TickQueue};

/// Deterministic scheduler on a virtual clock.
///
/// `next_tick` jumps the clock to the earliest due tick instead of sleeping,
/// so tests can drive any number of frames instantly.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    queue: TickQueue<Duration>,
    fired: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Ticks delivered so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Due time of the earliest pending tick.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek_due()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.queue.push(self.now + delay)
    }

    fn cancel(&mut self, handle: TickHandle) -> bool {
        self.queue.remove(handle)
    }

    fn next_tick(&mut self) -> Option<TickHandle> {
        let (due, handle) = self.queue.pop()?;
        self.now = self.now.max(due);
        self.fired += 1;
        Some(handle)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
