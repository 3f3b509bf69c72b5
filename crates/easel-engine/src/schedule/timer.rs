use std::time::{Duration, Instant};

use super::{FrameScheduler, TickHandle, TickQueue};

/// Wall-clock scheduler: `next_tick` sleeps the calling thread until the
/// earliest tick is due.
///
/// There is no display-refresh source here; ticks land on the requested
/// delay, which is how the frame loop behaves without vsync.
#[derive(Debug, Default)]
pub struct TimerScheduler {
    queue: TickQueue<Instant>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for TimerScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.queue.push(Instant::now() + delay)
    }

    fn cancel(&mut self, handle: TickHandle) -> bool {
        self.queue.remove(handle)
    }

    fn next_tick(&mut self) -> Option<TickHandle> {
        let (due, handle) = self.queue.pop()?;
        let wait = due.saturating_duration_since(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        Some(handle)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
