//! Frame scheduling primitive.
//!
//! The controller asks for a tick `delay` from now and gets a [`TickHandle`]
//! back. Whoever drives the loop pulls fired ticks with
//! [`FrameScheduler::next_tick`] and hands them to the controller, so there is
//! no callback re-entry: a tick is always processed from a flat loop.

mod manual;
mod timer;

use core::fmt;
use std::time::Duration;

pub use manual::ManualScheduler;
pub use timer::TimerScheduler;

/// Identifies one scheduled tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TickHandle(pub u64);

impl fmt::Display for TickHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick{}", self.0)
    }
}

pub trait FrameScheduler {
    /// Schedules a tick `delay` from now.
    fn schedule(&mut self, delay: Duration) -> TickHandle;

    /// Drops a pending tick. Returns `false` if it already fired or never existed.
    fn cancel(&mut self, handle: TickHandle) -> bool;

    /// Waits for the earliest pending tick and returns it, or `None` when
    /// nothing is scheduled.
    fn next_tick(&mut self) -> Option<TickHandle>;

    /// Number of ticks scheduled and not yet fired or cancelled.
    fn pending(&self) -> usize;
}

/// Pending ticks ordered by due time, then by scheduling order.
#[derive(Debug)]
struct TickQueue<T: Ord + Copy> {
    next_handle: u64,
    entries: Vec<(T, TickHandle)>,
}

impl<T: Ord + Copy> Default for TickQueue<T> {
    fn default() -> Self {
        Self { next_handle: 0, entries: Vec::new() }
    }
}

impl<T: Ord + Copy> TickQueue<T> {
    fn push(&mut self, due: T) -> TickHandle {
        let handle = TickHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((due, handle));
        handle
    }

    fn remove(&mut self, handle: TickHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|&(_, h)| h != handle);
        self.entries.len() != before
    }

    /// Removes and returns the earliest entry.
    fn pop(&mut self) -> Option<(T, TickHandle)> {
        let (index, _) = self.entries.iter().enumerate().min_by_key(|(_, entry)| **entry)?;
        Some(self.entries.swap_remove(index))
    }

    fn peek_due(&self) -> Option<T> {
        self.entries.iter().min().map(|&(due, _)| due)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
