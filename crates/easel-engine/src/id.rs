use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque entity identifier.
///
/// Minted by [`IdSource`]; never reused within one source.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct EntityId(pub u64);

impl EntityId {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id generator.
///
/// One source is meant to be shared by everything that mints ids for the same
/// controller (usually as `Arc<IdSource>`), so ids are unique across services
/// and components. Ids start at 0 and are never released. Overflow is not
/// handled.
#[derive(Debug, Default)]
pub struct IdSource {
    next: AtomicU64,
}

impl IdSource {
    pub const fn new() -> Self {
        Self { next: AtomicU64::new(0) }
    }

    /// Returns a fresh id, strictly greater than every id returned before.
    #[inline]
    pub fn next(&self) -> EntityId {
        EntityId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`next`](Self::next) will return.
    #[inline]
    pub fn peek(&self) -> EntityId {
        EntityId(self.next.load(Ordering::Relaxed))
    }
}
