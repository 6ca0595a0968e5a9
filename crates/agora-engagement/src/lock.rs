//! Per-key toggle lock coordination
//!
//! Serializes in-flight toggles sharing the same (actor, target) key within
//! one process. Per-key mutexes are created lazily in a map guarded by a
//! short synchronous lock; the per-key mutex itself guards the critical
//! section and is held across awaits via an owned guard.
//!
//! This lock only reduces contention and redundant lock-table entries on
//! the storage side. It is not the correctness guarantee: other processes
//! can race on the same row, so every toggle also takes a storage-level
//! write-intent lock inside its transaction. Lock order is fixed
//! (coordinator key first, then the storage row) and both release on every
//! exit path, so the pair cannot deadlock.

use crate::target::TargetRef;
use agora_core::ActorId;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Key identifying one toggle critical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleKey {
    /// Actor performing the toggle
    pub actor: ActorId,
    /// Target being toggled
    pub target: TargetRef,
}

impl ToggleKey {
    /// Create a key for an (actor, target) pair.
    pub fn new(actor: ActorId, target: TargetRef) -> Self {
        Self { actor, target }
    }
}

/// Scoped handle over one key's critical section; releases on drop.
pub type ToggleGuard = OwnedMutexGuard<()>;

/// Lazily-populated map of per-key toggle mutexes.
///
/// Entries are retained for the coordinator's lifetime, bounded by the set
/// of keys actually toggled.
#[derive(Debug, Default)]
pub struct LockCoordinator {
    slots: Mutex<HashMap<ToggleKey, Arc<AsyncMutex<()>>>>,
}

impl LockCoordinator {
    /// Create an empty coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the critical section for `key`, waiting if another toggle
    /// on the same key is in flight. Toggles on different keys proceed in
    /// parallel with no coordination.
    pub async fn acquire(&self, key: ToggleKey) -> ToggleGuard {
        let slot = {
            let mut slots = self.slots.lock();
            slots
                .entry(key)
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        // The map guard is released before this await.
        slot.lock_owned().await
    }

    /// Number of keys that have been toggled through this coordinator.
    pub fn tracked_keys(&self) -> usize {
        self.slots.lock().len()
    }
}
