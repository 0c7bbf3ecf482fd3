//! Per-artwork engagement counters.

use crate::error::AppError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// View/like deltas for one artwork. Monotonically non-decreasing; never
/// reset for the life of the process.
#[derive(Debug, Default)]
pub struct CounterEntry {
    views: AtomicU64,
    likes: AtomicU64,
}

impl CounterEntry {
    fn load(&self) -> (u64, u64) {
        (
            self.views.load(Ordering::Relaxed),
            self.likes.load(Ordering::Relaxed),
        )
    }
}

/// Store of live engagement deltas keyed by artwork id.
///
/// Increments to an existing entry take the read lock and a `fetch_add`, so
/// concurrent increments to different ids never contend; the write lock is
/// held only long enough to materialize a missing entry. Entries are never
/// evicted or folded back into base counts (see DESIGN.md).
#[derive(Default)]
pub struct CounterStore {
    entries: RwLock<HashMap<String, Arc<CounterEntry>>>,
}

impl CounterStore {
    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Arc<CounterEntry>>>, AppError> {
        self.entries
            .read()
            .map_err(|_| AppError::Unavailable("counter store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Arc<CounterEntry>>>, AppError> {
        self.entries
            .write()
            .map_err(|_| AppError::Unavailable("counter store lock poisoned".to_string()))
    }

    fn entry(&self, id: &str) -> Result<Arc<CounterEntry>, AppError> {
        if let Some(entry) = self.read()?.get(id) {
            return Ok(entry.clone());
        }
        let mut entries = self.write()?;
        Ok(entries.entry(id.to_string()).or_default().clone())
    }

    /// Atomically add one view for `id`.
    ///
    /// # Returns
    /// The new view delta (not the effective count; callers own the base).
    pub fn bump_view(&self, id: &str) -> Result<u64, AppError> {
        Ok(self.entry(id)?.views.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Atomically add one like for `id`.
    ///
    /// # Returns
    /// The new like delta.
    pub fn bump_like(&self, id: &str) -> Result<u64, AppError> {
        Ok(self.entry(id)?.likes.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Current `(view delta, like delta)` for `id`; `(0, 0)` when the id has
    /// never been incremented. Pure read, creates no entry.
    pub fn deltas(&self, id: &str) -> Result<(u64, u64), AppError> {
        Ok(self
            .read()?
            .get(id)
            .map(|entry| entry.load())
            .unwrap_or((0, 0)))
    }

    /// Number of ids that have received at least one increment.
    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    /// Whether no id has been incremented yet.
    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_empty())
    }
}
