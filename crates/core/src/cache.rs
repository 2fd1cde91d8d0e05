//! Engine-owned synonym cache
//!
//! Memoizes candidate lists per distinct word for the lifetime of an engine
//! instance. The cache is the only shared mutable state in the core, so it
//! is guarded by a mutex and bounded: once full, the oldest entry is evicted
//! in insertion order.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Default number of cached words.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

#[derive(Debug, Default)]
struct CacheInner {
    map: HashMap<String, Vec<String>>,
    order: VecDeque<String>,
}

/// Capacity-bounded, thread-safe word → candidate-list cache.
#[derive(Debug)]
pub struct SynonymCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl SynonymCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity: capacity.max(1),
        }
    }

    /// Return the cached candidates for `word`, filling the entry with
    /// `fill` on first sight. Candidates are cloned out so the lock is
    /// never held across stage logic.
    pub fn get_or_insert_with<F>(&self, word: &str, fill: F) -> Vec<String>
    where
        F: FnOnce() -> Vec<String>,
    {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(cached) = inner.map.get(word) {
            return cached.clone();
        }

        let candidates = fill();
        if inner.map.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.map.remove(&oldest);
            }
        }
        inner.map.insert(word.to_string(), candidates.clone());
        inner.order.push_back(word.to_string());

        candidates
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SynonymCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
