//! Pagination Loading Guard
//!
//! At most one incremental page fetch runs at a time; triggers arriving
//! while one is pending are dropped, not queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct LoadGuard {
    loading: Arc<AtomicBool>,
}

/// Held for the duration of one fetch; releases the guard on drop
#[derive(Debug)]
pub struct LoadTicket {
    loading: Arc<AtomicBool>,
}

impl LoadGuard {
    /// Claim the guard, or `None` if a fetch is already pending
    pub fn try_acquire(&self) -> Option<LoadTicket> {
        self.loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadTicket { loading: self.loading.clone() })
    }
}

impl Drop for LoadTicket {
    fn drop(&mut self) {
        self.loading.store(false, Ordering::Release);
    }
}

/// Whether rendering up to `visible_stop` should page in more records
pub fn needs_more(visible_stop: Option<usize>, loaded: usize, total: usize) -> bool {
    match visible_stop {
        Some(stop) => loaded > 0 && stop + 1 >= loaded && loaded < total,
        None => false,
    }
}
