//! Debounce and Stale-Response Filtering

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;

/// Monotonic ticket counter; only the newest ticket is honoured
#[derive(Clone, Debug, Default)]
pub struct LatestOnly {
    counter: Arc<AtomicU64>,
}

impl LatestOnly {
    pub fn issue(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.counter.load(Ordering::Acquire) == ticket
    }
}

/// Delays an action until input has been quiet for `delay`
#[derive(Clone, Debug)]
pub struct Debouncer {
    latest: LatestOnly,
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { latest: LatestOnly::default(), delay }
    }

    /// Timer delay, saturating at the largest value the browser timer takes
    fn delay_millis(&self) -> u32 {
        u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX)
    }

    /// Wait out the delay; `true` if no newer call arrived meanwhile
    pub async fn settle(&self) -> bool {
        let ticket = self.latest.issue();
        TimeoutFuture::new(self.delay_millis()).await;
        self.latest.is_latest(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_ticket_does_not_commit() {
        let latest = LatestOnly::default();
        let first = latest.issue();
        assert!(latest.is_latest(first));

        let second = latest.clone().issue();
        assert!(!latest.is_latest(first));
        assert!(latest.is_latest(second));
    }

    #[test]
    fn test_delay_millis_saturates() {
        assert_eq!(Debouncer::new(Duration::from_millis(350)).delay_millis(), 350);
        assert_eq!(Debouncer::new(Duration::from_secs(u64::MAX)).delay_millis(), u32::MAX);
    }
}
