//! Time Source
//! Mission: Single injectable clock so expiry checks are deterministic in tests

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of "now" in unix seconds.
///
/// Every expiry comparison in the crate goes through one of these, never
/// through an ambient system-time call inside core logic.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Wall-clock time for production use.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Settable clock for tests — simulate expiry by advancing instead of sleeping.
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now(), 1_000);

        clock.advance(3_600);
        assert_eq!(clock.now(), 4_600);

        clock.set(42);
        assert_eq!(clock.now(), 42);
    }

    #[test]
    fn test_system_clock_is_sane() {
        // 2020-01-01 as a floor; catches a zeroed or negative clock.
        assert!(SystemClock.now() > 1_577_836_800);
    }
}
