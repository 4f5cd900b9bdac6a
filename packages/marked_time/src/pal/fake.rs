//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// Fake clock whose current instant only changes when a test moves it.
///
/// Clones share the same underlying instant, so a test can keep one clone and
/// advance time while a recorder holds another.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    now: Arc<Mutex<Instant>>,
}

impl FakePlatform {
    /// Creates a fake clock frozen at an arbitrary starting instant.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves the clock forward by `by`.
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        *now = now
            .checked_add(by)
            .expect("advancing the fake clock overflows Instant - unrealistic test setup");
    }

    /// Moves the clock backward by `by`, simulating out-of-order instants.
    pub(crate) fn rewind(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        *now = now
            .checked_sub(by)
            .expect("rewinding the fake clock underflows Instant - unrealistic test setup");
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Instant {
        *self
            .now
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn time_is_frozen_until_advanced() {
        let platform = FakePlatform::new();

        assert_eq!(platform.now(), platform.now());
    }

    #[test]
    fn advance_moves_forward() {
        let platform = FakePlatform::new();
        let before = platform.now();

        platform.advance(Duration::from_millis(150));

        assert_eq!(platform.now().duration_since(before), Duration::from_millis(150));
    }

    #[test]
    fn rewind_moves_backward() {
        let platform = FakePlatform::new();
        platform.advance(Duration::from_millis(100));
        let before = platform.now();

        platform.rewind(Duration::from_millis(40));

        assert_eq!(before.duration_since(platform.now()), Duration::from_millis(40));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance(Duration::from_millis(100));

        assert_eq!(platform1.now(), platform2.now());
    }
}
