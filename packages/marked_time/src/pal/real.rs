use std::time::Instant;

use crate::pal::Platform;

/// Reads time from the operating system's monotonic clock via the Rust standard library.
#[derive(Debug)]
pub(crate) struct RealPlatform;

pub(crate) static BUILD_TARGET_PLATFORM: RealPlatform = RealPlatform;

impl Platform for RealPlatform {
    #[cfg_attr(test, mutants::skip)] // Real clock; covered by integration tests.
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
#[cfg(not(miri))] // Miri cannot talk to the real platform.
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn now_is_approximately_now() {
        let ours = BUILD_TARGET_PLATFORM.now();
        let std_now = Instant::now();

        assert!(std_now.saturating_duration_since(ours) < Duration::from_secs(1));
        assert!(ours.saturating_duration_since(std_now) < Duration::from_secs(1));
    }

    #[test]
    fn consecutive_instants_do_not_go_backwards() {
        let first = BUILD_TARGET_PLATFORM.now();
        let second = BUILD_TARGET_PLATFORM.now();

        assert!(second >= first);
    }
}
