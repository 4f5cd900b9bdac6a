//! Platform abstraction layer for the monotonic clock.
//!
//! Production code reads time from `std::time::Instant`. Tests swap in a fake platform
//! whose current instant only moves when the test says so, which makes interval
//! durations exact and repeatable.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
pub(crate) use real::{BUILD_TARGET_PLATFORM, RealPlatform};
