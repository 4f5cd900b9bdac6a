//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Instant;

/// Provides the current instant of a monotonic, high-resolution clock.
///
/// Implementations must never go backwards under normal operation, though callers
/// still treat out-of-order instants defensively.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current instant.
    fn now(&self) -> Instant;
}
