use std::time::Instant;

/// A labeled point in time recorded by an [`IntervalRecorder`](crate::IntervalRecorder).
///
/// Events are immutable once recorded. The label of an event also names the interval
/// that starts at it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    label: String,
    instant: Instant,
}

impl Event {
    pub(crate) fn new(label: String, instant: Instant) -> Self {
        Self { label, instant }
    }

    /// The label given when the event was recorded.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The monotonic instant at which the event was recorded.
    #[must_use]
    pub fn instant(&self) -> Instant {
        self.instant
    }
}
