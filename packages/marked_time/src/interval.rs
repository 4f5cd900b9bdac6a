//! Derivation of intervals from recorded events.

use std::iter;
use std::time::{Duration, Instant};

use crate::Event;

/// The time spent between one recorded event and the next.
///
/// The final interval of a recording runs from the last event to the moment the
/// intervals were computed.
///
/// # Examples
///
/// ```
/// use marked_time::IntervalRecorder;
///
/// let mut recorder = IntervalRecorder::builder("load").emit_on_drop(false).build();
/// recorder.add_event("parse");
///
/// let intervals = recorder.compute_intervals();
/// assert_eq!(intervals.len(), 2);
/// assert_eq!(intervals[0].label(), "load");
/// assert_eq!(intervals[1].label(), "parse");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interval {
    label: String,
    duration: Duration,
}

impl Interval {
    pub(crate) fn new(label: impl Into<String>, duration: Duration) -> Self {
        Self {
            label: label.into(),
            duration,
        }
    }

    /// The label of the event that starts this interval.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// How long the interval lasted.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// How long the interval lasted, in fractional milliseconds.
    #[must_use]
    pub fn millis(&self) -> f64 {
        as_millis_f64(self.duration)
    }
}

/// Returns the non-negative time between two instants, in whichever order they are given.
///
/// The clock is monotonic so `later` is normally not before `earlier`, but the order of
/// the arguments never produces a negative or saturated-to-zero result.
#[must_use]
pub fn elapsed_between(a: Instant, b: Instant) -> Duration {
    if b < a { a.duration_since(b) } else { b.duration_since(a) }
}

pub(crate) fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Derives one interval per event, closing the last one at `now`.
pub(crate) fn intervals_between(events: &[Event], now: Instant) -> Vec<Interval> {
    let ends = events
        .iter()
        .skip(1)
        .map(Event::instant)
        .chain(iter::once(now));

    events
        .iter()
        .zip(ends)
        .map(|(event, end)| Interval::new(event.label(), elapsed_between(event.instant(), end)))
        .collect()
}
