//! The interval recorder.

use std::io::{self, Write};

use tracing::{debug, trace, warn};

use crate::interval::intervals_between;
use crate::pal::{Platform, PlatformFacade};
use crate::sink::Sink;
use crate::{Event, Interval, RecorderBuilder, Report, ReportLayout};

/// Records labeled points in time and reports how long each stretch between them took.
///
/// Every recorded event starts an interval that ends at the next event. The interval of
/// the last event ends at the moment a report is produced. Reports rank intervals from
/// most to least expensive and show each one's share of the total.
///
/// By default the recorder writes a tabular report to standard error when it is dropped.
/// This happens exactly once, on every exit path from the enclosing scope, including
/// early returns and unwinding. Use [`builder()`](Self::builder) to change the layout,
/// disable drop-time reporting or redirect the output.
///
/// Time is read from a monotonic clock, so durations are not affected by wall clock
/// adjustments.
///
/// # Threading
///
/// A recorder is meant to profile one logical workflow on one thread. It is neither
/// `Send` nor `Sync`.
///
/// # Examples
///
/// ```
/// use marked_time::IntervalRecorder;
///
/// fn load_config() {
///     let mut timings = IntervalRecorder::new("read file");
///     // ... read the file ...
///     timings.add_event("parse");
///     // ... parse it ...
///     timings.add_event("validate");
///     // ... validate it ...
/// } // Report printed to stderr here.
/// # load_config();
/// ```
///
/// Reusing one recorder across independent phases:
///
/// ```
/// use marked_time::IntervalRecorder;
///
/// let mut timings = IntervalRecorder::builder("phase 1").emit_on_drop(false).build();
/// timings.add_event("phase 1, step 2");
/// timings.emit();
///
/// timings.restart("phase 2");
/// assert_eq!(timings.len(), 1);
/// ```
#[derive(Debug)]
pub struct IntervalRecorder {
    events: Vec<Event>,
    layout: ReportLayout,
    emit_on_drop: bool,
    sink: Sink,
    platform: PlatformFacade,
}

impl IntervalRecorder {
    /// Creates a recorder whose first event is `label`, reporting in the tabular layout to
    /// standard error when dropped.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::builder(label).build()
    }

    /// Starts configuring a recorder whose first event will be `label`.
    pub fn builder(label: impl Into<String>) -> RecorderBuilder {
        RecorderBuilder::new(label.into())
    }

    /// Creates a recorder with no events that never reports on drop.
    ///
    /// Call [`restart()`](Self::restart) or [`add_event()`](Self::add_event) before use.
    /// Reporting policies can be enabled later with [`set_layout()`](Self::set_layout)
    /// and [`set_emit_on_drop()`](Self::set_emit_on_drop).
    #[must_use]
    pub fn inert() -> Self {
        Self {
            events: Vec::new(),
            layout: ReportLayout::default(),
            emit_on_drop: false,
            sink: Sink::default(),
            platform: PlatformFacade::real(),
        }
    }

    pub(crate) fn from_parts(
        label: String,
        layout: ReportLayout,
        emit_on_drop: bool,
        sink: Sink,
        platform: PlatformFacade,
    ) -> Self {
        let first = Event::new(label, platform.now());

        Self {
            events: vec![first],
            layout,
            emit_on_drop,
            sink,
            platform,
        }
    }

    /// Discards every recorded event and starts over with a single event `label`.
    pub fn restart(&mut self, label: impl Into<String>) {
        let label = label.into();

        debug!(
            label = %label,
            discarded_events = self.events.len(),
            "interval recorder restarted"
        );

        self.events.clear();
        self.events.push(Event::new(label, self.platform.now()));
    }

    /// Records an event `label` at the current instant.
    ///
    /// This ends the interval of the previous event and starts a new one.
    pub fn add_event(&mut self, label: impl Into<String>) {
        let label = label.into();

        trace!(label = %label, index = self.events.len(), "event recorded");

        self.events.push(Event::new(label, self.platform.now()));
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of recorded events, which is also the number of intervals in a report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The layout used when emitting reports.
    #[must_use]
    pub fn layout(&self) -> ReportLayout {
        self.layout
    }

    /// Changes the layout used when emitting reports.
    pub fn set_layout(&mut self, layout: ReportLayout) {
        self.layout = layout;
    }

    /// Whether a report is emitted when the recorder is dropped.
    #[must_use]
    pub fn emits_on_drop(&self) -> bool {
        self.emit_on_drop
    }

    /// Changes whether a report is emitted when the recorder is dropped.
    pub fn set_emit_on_drop(&mut self, emit_on_drop: bool) {
        self.emit_on_drop = emit_on_drop;
    }

    /// Computes one interval per recorded event, in recording order.
    ///
    /// Each interval runs from its event to the next one. The last interval runs until
    /// the moment of this call. No events means no intervals.
    #[must_use]
    pub fn compute_intervals(&self) -> Vec<Interval> {
        intervals_between(&self.events, self.platform.now())
    }

    /// Creates a report of the intervals as of right now.
    #[must_use]
    pub fn to_report(&self) -> Report {
        Report::from_intervals(self.compute_intervals())
    }

    /// Writes a report of the intervals as of right now to `out`, in the configured
    /// layout.
    ///
    /// Nothing is written if there are no events.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_report(&self, out: &mut impl Write) -> io::Result<()> {
        self.to_report().write_to(out, self.layout)
    }

    /// Writes a report of the intervals as of right now to the configured output.
    ///
    /// Nothing is written if there are no events. Failure to write is logged and
    /// otherwise ignored, as the report is only a diagnostic aid.
    pub fn emit(&mut self) {
        let report = self.to_report();

        if report.is_empty() {
            return;
        }

        debug!(
            intervals = report.len(),
            total_ms = report.total_millis(),
            layout = ?self.layout,
            "emitting interval report"
        );

        let text = report.display(self.layout).to_string();

        if let Err(error) = self.sink.write_all(text.as_bytes()) {
            warn!(%error, "failed to write interval report");
        }
    }

    /// Emits the report now, whatever the drop policy, and consumes the recorder
    /// without emitting again.
    pub fn finish(mut self) {
        self.emit();
        self.emit_on_drop = false;
    }
}

impl Default for IntervalRecorder {
    fn default() -> Self {
        Self::inert()
    }
}

impl Drop for IntervalRecorder {
    fn drop(&mut self) {
        if self.emit_on_drop {
            self.emit();
        }
    }
}
