//! Records labeled points in time during a program's execution and reports where the time
//! between them went.
//!
//! Mark the start of each step of a sequence of operations with an [`IntervalRecorder`].
//! Every mark starts an [`Interval`] that ends at the next mark (or, for the last one, at
//! the moment the report is produced). The [`Report`] ranks the intervals from most to
//! least expensive and shows the share of the total taken by each.
//!
//! This package is meant for ad-hoc profiling during development, not for use in
//! production code paths.
//!
//! # Simple usage
//!
//! ```
//! use marked_time::IntervalRecorder;
//!
//! # fn main() {
//! let mut timings = IntervalRecorder::new("allocate");
//! let mut values: Vec<String> = Vec::with_capacity(10_000);
//!
//! timings.add_event("format");
//! values.extend((0..10_000).map(|i| i.to_string()));
//!
//! timings.add_event("sort");
//! values.sort();
//!
//! // The recorder writes a report to stderr when it goes out of scope.
//! # }
//! ```
//!
//! The default tabular report looks like this:
//!
//! ```text
//! # Total: 3.802114 ms
//! #Index	Event	Rank	Time (ms)	% of total
//! 2	sort	1	2.911480	%76.5755208974
//! 1	format	2	0.874019	%22.9877209713
//! 0	allocate	3	0.016615	%0.4367581313
//! ```
//!
//! # Report layouts
//!
//! [`ReportLayout::Narrative`] writes sentences instead of columns: first each interval in
//! recording order, then each interval in rank order.
//!
//! ```
//! use marked_time::{IntervalRecorder, ReportLayout};
//!
//! let mut timings = IntervalRecorder::builder("connect")
//!     .layout(ReportLayout::Narrative)
//!     .build();
//! timings.add_event("query");
//! ```
//!
//! ```text
//! connect took 12.407551 ms, 80.1049632731% of 15.488999 ms total
//! query took 3.081448 ms, 19.8950367269% of 15.488999 ms total
//! 0/connect is the 1st most expensive with 80.1049632731% of total time
//! 1/query is the 2nd most expensive with 19.8950367269% of total time
//! ```
//!
//! # Reporting explicitly
//!
//! Drop-time reporting can be disabled, with the report obtained as data or written to
//! any [`std::io::Write`] instead.
//!
//! ```
//! use marked_time::IntervalRecorder;
//!
//! let mut timings = IntervalRecorder::builder("warm up")
//!     .emit_on_drop(false)
//!     .build();
//! timings.add_event("measure");
//!
//! let report = timings.to_report();
//! assert_eq!(report.len(), 2);
//!
//! let mut captured = Vec::new();
//! timings.write_report(&mut captured).unwrap();
//! assert!(!captured.is_empty());
//! ```
//!
//! # Zero elapsed time
//!
//! When the total duration is zero, every interval is reported as 0% of the total.
//!
//! # Logging
//!
//! Recording and reporting emit `tracing` events at trace and debug level. A failure to
//! write a report is logged at warn level and otherwise ignored.
//!
//! # Threading
//!
//! A recorder profiles one workflow on one thread and is neither `Send` nor `Sync`.
//! Reports are plain data and can be sent anywhere.

mod builder;
mod event;
mod interval;
mod layout;
mod ordinal;
mod pal;
mod recorder;
mod report;
mod sink;

pub use builder::RecorderBuilder;
pub use event::Event;
pub use interval::{Interval, elapsed_between};
pub use layout::ReportLayout;
pub use ordinal::Ordinal;
pub use recorder::IntervalRecorder;
pub use report::{RankedInterval, Report};
