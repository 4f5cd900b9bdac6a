//! Configuration of interval recorders.

use std::io::Write;

use crate::pal::PlatformFacade;
use crate::sink::Sink;
use crate::{IntervalRecorder, ReportLayout};

/// Builder for an [`IntervalRecorder`] with non-default reporting policies.
///
/// By default the recorder emits a [`ReportLayout::Tabular`] report to standard error
/// when it is dropped. Each policy can be changed independently.
///
/// # Examples
///
/// ```
/// use marked_time::{IntervalRecorder, ReportLayout};
///
/// let mut recorder = IntervalRecorder::builder("connect")
///     .layout(ReportLayout::Narrative)
///     .emit_on_drop(false)
///     .build();
///
/// recorder.add_event("handshake");
/// recorder.add_event("transfer");
///
/// // Nothing is printed when `recorder` goes out of scope.
/// ```
///
/// Capturing the report instead of printing it:
///
/// ```
/// use marked_time::IntervalRecorder;
///
/// let mut recorder = IntervalRecorder::builder("work").sink(Vec::new()).build();
/// recorder.add_event("more work");
/// recorder.finish();
/// ```
#[derive(Debug)]
#[must_use = "the builder does nothing until build() is called"]
pub struct RecorderBuilder {
    label: String,
    layout: ReportLayout,
    emit_on_drop: bool,
    sink: Sink,
    platform: PlatformFacade,
}

impl RecorderBuilder {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            layout: ReportLayout::default(),
            emit_on_drop: true,
            sink: Sink::default(),
            platform: PlatformFacade::real(),
        }
    }

    /// Selects the layout used whenever the recorder emits a report.
    pub fn layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Whether the recorder emits its report when dropped. Defaults to `true`.
    pub fn emit_on_drop(mut self, emit_on_drop: bool) -> Self {
        self.emit_on_drop = emit_on_drop;
        self
    }

    /// Writes emitted reports to `writer` instead of standard error.
    pub fn sink(mut self, writer: impl Write + 'static) -> Self {
        self.sink = Sink::writer(writer);
        self
    }

    #[cfg(test)]
    pub(crate) fn platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Creates the recorder, recording its first event right now.
    #[must_use]
    pub fn build(self) -> IntervalRecorder {
        IntervalRecorder::from_parts(
            self.label,
            self.layout,
            self.emit_on_drop,
            self.sink,
            self.platform,
        )
    }
}
