/// Selects how a [`Report`](crate::Report) is laid out as text.
///
/// # Examples
///
/// ```
/// use marked_time::{IntervalRecorder, ReportLayout};
///
/// let recorder = IntervalRecorder::builder("startup")
///     .layout(ReportLayout::Narrative)
///     .emit_on_drop(false)
///     .build();
///
/// assert_eq!(recorder.layout(), ReportLayout::Narrative);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ReportLayout {
    /// Tab-separated columns, one row per interval in rank order. Easy to paste into a
    /// spreadsheet or to parse with line-oriented tools.
    #[default]
    Tabular,

    /// Prose sentences: first every interval in recording order, then every interval
    /// in rank order with its ordinal position.
    Narrative,
}
