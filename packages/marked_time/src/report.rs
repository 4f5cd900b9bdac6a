//! Ranking of intervals and their text rendering.

use std::cmp::Reverse;
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crate::interval::as_millis_f64;
use crate::{Interval, Ordinal, ReportLayout};

/// A snapshot of where the time went between recorded events.
///
/// A `Report` holds the intervals in recording order, their total duration and the
/// order of the intervals from most to least expensive. It is built by
/// [`IntervalRecorder::to_report()`](crate::IntervalRecorder::to_report) and is
/// independent of the recorder afterwards.
///
/// If the total duration is zero (all events at the same instant, or nothing recorded)
/// every interval is reported as 0% of the total.
///
/// # Examples
///
/// ```
/// use marked_time::{IntervalRecorder, ReportLayout};
///
/// let mut recorder = IntervalRecorder::builder("prepare").emit_on_drop(false).build();
/// recorder.add_event("execute");
///
/// let report = recorder.to_report();
/// assert_eq!(report.len(), 2);
///
/// for ranked in report.ranked() {
///     println!(
///         "{} is #{} at {:.1}%",
///         ranked.interval().label(),
///         ranked.rank(),
///         ranked.percentage()
///     );
/// }
///
/// eprint!("{}", report.display(ReportLayout::Narrative));
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    intervals: Vec<Interval>,
    total: Duration,

    // Indexes into `intervals`, most expensive first.
    rank_order: Vec<usize>,
}

impl Report {
    /// Builds a report from intervals given in recording order.
    #[must_use]
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        let total = intervals
            .iter()
            .map(Interval::duration)
            .fold(Duration::ZERO, |acc, d| {
                acc.checked_add(d)
                    .expect("summing interval durations overflows Duration - this indicates an unrealistic scenario")
            });

        let mut by_duration: Vec<(usize, Duration)> = intervals
            .iter()
            .map(Interval::duration)
            .enumerate()
            .collect();

        // Stable, so exact ties keep their recording order.
        by_duration.sort_by_key(|&(_, duration)| Reverse(duration));

        Self {
            intervals,
            total,
            rank_order: by_duration.into_iter().map(|(index, _)| index).collect(),
        }
    }

    /// The intervals in recording order.
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The sum of all interval durations.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// The sum of all interval durations, in fractional milliseconds.
    #[must_use]
    pub fn total_millis(&self) -> f64 {
        as_millis_f64(self.total)
    }

    /// Whether the total duration is zero, in which case every percentage is 0.
    #[must_use]
    pub fn has_zero_total(&self) -> bool {
        self.total.is_zero()
    }

    /// Number of intervals in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the report has no intervals at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The share of the total taken by the interval at `index` (recording order), in
    /// percent. `None` if there is no such interval.
    #[must_use]
    pub fn percentage(&self, index: usize) -> Option<f64> {
        self.intervals
            .get(index)
            .map(|interval| self.percentage_of(interval.duration()))
    }

    /// Indexes into [`intervals()`](Self::intervals), most expensive first.
    #[must_use]
    pub fn rank_order(&self) -> &[usize] {
        &self.rank_order
    }

    /// Iterates over the intervals from most to least expensive.
    pub fn ranked(&self) -> impl Iterator<Item = RankedInterval<'_>> {
        self.rank_order
            .iter()
            .zip(1_usize..)
            .filter_map(|(&index, rank)| {
                self.intervals.get(index).map(|interval| RankedInterval {
                    index,
                    rank,
                    interval,
                    percentage: self.percentage_of(interval.duration()),
                })
            })
    }

    /// Renders the report as text in the given layout.
    ///
    /// An empty report renders as an empty string.
    #[must_use]
    pub fn display(&self, layout: ReportLayout) -> impl fmt::Display + '_ {
        LayoutDisplay {
            report: self,
            layout,
        }
    }

    /// Writes the report to `out` in the given layout with a single write.
    ///
    /// Nothing is written for an empty report.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_to(&self, out: &mut impl Write, layout: ReportLayout) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        let text = self.display(layout).to_string();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn percentage_of(&self, duration: Duration) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }

        100.0 * duration.as_secs_f64() / self.total.as_secs_f64()
    }

    fn fmt_tabular(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let note = if self.has_zero_total() {
            " (no measurable elapsed time)"
        } else {
            ""
        };

        writeln!(f, "# Total: {:.6} ms{note}", self.total_millis())?;
        writeln!(f, "#Index\tEvent\tRank\tTime (ms)\t% of total")?;

        for ranked in self.ranked() {
            writeln!(
                f,
                "{}\t{}\t{}\t{:.6}\t%{:.10}",
                ranked.index,
                ranked.interval.label(),
                ranked.rank,
                ranked.interval.millis(),
                ranked.percentage
            )?;
        }

        Ok(())
    }

    fn fmt_narrative(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_millis = self.total_millis();

        for interval in &self.intervals {
            writeln!(
                f,
                "{} took {:.6} ms, {:.10}% of {total_millis:.6} ms total",
                interval.label(),
                interval.millis(),
                self.percentage_of(interval.duration())
            )?;
        }

        for ranked in self.ranked() {
            writeln!(
                f,
                "{}/{} is the {} most expensive with {:.10}% of total time",
                ranked.index,
                ranked.interval.label(),
                Ordinal(ranked.rank),
                ranked.percentage
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(ReportLayout::Tabular))
    }
}

struct LayoutDisplay<'a> {
    report: &'a Report,
    layout: ReportLayout,
}

impl fmt::Display for LayoutDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.report.is_empty() {
            return Ok(());
        }

        match self.layout {
            ReportLayout::Tabular => self.report.fmt_tabular(f),
            ReportLayout::Narrative => self.report.fmt_narrative(f),
        }
    }
}

/// One interval of a [`Report`] together with its position in the ranking.
#[derive(Clone, Copy, Debug)]
pub struct RankedInterval<'a> {
    index: usize,
    rank: usize,
    interval: &'a Interval,
    percentage: f64,
}

impl<'a> RankedInterval<'a> {
    /// Position of the interval in recording order, starting from 0.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the interval in the ranking, starting from 1 for the most expensive.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The ranked interval.
    #[must_use]
    pub fn interval(&self) -> &'a Interval {
        self.interval
    }

    /// Share of the report total, in percent.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}
