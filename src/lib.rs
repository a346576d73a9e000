#[macro_use]
mod macros;
mod api;
mod error;
mod matrix;
mod records;
mod region;
mod season;

pub use api::{Options, ParseDetails, YearBoundary, parse, parse_description, parse_verbose_with, parse_with};
pub use error::{SeasonError, SeasonResult};
pub use matrix::{SeasonMatrix, build_matrix};
pub use records::{SeasonRecord, produce_from_path, read_records};
pub use region::{US_STATES, normalize_state};
pub use season::{
    MonthTable, Qualifier, ResolvedMonth, ResolvedSpan, SpanOrigin, days_in_month, last_day_of_month, normalize,
    resolve_month, resolve_range,
};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// The single non-leap year every resolved date is expressed in.
///
/// Results only encode the day of the year; the year itself carries no meaning.
pub const REFERENCE_YEAR: i32 = 1970;

/// Number of days (rows) in the reference year.
pub const DAYS_IN_REFERENCE_YEAR: usize = 365;

// --- Spans ------------------------------------------------------------------

/// An inclusive `start..=stop` run of days in the reference year.
///
/// `start <= stop` is expected but not enforced; a backwards span is a
/// year-boundary range and is handled by the date set builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub stop: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, stop: NaiveDate) -> Self {
        DateSpan { start, stop }
    }

    /// True when the span runs past Dec 31 back into January.
    pub fn wraps_year(&self) -> bool {
        self.start > self.stop
    }

    /// Every day from `start` through `stop`, both included. Empty for wrapping spans.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.stop)
    }
}

// --- Result set -------------------------------------------------------------

/// A calendar (month, day) pair, independent of any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

/// The deduplicated set of in-season days for one description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeasonDates {
    dates: BTreeSet<NaiveDate>,
}

impl SeasonDates {
    /// Create an empty set.
    pub fn empty() -> Self {
        SeasonDates::default()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    /// Add every day of `days`; duplicates collapse.
    pub fn extend(&mut self, days: impl IntoIterator<Item = NaiveDate>) {
        self.dates.extend(days);
    }

    /// Union two sets.
    pub fn union(&self, other: &SeasonDates) -> SeasonDates {
        SeasonDates { dates: self.dates.union(&other.dates).copied().collect() }
    }

    /// Dates in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    pub fn month_days(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.dates.iter().map(|d| MonthDay { month: d.month(), day: d.day() })
    }

    /// Collapse the set into contiguous `(first, last)` runs, in calendar order.
    pub fn runs(&self) -> Vec<(NaiveDate, NaiveDate)> {
        let mut runs: Vec<(NaiveDate, NaiveDate)> = Vec::new();
        for &date in &self.dates {
            match runs.last_mut() {
                Some((_, last)) if last.succ_opt() == Some(date) => *last = date,
                _ => runs.push((date, date)),
            }
        }
        runs
    }
}

impl FromIterator<NaiveDate> for SeasonDates {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        SeasonDates { dates: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a SeasonDates {
    type Item = &'a NaiveDate;
    type IntoIter = std::collections::btree_set::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}
