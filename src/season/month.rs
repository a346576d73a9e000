//! Month tokens: the name table, qualifiers and day resolution.

use crate::{REFERENCE_YEAR, SeasonError, SeasonResult};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Shared English month table, built on first use and never mutated.
pub(crate) static ENGLISH_MONTHS: Lazy<MonthTable> = Lazy::new(MonthTable::english);

/// Immutable mapping from canonical lowercase month name to month number (1..=12).
#[derive(Debug, Clone)]
pub struct MonthTable {
    by_name: HashMap<&'static str, u32>,
}

impl MonthTable {
    /// The twelve canonical English month names. No abbreviations.
    pub fn english() -> Self {
        let by_name = HashMap::from([
            ("january", 1),
            ("february", 2),
            ("march", 3),
            ("april", 4),
            ("may", 5),
            ("june", 6),
            ("july", 7),
            ("august", 8),
            ("september", 9),
            ("october", 10),
            ("november", 11),
            ("december", 12),
        ]);
        MonthTable { by_name }
    }

    /// Exact, case-insensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.by_name.get(name.to_lowercase().as_str()).copied()
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        ENGLISH_MONTHS.clone()
    }
}

/// Where in the month a token points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Qualifier {
    /// No prefix: the first of the month.
    Bare,
    /// `mid-`: `floor(days / 2)`.
    Mid,
    /// `late-`: `floor(days * 0.8)`.
    Late,
}

impl Qualifier {
    /// Split a recognized qualifier prefix off `token`.
    pub fn split(token: &str) -> (Qualifier, &str) {
        if let Some(rest) = token.strip_prefix("mid-") {
            (Qualifier::Mid, rest)
        } else if let Some(rest) = token.strip_prefix("late-") {
            (Qualifier::Late, rest.trim())
        } else {
            (Qualifier::Bare, token)
        }
    }

    /// Day of the month this qualifier selects in a month of `days` days.
    ///
    /// Integer arithmetic truncates exactly like flooring the fractional product.
    pub fn day_in(self, days: u32) -> u32 {
        match self {
            Qualifier::Bare => 1,
            Qualifier::Mid => days / 2,
            Qualifier::Late => days * 8 / 10,
        }
    }
}

/// A month token resolved to a day of the reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedMonth {
    pub qualifier: Qualifier,
    pub date: NaiveDate,
}

/// Last day of `month` in `year`.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Number of days in `month` of the reference year.
pub fn days_in_month(month: u32) -> Option<u32> {
    last_day_of_month(REFERENCE_YEAR, month).map(|d| d.day())
}

/// Resolve a single qualified month token such as `"late-march"`.
///
/// # Errors
/// [`SeasonError::UnrecognizedMonth`] when the name is not one of the twelve months.
pub fn resolve_month(token: &str, table: &MonthTable) -> SeasonResult<ResolvedMonth> {
    let (qualifier, name) = Qualifier::split(token);
    let month = table.lookup(name).ok_or_else(|| SeasonError::UnrecognizedMonth { token: token.to_string() })?;

    let days = days_in_month(month).ok_or(SeasonError::InvalidDate { month, day: 1 })?;
    let day = qualifier.day_in(days);
    let date = NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).ok_or(SeasonError::InvalidDate { month, day })?;

    log::debug!("[month] \"{}\" -> {} ({:?})", token, date, qualifier);
    Ok(ResolvedMonth { qualifier, date })
}
