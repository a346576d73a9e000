use super::month::{MonthTable, last_day_of_month, resolve_month};
use crate::{DateSpan, SeasonError, SeasonResult};
use chrono::Datelike;

/// Resolve a `start till stop` pair into a span.
///
/// An unqualified stop month means "through the end of that month", so a stop
/// that lands on day 1 is pushed to the month's last day. Qualified stops are
/// kept as resolved.
pub fn resolve_range(start: &str, stop: &str, table: &MonthTable) -> SeasonResult<DateSpan> {
    let start_date = resolve_month(start, table)?.date;
    let mut stop_date = resolve_month(stop, table)?.date;

    if stop_date.day() == 1 {
        let month = stop_date.month();
        stop_date = last_day_of_month(stop_date.year(), month).ok_or(SeasonError::InvalidDate { month, day: 1 })?;
    }

    log::debug!("[range] \"{}\" till \"{}\" -> {}..={}", start, stop, start_date, stop_date);
    Ok(DateSpan::new(start_date, stop_date))
}
