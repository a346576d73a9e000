use super::month::{MonthTable, last_day_of_month, resolve_month};
use crate::{DateSpan, SeasonError, SeasonResult};
use chrono::Datelike;

/// Resolve a bare month token to a span ending on the last day of its month.
///
/// The qualifier still picks the start: `"mid-july"` covers Jul 15 through Jul 31.
pub(crate) fn expand_token(token: &str, table: &MonthTable) -> SeasonResult<DateSpan> {
    let start = resolve_month(token, table)?.date;
    let month = start.month();
    let stop = last_day_of_month(start.year(), month).ok_or(SeasonError::InvalidDate { month, day: 1 })?;
    Ok(DateSpan::new(start, stop))
}
