use crate::api::YearBoundary;
use crate::{DateSpan, REFERENCE_YEAR, SeasonDates, SeasonError, SeasonResult};
use chrono::NaiveDate;

/// Expand every span into its days and union the lot.
///
/// Spans may arrive in any order and may overlap. A span whose start falls
/// after its stop is a year-boundary range and is handled per `boundary`.
pub(crate) fn build_dates(
    spans: impl IntoIterator<Item = DateSpan>,
    boundary: YearBoundary,
) -> SeasonResult<SeasonDates> {
    let mut dates = SeasonDates::empty();

    for span in spans {
        if !span.wraps_year() {
            log::trace!("[dates] {}..={}", span.start, span.stop);
            dates.extend(span.days());
            continue;
        }

        match boundary {
            YearBoundary::Reject => return Err(SeasonError::InvertedRange { start: span.start, stop: span.stop }),
            YearBoundary::Wrap => {
                let (tail, head) = split_at_year_end(span)?;
                log::warn!("[dates] {}..={} wraps the year end", span.start, span.stop);
                dates.extend(tail.days());
                dates.extend(head.days());
            }
        }
    }

    Ok(dates)
}

/// `start..=Dec 31` and `Jan 1..=stop` of the reference year.
fn split_at_year_end(span: DateSpan) -> SeasonResult<(DateSpan, DateSpan)> {
    let dec_31 = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 12, 31).ok_or(SeasonError::InvalidDate { month: 12, day: 31 })?;
    let jan_1 = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1).ok_or(SeasonError::InvalidDate { month: 1, day: 1 })?;
    Ok((DateSpan::new(span.start, dec_31), DateSpan::new(jan_1, span.stop)))
}
