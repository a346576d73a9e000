use crate::season::{self, ENGLISH_MONTHS, ResolvedSpan};
use crate::{SeasonDates, SeasonResult};
use serde::Serialize;
use std::time::{Duration, Instant};

/// What to do with a range whose start falls after its stop ("november till february").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearBoundary {
    /// Fail with [`crate::SeasonError::InvertedRange`].
    #[default]
    Reject,
    /// Cover `start..=Dec 31` and `Jan 1..=stop` of the reference year. Opt-in only.
    Wrap,
}

/// Options that affect resolution.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub year_boundary: YearBoundary,
}

/// Additional details returned by [`parse_verbose_with`].
#[derive(Debug, Clone, Serialize)]
pub struct ParseDetails {
    /// The text as given.
    pub text: String,
    /// The text after the rewrite table.
    pub normalized: String,
    /// Spans in extraction order: ranges first, then bare tokens.
    pub spans: Vec<ResolvedSpan>,
    pub dates: SeasonDates,
    pub elapsed: Duration,
}

/// Parse a lowercase, trimmed description with default [`Options`].
///
/// # Example
/// ```
/// let dates = inseason::parse("january till march").unwrap();
/// assert_eq!(dates.len(), 90);
/// ```
pub fn parse(text: &str) -> SeasonResult<SeasonDates> {
    parse_with(text, &Options::default())
}

pub fn parse_with(text: &str, options: &Options) -> SeasonResult<SeasonDates> {
    Ok(season::run(text, &ENGLISH_MONTHS, options)?.dates)
}

/// Parse a raw table cell: casefold and trim, then [`parse_with`].
pub fn parse_description(cell: &str, options: &Options) -> SeasonResult<SeasonDates> {
    parse_with(cell.to_lowercase().trim(), options)
}

/// Parse `text` and return the intermediate stages along with the dates.
///
/// The plain [`parse_with`] path does not keep these around.
pub fn parse_verbose_with(text: &str, options: &Options) -> SeasonResult<ParseDetails> {
    let started = Instant::now();
    let run = season::run(text, &ENGLISH_MONTHS, options)?;

    Ok(ParseDetails {
        text: text.to_string(),
        normalized: run.normalized,
        spans: run.spans,
        dates: run.dates,
        elapsed: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SeasonError, SpanOrigin};

    #[test]
    fn parse_verbose_keeps_stages() {
        let res = parse_verbose_with("mid-may till june, jully", &Options::default()).unwrap();

        assert_eq!(res.text, "mid-may till june, jully");
        assert_eq!(res.normalized, "mid-may till june and  july");
        assert_eq!(res.spans.len(), 2);
        assert_eq!(res.spans[0].origin, SpanOrigin::Range);
        assert_eq!(res.spans[1].origin, SpanOrigin::Single);
        assert_eq!(res.spans[1].source, "july");
        assert_eq!(res.dates.len(), 17 + 30 + 31);
    }

    #[test]
    fn description_is_casefolded_and_trimmed() {
        let dates = parse_description("  June and JULY \n", &Options::default()).unwrap();
        assert_eq!(dates.len(), 61);
    }

    #[test]
    fn default_options_reject_year_wrap() {
        let options = Options::default();
        assert_eq!(options.year_boundary, YearBoundary::Reject);
        assert!(matches!(parse_with("november till february", &options), Err(SeasonError::InvertedRange { .. })));
        assert!(parse_with("november till december", &options).is_ok());
    }

    #[test]
    fn wrap_is_opt_in() {
        let options = Options { year_boundary: YearBoundary::Wrap };
        assert_eq!(parse_with("november till february", &options).unwrap().len(), 61 + 59);
    }
}
