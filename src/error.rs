use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while turning a season description into dates.
///
/// None of these are recovered locally: the caller decides whether a failing
/// record aborts the whole run or is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeasonError {
    /// A token, once its qualifier is stripped, is not one of the twelve month names.
    #[error("unrecognized month '{token}'")]
    UnrecognizedMonth { token: String },

    /// A range runs backwards and the options ask for year-boundary ranges to be rejected.
    #[error("range {start}..{stop} crosses the year boundary")]
    InvertedRange { start: NaiveDate, stop: NaiveDate },

    /// A (month, day) missing from the reference year. Unreachable for the twelve canonical months.
    #[error("month {month} day {day} does not exist in the reference year")]
    InvalidDate { month: u32, day: u32 },

    /// A region name that does not map onto one of the 50 states.
    #[error("unknown state '{name}'")]
    UnknownState { name: String },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Wraps a parse failure with the record it came from.
    #[error("record '{state}': {source}")]
    Record {
        state: String,
        #[source]
        source: Box<SeasonError>,
    },
}

pub type SeasonResult<T> = Result<T, SeasonError>;
