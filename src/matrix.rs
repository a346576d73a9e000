//! The per-product day-of-year × state matrix.
//!
//! Rows are every day of the reference year, columns are [`US_STATES`]. A cell
//! is either marked in season or left unknown; the source tables never say a
//! product is explicitly out of season, so there is no third state.

use crate::api::{Options, parse_description};
use crate::records::SeasonRecord;
use crate::region::{US_STATES, normalize_state, state_index};
use crate::{DAYS_IN_REFERENCE_YEAR, REFERENCE_YEAR, SeasonDates, SeasonError, SeasonResult};
use chrono::{Datelike, Days, NaiveDate};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonMatrix {
    /// Row-major: `cells[day0 * 50 + state]`.
    cells: Vec<bool>,
}

impl Default for SeasonMatrix {
    fn default() -> Self {
        SeasonMatrix::new()
    }
}

impl SeasonMatrix {
    pub fn new() -> Self {
        SeasonMatrix { cells: vec![false; DAYS_IN_REFERENCE_YEAR * US_STATES.len()] }
    }

    /// Mark every date in `dates` as in season for `state` (a canonical name).
    ///
    /// Marks accumulate, so two regions of one state union.
    pub fn mark(&mut self, state: &str, dates: &SeasonDates) -> SeasonResult<()> {
        let col = state_index(state).ok_or_else(|| SeasonError::UnknownState { name: state.to_string() })?;
        for date in dates {
            let row = date.ordinal0() as usize;
            if row < DAYS_IN_REFERENCE_YEAR {
                self.cells[row * US_STATES.len() + col] = true;
            }
        }
        Ok(())
    }

    pub fn is_marked(&self, date: NaiveDate, state: &str) -> bool {
        let Some(col) = state_index(state) else {
            return false;
        };
        let row = date.ordinal0() as usize;
        row < DAYS_IN_REFERENCE_YEAR && self.cells[row * US_STATES.len() + col]
    }

    /// Number of marked days for `state`.
    pub fn days_in_season(&self, state: &str) -> usize {
        let Some(col) = state_index(state) else {
            return 0;
        };
        self.cells.chunks(US_STATES.len()).filter(|row| row[col]).count()
    }

    /// Write the matrix as CSV: a `state,<states...>` header, then one row per
    /// day with `1` for marked cells and an empty field otherwise.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "state,{}", US_STATES.join(","))?;

        let jan_1 = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "reference year has no Jan 1"))?;
        for (day0, row) in self.cells.chunks(US_STATES.len()).enumerate() {
            let date = jan_1
                .checked_add_days(Days::new(day0 as u64))
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "day outside reference year"))?;
            let fields: Vec<&str> = row.iter().map(|&marked| if marked { "1" } else { "" }).collect();
            writeln!(out, "{},{}", date.format("%Y-%m-%d"), fields.join(","))?;
        }
        out.flush()
    }
}

/// Parse every record and mark it into a fresh matrix.
///
/// Stops at the first record whose state or description fails.
pub fn build_matrix<'a>(
    records: impl IntoIterator<Item = &'a SeasonRecord>,
    options: &Options,
) -> SeasonResult<SeasonMatrix> {
    let mut matrix = SeasonMatrix::new();

    for record in records {
        let wrap = |source: SeasonError| SeasonError::Record { state: record.state.clone(), source: Box::new(source) };

        let state = normalize_state(&record.state).map_err(wrap)?;
        let dates = parse_description(&record.description, options).map_err(wrap)?;
        log::info!("[matrix] {} <- \"{}\" ({} days)", state, record.description, dates.len());
        matrix.mark(state, &dates)?;
    }

    Ok(matrix)
}
