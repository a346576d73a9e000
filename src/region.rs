//! Region names as they appear in season tables, mapped onto the 50 states.

use crate::{SeasonError, SeasonResult};

/// The 50 U.S. states, lowercase, in alphabetical order. These are the matrix columns.
pub const US_STATES: [&str; 50] = [
    "alabama",
    "alaska",
    "arizona",
    "arkansas",
    "california",
    "colorado",
    "connecticut",
    "delaware",
    "florida",
    "georgia",
    "hawaii",
    "idaho",
    "illinois",
    "indiana",
    "iowa",
    "kansas",
    "kentucky",
    "louisiana",
    "maine",
    "maryland",
    "massachusetts",
    "michigan",
    "minnesota",
    "mississippi",
    "missouri",
    "montana",
    "nebraska",
    "nevada",
    "new hampshire",
    "new jersey",
    "new mexico",
    "new york",
    "north carolina",
    "north dakota",
    "ohio",
    "oklahoma",
    "oregon",
    "pennsylvania",
    "rhode island",
    "south carolina",
    "south dakota",
    "tennessee",
    "texas",
    "utah",
    "vermont",
    "virginia",
    "washington",
    "west virginia",
    "wisconsin",
    "wyoming",
];

/// Sub-state regions and misspellings seen in the source tables.
const REGION_ALIASES: &[(&str, &str)] = &[
    ("massachussets", "massachusetts"),
    ("northern california", "california"),
    ("southern california", "california"),
    ("north florida", "florida"),
    ("south florida", "florida"),
];

/// Map a table's region label to its canonical state name.
///
/// # Errors
/// [`SeasonError::UnknownState`] when the label is neither a state nor a known alias.
pub fn normalize_state(name: &str) -> SeasonResult<&'static str> {
    let lower = name.trim().to_lowercase();
    let canonical = REGION_ALIASES.iter().find(|(alias, _)| *alias == lower).map_or(lower.as_str(), |(_, s)| *s);

    US_STATES
        .iter()
        .find(|state| **state == canonical)
        .copied()
        .ok_or_else(|| SeasonError::UnknownState { name: name.to_string() })
}

/// Column index of a canonical state name.
pub(crate) fn state_index(state: &str) -> Option<usize> {
    US_STATES.binary_search(&state).ok()
}
