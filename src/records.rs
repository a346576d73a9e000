//! Season table records and the names attached to them.

use crate::{SeasonError, SeasonResult};
use serde::Serialize;

/// One table row: a region label and its free-text season description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonRecord {
    pub state: String,
    pub description: String,
}

/// Read tab-separated `state<TAB>description` lines.
///
/// Blank lines are skipped, as is a leading header row whose first cell is `state`.
///
/// # Errors
/// [`SeasonError::MalformedRecord`] for a non-blank line without a tab.
pub fn read_records(text: &str) -> SeasonResult<Vec<SeasonRecord>> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let Some((state, description)) = line.split_once('\t') else {
            return Err(SeasonError::MalformedRecord { line: idx + 1, reason: "expected state<TAB>description".into() });
        };

        if records.is_empty() && state.trim().eq_ignore_ascii_case("state") {
            continue;
        }

        records.push(SeasonRecord { state: state.trim().to_string(), description: description.trim().to_string() });
    }

    Ok(records)
}

/// Derive a produce name from a season page path.
///
/// `"/when-is-apple-season/"` becomes `"apple"`; `"/asparagus-in-season"` becomes `"asparagus"`.
pub fn produce_from_path(path: &str) -> String {
    let path = path.replace("-in-season", "").replace("-season", "");
    path.rsplit('-').next().unwrap_or(path.as_str()).replace('/', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tab_separated_rows() {
        let text = "State\tIn Season\nAlabama\tjune till august\n\nNorth Florida\t january, march \r\n";
        let records = read_records(text).unwrap();
        assert_eq!(
            records,
            vec![
                SeasonRecord { state: "Alabama".into(), description: "june till august".into() },
                SeasonRecord { state: "North Florida".into(), description: "january, march".into() },
            ]
        );
    }

    #[test]
    fn empty_description_is_kept() {
        let records = read_records("Ohio\t\n").unwrap();
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn line_without_tab_is_malformed() {
        assert!(matches!(read_records("Ohio\tjune\nIowa june\n"), Err(SeasonError::MalformedRecord { line: 2, .. })));
    }

    #[test]
    fn produce_names_from_paths() {
        assert_eq!(produce_from_path("/when-is-apple-season/"), "apple");
        assert_eq!(produce_from_path("/asparagus-in-season"), "asparagus");
        assert_eq!(produce_from_path("/when-is-sweet-corn-in-season/"), "corn");
        assert_eq!(produce_from_path("pineapple"), "pineapple");
    }
}
