use crate::{DateSpan, Options, REFERENCE_YEAR, SeasonError, YearBoundary, parse, parse_with};
use chrono::NaiveDate;

fn d(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).unwrap()
}

#[test]
fn season_examples_day_counts() {
    // Array of (expected_days, input_string)
    let cases: Vec<(usize, &str)> = vec![
        (0, ""),
        (0, "   "),
        (0, "and"),
        (31, "january"),
        (31, "jully"),
        (31, "july"),
        (62, "january and march"),
        (62, "january, march"),
        (62, "january,march"),
        (61, "june,july"),
        (61, "june, , july"),
        (61, "june,,july"),
        (17 + 30 + 31, "mid-may till june,july"),
        (30 + 31 + 31, "june till july,august"),
        (30 + 31 + 31, "june till july, august"),
        (90, "january till march"),
        (74, "january till mid-march"),
        (61, "june and july"),
        (61, "june \u{2013} july"),
        (17, "mid-july"),
        (8, "late-december"),
        (8, "late december"),
        (30, "novemeber"),
        (30, "novemebr"),
        (31, "octobert"),
        (31, "janury"),
        (31, "july south dakota"),
        (31, "south july"),
        (16 + 31 + 24, "mid-june till late-august"),
        (92, "june till august"),
        (92, "june till august, july"),
        (31 + 28 + 31 + 31, "january till march and may"),
        (30 + 31, "september, october, september"),
        (17 + 30 + 7, "mid-may till june, late-september"),
    ];

    for (expected, input) in cases {
        let dates = parse(input).unwrap_or_else(|e| panic!("{input:?} failed: {e}"));
        assert_eq!(dates.len(), expected, "input: {input:?}");
    }
}

#[test]
fn range_is_contiguous_through_month_end() {
    let dates = parse("january till march").unwrap();
    let expected: Vec<_> = DateSpan::new(d(1, 1), d(3, 31)).days().collect();
    assert_eq!(dates.iter().copied().collect::<Vec<_>>(), expected);
    assert_eq!(dates.runs(), vec![(d(1, 1), d(3, 31))]);
}

#[test]
fn separate_months_leave_a_gap() {
    let dates = parse("january and march").unwrap();
    assert_eq!(dates.runs(), vec![(d(1, 1), d(1, 31)), (d(3, 1), d(3, 31))]);
    assert!(!dates.contains(&d(2, 14)));
}

#[test]
fn typo_matches_correct_spelling() {
    assert_eq!(parse("jully").unwrap(), parse("july").unwrap());
}

#[test]
fn range_and_bare_month_overlap_once() {
    let with_overlap = parse("may till july and june").unwrap();
    let without = parse("may till july").unwrap();
    assert_eq!(with_overlap, without);
}

#[test]
fn qualified_range_endpoints() {
    let dates = parse("late-march till mid-may").unwrap();
    assert_eq!(dates.runs(), vec![(d(3, 24), d(5, 15))]);
}

#[test]
fn year_boundary_range_is_rejected_by_default() {
    assert_eq!(
        parse("november till february"),
        Err(SeasonError::InvertedRange { start: d(11, 1), stop: d(2, 28) })
    );
    assert!(matches!(parse("late-march till mid-march"), Err(SeasonError::InvertedRange { .. })));
}

#[test]
fn year_boundary_range_wraps_when_asked() {
    let options = Options { year_boundary: YearBoundary::Wrap };
    let dates = parse_with("november till february", &options).unwrap();
    assert_eq!(dates.runs(), vec![(d(1, 1), d(2, 28)), (d(11, 1), d(12, 31))]);
    assert_eq!(dates.len(), 59 + 61);
}

#[test]
fn unknown_words_are_fatal() {
    assert_eq!(parse("smarch"), Err(SeasonError::UnrecognizedMonth { token: "smarch".to_string() }));
    assert_eq!(
        parse("june till smarch"),
        Err(SeasonError::UnrecognizedMonth { token: "smarch".to_string() })
    );
    assert!(matches!(parse("early june"), Err(SeasonError::UnrecognizedMonth { token }) if token == "early-june"));
    assert!(parse("june through august").is_err());
}

#[test]
fn all_dates_share_reference_year() {
    use chrono::Datelike;
    let dates = parse("january till december").unwrap();
    assert_eq!(dates.len(), 365);
    assert!(dates.iter().all(|d| d.year() == REFERENCE_YEAR));
}
