//! Tests for date filtering.

use chrono::NaiveDate;

use super::*;
use crate::InsightsError;
use crate::dataset::DatasetReader;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn jobs() -> Dataset {
    let csv = "\
date,previous_jobs
2023-01-01,Retail
2023-01-20,Retail
2023-02-10,Tech
2023-02-15 13:45:00,Retail
2023-03-01,Tech
not-a-date,Retail
,Tech
";
    DatasetReader::new().read("prev", csv.as_bytes()).unwrap()
}

#[test]
fn keeps_rows_inside_inclusive_bounds() {
    let range = DateRange::new(ymd(2023, 1, 15), ymd(2023, 3, 1)).unwrap();
    let filtered = filter_by_date(&jobs(), "date", &range).unwrap();

    let dates: Vec<_> = filtered
        .records()
        .iter()
        .map(|r| r.value(0).unwrap().to_string())
        .collect();
    assert_eq!(
        dates,
        ["2023-01-20", "2023-02-10", "2023-02-15 13:45:00", "2023-03-01"]
    );
}

#[test]
fn output_is_exact_subset_without_duplicates() {
    let source = jobs();
    let range = DateRange::new(ymd(2023, 1, 1), ymd(2023, 12, 31)).unwrap();
    let filtered = filter_by_date(&source, "date", &range).unwrap();

    // Every dated row is in range, so only the two undated rows disappear.
    assert_eq!(filtered.len(), source.len() - 2);
    for record in filtered.records() {
        let hits = source.records().iter().filter(|r| *r == record).count();
        assert_eq!(hits, 1);
    }
}

#[test]
fn empty_result_is_not_an_error() {
    let range = DateRange::new(ymd(2030, 1, 1), ymd(2030, 1, 2)).unwrap();
    let filtered = filter_by_date(&jobs(), "date", &range).unwrap();
    assert!(filtered.is_empty());
    assert_eq!(filtered.headers(), ["date", "previous_jobs"]);
}

#[test]
fn missing_date_column_is_a_configuration_error() {
    let range = DateRange::new(ymd(2023, 1, 1), ymd(2023, 12, 31)).unwrap();
    let err = filter_by_date(&jobs(), "INVITATIONDT", &range).unwrap_err();
    assert!(matches!(
        err,
        InsightsError::MissingColumn { ref column, .. } if column == "INVITATIONDT"
    ));
    assert!(err.is_configuration_error());
}

#[test]
fn refiltering_is_idempotent() {
    let range = DateRange::new(ymd(2023, 1, 15), ymd(2023, 3, 1)).unwrap();
    let once = filter_by_date(&jobs(), "date", &range).unwrap();
    let twice = filter_by_date(&once, "date", &range).unwrap();
    assert_eq!(once, twice);
}
