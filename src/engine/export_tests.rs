//! Tests for CSV export.

use chrono::NaiveDate;

use super::*;
use crate::dataset::{DatasetReader, Record};

fn range() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
    )
    .unwrap()
}

#[test]
fn writes_header_then_rows_in_source_order() {
    let ds = DatasetReader::new()
        .read("prev", "date,jobs\n2023-01-20,Retail\n2023-02-01,Tech\n".as_bytes())
        .unwrap();
    let csv = export_rows(&ds).unwrap();
    assert_eq!(csv, "date,jobs\n2023-01-20,Retail\n2023-02-01,Tech\n");
}

#[test]
fn quotes_fields_containing_separator_or_quotes() {
    let ds = Dataset::new(
        "prev",
        vec!["date".to_string(), "jobs".to_string()],
        vec![Record::new(vec![
            "2023-01-20".to_string(),
            "Retail, \"big\" box".to_string(),
        ])],
    );
    let csv = export_rows(&ds).unwrap();
    assert_eq!(csv, "date,jobs\n2023-01-20,\"Retail, \"\"big\"\" box\"\n");
}

#[test]
fn round_trip_preserves_rows() {
    let ds = DatasetReader::new()
        .read(
            "prev",
            "date,jobs,note\n2023-01-20,\"Retail, Grocery\",\n2023-02-01,Tech,\"line\nbreak\"\n"
                .as_bytes(),
        )
        .unwrap();
    let reparsed = DatasetReader::new()
        .read("prev", export_rows(&ds).unwrap().as_bytes())
        .unwrap();
    assert_eq!(reparsed, ds);
}

#[test]
fn short_rows_are_padded_to_header_width() {
    let ds = Dataset::new(
        "prev",
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        vec![Record::new(vec!["1".to_string()])],
    );
    assert_eq!(export_rows(&ds).unwrap(), "a,b,c\n1,,\n");
}

#[test]
fn file_name_follows_pattern() {
    assert_eq!(
        export_file_name("Prev_Jobs", &range()),
        "Filtered_Prev_Jobs_2023-01-15_to_2023-03-01.csv"
    );
}

#[test]
fn file_name_replaces_path_separators() {
    assert_eq!(
        export_file_name("../odd name", &range()),
        "Filtered____odd_name_2023-01-15_to_2023-03-01.csv"
    );
}

#[test]
fn write_export_creates_directory_and_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let target = dir.path().join("exports");
    let ds = DatasetReader::new()
        .read("prev", "date,jobs\n2023-01-20,Retail\n".as_bytes())
        .unwrap();

    let path = write_export(&ds, &target, "Prev_Jobs", &range()).unwrap();
    assert_eq!(
        path.file_name().unwrap(),
        "Filtered_Prev_Jobs_2023-01-15_to_2023-03-01.csv"
    );
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "date,jobs\n2023-01-20,Retail\n"
    );
}
