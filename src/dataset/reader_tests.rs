//! Tests for CSV loading.

use super::*;

#[test]
fn reads_headers_and_rows_in_order() {
    let input = "date,previous_jobs\n2023-01-01,Retail\n2023-01-02,Tech\n";
    let ds = DatasetReader::new().read("prev", input.as_bytes()).unwrap();

    assert_eq!(ds.name(), "prev");
    assert_eq!(ds.headers(), ["date", "previous_jobs"]);
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[1].value(1), Some("Tech"));
}

#[test]
fn trims_fields_and_headers() {
    let input = " date , jobs \n 2023-01-01 ,  Retail \n";
    let ds = DatasetReader::new().read("prev", input.as_bytes()).unwrap();
    assert_eq!(ds.headers(), ["date", "jobs"]);
    assert_eq!(ds.records()[0].raw(1), Some("Retail"));
}

#[test]
fn handles_quoted_fields_with_commas() {
    let input = "date,jobs\n2023-01-01,\"Retail, Grocery\"\n";
    let ds = DatasetReader::new().read("prev", input.as_bytes()).unwrap();
    assert_eq!(ds.records()[0].value(1), Some("Retail, Grocery"));
}

#[test]
fn accepts_ragged_rows() {
    let input = "date,jobs,folder\n2023-01-01,Retail\n";
    let ds = DatasetReader::new().read("prev", input.as_bytes()).unwrap();
    assert_eq!(ds.records()[0].value(2), None);
}

#[test]
fn empty_input_is_rejected() {
    let err = DatasetReader::new().read("prev", "".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("no header row"));
}

#[test]
fn missing_file_reports_path() {
    let err = DatasetReader::new()
        .read_path("prev", Path::new("definitely/not/here.csv"))
        .unwrap_err();
    assert!(matches!(err, InsightsError::FileRead { .. }));
    assert!(err.to_string().contains("here.csv"));
}
