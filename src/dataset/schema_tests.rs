//! Tests for schema descriptors.

use super::*;
use crate::dataset::Record;

fn dataset(headers: &[&str]) -> Dataset {
    Dataset::new(
        "Pje",
        headers.iter().map(ToString::to_string).collect(),
        Vec::<Record>::new(),
    )
}

fn schema(columns: &[(&str, ColumnRole)]) -> DatasetSchema {
    let mut schema = DatasetSchema::new("Pje", "INVITATIONDT");
    for (column, role) in columns {
        schema.require(*column, *role);
    }
    schema
}

#[test]
fn valid_when_all_columns_present() {
    let report = schema(&[
        ("PREVIOUS_JOBS", ColumnRole::PrimaryCategory),
        ("FOLDER", ColumnRole::SecondaryCategory),
    ])
    .validate(&dataset(&["INVITATIONDT", "PREVIOUS_JOBS", "FOLDER"]));
    assert!(report.missing().is_empty());
    assert_eq!(report.dataset(), "Pje");
}

#[test]
fn reports_each_missing_column_with_role() {
    let report = schema(&[
        ("PREVIOUS_JOBS", ColumnRole::PrimaryCategory),
        ("EMPLOYMENTSTATUS", ColumnRole::SecondaryCategory),
    ])
    .validate(&dataset(&["PREVIOUS_JOBS"]));

    assert!(report.is_missing("INVITATIONDT"));
    assert!(report.is_missing("EMPLOYMENTSTATUS"));
    assert!(!report.is_missing("PREVIOUS_JOBS"));
    assert_eq!(
        report.missing(),
        [
            ("INVITATIONDT".to_string(), ColumnRole::Date),
            ("EMPLOYMENTSTATUS".to_string(), ColumnRole::SecondaryCategory),
        ]
    );
}

#[test]
fn first_registered_role_wins() {
    let report = schema(&[
        ("jobs", ColumnRole::PrimaryCategory),
        ("jobs", ColumnRole::SecondaryCategory),
    ])
    .validate(&dataset(&["INVITATIONDT"]));
    assert_eq!(
        report.missing(),
        [("jobs".to_string(), ColumnRole::PrimaryCategory)]
    );
}

#[test]
fn role_display_names() {
    assert_eq!(ColumnRole::Date.to_string(), "date");
    assert_eq!(ColumnRole::SecondaryCategory.to_string(), "secondary category");
}
