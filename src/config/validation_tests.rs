//! Tests for semantic config validation.

use chrono::NaiveDate;

use super::*;
use crate::config::{DatasetConfig, SectionConfig};
use crate::engine::WindowPreset;

fn base() -> Config {
    Config::default()
}

fn expect_config_error(config: &Config, fragment: &str) {
    let err = validate_config_semantics(config).unwrap_err();
    assert!(
        err.to_string().contains(fragment),
        "expected '{fragment}' in '{err}'"
    );
}

#[test]
fn start_without_end_is_rejected() {
    let mut config = base();
    config.filter.start = NaiveDate::from_ymd_opt(2023, 1, 1);
    expect_config_error(&config, "must be set together");
}

#[test]
fn inverted_range_is_invalid_range() {
    let mut config = base();
    config.filter.start = NaiveDate::from_ymd_opt(2023, 2, 1);
    config.filter.end = NaiveDate::from_ymd_opt(2023, 1, 1);
    assert!(matches!(
        validate_config_semantics(&config),
        Err(InsightsError::InvalidRange { .. })
    ));
}

#[test]
fn multiple_filter_modes_are_rejected() {
    let mut config = base();
    config.filter.window = Some(WindowPreset::LastSixMonths);
    config.filter.last_days = Some(10);
    expect_config_error(&config, "only one of");
}

#[test]
fn zero_last_days_is_rejected() {
    let mut config = base();
    config.filter.last_days = Some(0);
    expect_config_error(&config, "at least one day");
}

#[test]
fn duplicate_dataset_names_are_rejected() {
    let mut config = base();
    config.datasets.push(DatasetConfig {
        name: "Pje".to_string(),
        path: "other.csv".into(),
        date_column: "date".to_string(),
    });
    expect_config_error(&config, "more than once");
}

#[test]
fn unknown_dataset_reference_is_rejected() {
    let mut config = base();
    config.sections[0].dataset = "missing".to_string();
    expect_config_error(&config, "unknown dataset 'missing'");
}

#[test]
fn breakdown_section_requires_breakdown_column() {
    let mut config = base();
    config.sections[1].breakdown = None;
    expect_config_error(&config, "must name a breakdown column");
}

#[test]
fn distribution_section_rejects_breakdown_column() {
    let mut config = base();
    let section: &mut SectionConfig = &mut config.sections[0];
    section.breakdown = Some("FOLDER".to_string());
    expect_config_error(&config, "does not take a breakdown column");
}

#[test]
fn sections_sharing_a_dataset_need_distinct_export_names() {
    let mut config = base();
    config.sections[1].export_name = None;
    config.sections[2].export_name = None;
    expect_config_error(&config, "export to the same file 'Pje'");
}

#[test]
fn export_names_that_sanitize_alike_are_rejected() {
    let mut config = base();
    config.sections[1].export_name = Some("Pje/Hired".to_string());
    config.sections[2].export_name = Some("Pje_Hired".to_string());
    expect_config_error(&config, "set a distinct export_name");
}

#[test]
fn default_export_stem_is_unique_when_alone() {
    let mut config = base();
    config.sections[0].export_name = None;
    validate_config_semantics(&config).unwrap();
}

#[test]
fn invalid_colors_are_rejected() {
    let mut config = base();
    config.sections[1]
        .colors
        .insert("Hired".to_string(), "navy".to_string());
    expect_config_error(&config, "invalid color 'navy'");
}

#[test]
fn empty_palette_is_rejected() {
    let mut config = base();
    config.palette.clear();
    expect_config_error(&config, "palette");
}

#[test]
fn hex_color_check() {
    assert!(is_hex_color("#F77F00"));
    assert!(is_hex_color("#abcdef"));
    assert!(!is_hex_color("F77F00"));
    assert!(!is_hex_color("#F77F0"));
    assert!(!is_hex_color("#GGGGGG"));
}
