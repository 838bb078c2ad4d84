use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::InsightsError;
use crate::engine::WindowPreset;

const PREV_JOBS: &str = "\
INVITATIONDT,PREVIOUS_JOBS
2023-01-01,Retail
2023-01-20,Retail
2023-01-25,Retail
2023-02-01,Tech
2023-03-01,Tech
";

const CONFIG: &str = r#"
[[dataset]]
name = "jobs"
path = "jobs.csv"
date_column = "INVITATIONDT"

[[section]]
kind = "distribution"
title = "Jobs"
dataset = "jobs"
category = "PREVIOUS_JOBS"
"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture(with_csv: bool) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("insights.toml");
    std::fs::write(&config_path, CONFIG).unwrap();
    if with_csv {
        std::fs::write(dir.path().join("jobs.csv"), PREV_JOBS).unwrap();
    }
    (dir, config_path)
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn load_config_no_config_returns_default() {
    let result = load_config(None, true).unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn load_config_explicit_path_records_source() {
    let (_dir, config_path) = fixture(false);
    let result = load_config(Some(&config_path), false).unwrap();
    assert_eq!(result.source.as_deref(), Some(config_path.as_path()));
    assert_eq!(result.config.sections.len(), 1);
}

#[test]
fn load_config_rejects_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[[section]\nkind = ").unwrap();
    assert!(matches!(
        load_config(Some(&path), false),
        Err(InsightsError::TomlParse(_))
    ));
}

#[test]
fn load_config_missing_file_is_file_read_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(&dir.path().join("nope.toml")), false);
    assert!(matches!(result, Err(InsightsError::FileRead { .. })));
}

#[test]
fn effective_filter_keeps_config_without_flags() {
    let configured = FilterConfig {
        last_days: Some(30),
        ..FilterConfig::default()
    };
    let args = RangeArgs {
        as_of: Some(date(2024, 1, 1)),
        ..RangeArgs::default()
    };
    assert_eq!(effective_filter(&configured, &args), configured);
}

#[test]
fn effective_filter_flags_replace_config() {
    let configured = FilterConfig {
        last_days: Some(30),
        ..FilterConfig::default()
    };
    let args = RangeArgs {
        window: Some(WindowPreset::LastSixMonths),
        ..RangeArgs::default()
    };
    let filter = effective_filter(&configured, &args);
    assert_eq!(filter.window, Some(WindowPreset::LastSixMonths));
    assert_eq!(filter.last_days, None);
}

#[test]
fn today_honors_as_of() {
    assert_eq!(today(Some(date(2023, 5, 1))), date(2023, 5, 1));
}

#[test]
fn build_report_filters_to_explicit_range() {
    let (_dir, config_path) = fixture(true);
    let load = load_config(Some(&config_path), false).unwrap();
    let args = RangeArgs {
        start: Some(date(2023, 1, 15)),
        end: Some(date(2023, 3, 1)),
        ..RangeArgs::default()
    };
    let report = build_report(&load, &args).unwrap();
    assert_eq!(report.range.start(), date(2023, 1, 15));
    match &report.sections[0].outcome {
        crate::report::SectionOutcome::Distribution { counts, .. } => {
            assert_eq!(counts.get("Retail"), Some(2));
            assert_eq!(counts.get("Tech"), Some(2));
        }
        other => panic!("expected distribution, got {other:?}"),
    }
}

#[test]
fn build_report_defaults_to_data_bounds() {
    let (_dir, config_path) = fixture(true);
    let load = load_config(Some(&config_path), false).unwrap();
    let report = build_report(&load, &RangeArgs::default()).unwrap();
    assert_eq!(report.range.start(), date(2023, 1, 1));
    assert_eq!(report.range.end(), date(2023, 3, 1));
}

#[test]
fn build_report_relative_window_uses_as_of() {
    let (_dir, config_path) = fixture(true);
    let load = load_config(Some(&config_path), false).unwrap();
    let args = RangeArgs {
        last_days: Some(10),
        as_of: Some(date(2023, 3, 1)),
        ..RangeArgs::default()
    };
    let report = build_report(&load, &args).unwrap();
    assert_eq!(report.range.start(), date(2023, 2, 19));
}

#[test]
fn inverted_range_fails_before_reading_data() {
    // No CSV on disk: the error must come from the range, not the read.
    let (_dir, config_path) = fixture(false);
    let load = load_config(Some(&config_path), false).unwrap();
    let args = RangeArgs {
        start: Some(date(2023, 3, 1)),
        end: Some(date(2023, 1, 1)),
        ..RangeArgs::default()
    };
    assert!(matches!(
        build_report(&load, &args),
        Err(InsightsError::InvalidRange { .. })
    ));
}

#[test]
fn missing_dataset_file_is_an_error() {
    let (_dir, config_path) = fixture(false);
    let load = load_config(Some(&config_path), false).unwrap();
    assert!(matches!(
        build_report(&load, &RangeArgs::default()),
        Err(InsightsError::FileRead { .. })
    ));
}

#[test]
fn write_output_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("report.txt");
    write_output(Some(&path), "hello", true).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
}
