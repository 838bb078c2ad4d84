use clap::Parser;
use tempfile::TempDir;

use super::*;

fn cli(argv: &[&str]) -> Cli {
    Cli::parse_from(argv)
}

#[test]
fn validate_accepts_generated_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("insights.toml");
    std::fs::write(&path, crate::commands::generate_config_template()).unwrap();
    run_config_validate_impl(&path).unwrap();
}

#[test]
fn validate_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = run_config_validate_impl(&dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn validate_reports_semantic_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("insights.toml");
    std::fs::write(
        &path,
        r#"
[[section]]
kind = "distribution"
title = "Orphan"
dataset = "nowhere"
category = "X"
"#,
    )
    .unwrap();
    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(err.to_string().contains("unknown dataset 'nowhere'"));
}

#[test]
fn validate_reports_inverted_filter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("insights.toml");
    std::fs::write(&path, "[filter]\nstart = \"2023-03-01\"\nend = \"2023-01-01\"\n").unwrap();
    assert!(matches!(
        run_config_validate_impl(&path),
        Err(InsightsError::InvalidRange { .. })
    ));
}

#[test]
fn show_defaults_as_text() {
    let cli = cli(&["applicant-insights", "--no-config", "config", "show"]);
    let output = run_config_show_impl(None, ConfigOutputFormat::Text, &cli).unwrap();
    assert!(output.starts_with("# Source: built-in defaults\n=== Effective Configuration ===\n"));
    assert!(output.contains("  mode = data bounds\n"));
    assert!(output.contains("  name = \"Prev_Jobs\"\n"));
    assert!(output.contains("  breakdown = \"EMPLOYMENTSTATUS\"\n"));
    assert!(output.contains("  colors.Shortlisted = \"#F77F00\"\n"));
}

#[test]
fn show_defaults_as_json() {
    let cli = cli(&["applicant-insights", "--no-config", "config", "show"]);
    let output = run_config_show_impl(None, ConfigOutputFormat::Json, &cli).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["dataset"][0]["name"], "Prev_Jobs");
    assert_eq!(json["section"][1]["kind"], "breakdown");
}

#[test]
fn show_explicit_file_names_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("insights.toml");
    std::fs::write(&path, "[filter]\nwindow = \"last-12-months\"\n").unwrap();
    let cli = cli(&["applicant-insights", "config", "show"]);
    let output = run_config_show_impl(Some(&path), ConfigOutputFormat::Text, &cli).unwrap();
    assert!(output.contains(&path.display().to_string()));
    assert!(output.contains("  mode = last-12-months (365 days)\n"));
}

#[test]
fn format_text_describes_explicit_and_last_days() {
    let mut config = Config::default();
    config.filter.last_days = Some(90);
    assert!(format_config_text(&config).contains("  mode = last 90 days\n"));

    config.filter.last_days = None;
    config.filter.start = chrono::NaiveDate::from_ymd_opt(2023, 1, 1);
    config.filter.end = chrono::NaiveDate::from_ymd_opt(2023, 12, 31);
    assert!(format_config_text(&config).contains("  mode = explicit (2023-01-01 to 2023-12-31)\n"));
}
