use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parse_report(args: &[&str]) -> ReportArgs {
    let mut argv = vec!["applicant-insights", "report"];
    argv.extend_from_slice(args);
    match Cli::parse_from(argv).command {
        Commands::Report(args) => args,
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn report_defaults() {
    let args = parse_report(&[]);
    assert_eq!(args.config, None);
    assert_eq!(args.format, OutputFormat::Text);
    assert_eq!(args.range, RangeArgs::default());
    assert!(!args.range.overrides_filter());
    assert!(args.export_dir.is_none());
}

#[test]
fn report_explicit_range() {
    let args = parse_report(&["--start", "2023-01-15", "--end", "2023-03-01"]);
    assert_eq!(args.range.start, Some(date(2023, 1, 15)));
    assert_eq!(args.range.end, Some(date(2023, 3, 1)));
    assert!(args.range.overrides_filter());
}

#[test]
fn report_start_requires_end() {
    let result = Cli::try_parse_from(["applicant-insights", "report", "--start", "2023-01-15"]);
    assert!(result.is_err());
}

#[test]
fn report_window_and_last_days_conflict() {
    let result = Cli::try_parse_from([
        "applicant-insights",
        "report",
        "--window",
        "last-6-months",
        "--last-days",
        "30",
    ]);
    assert!(result.is_err());
}

#[test]
fn report_window_with_as_of() {
    let args = parse_report(&["--window", "last-12-months", "--as-of", "2024-06-30"]);
    assert_eq!(args.range.window, Some(WindowPreset::LastTwelveMonths));
    assert_eq!(args.range.as_of, Some(date(2024, 6, 30)));
}

#[test]
fn report_as_of_alone_does_not_override_filter() {
    let args = parse_report(&["--as-of", "2024-06-30"]);
    assert!(!args.range.overrides_filter());
}

#[test]
fn report_rejects_bad_date() {
    let result = Cli::try_parse_from(["applicant-insights", "report", "--last-days", "x"]);
    assert!(result.is_err());
    let result = Cli::try_parse_from([
        "applicant-insights",
        "report",
        "--start",
        "2023-13-01",
        "--end",
        "2023-12-31",
    ]);
    assert!(result.is_err());
}

#[test]
fn report_format_and_output() {
    let args = parse_report(&["-f", "html", "-o", "report.html", "--export-dir", "out"]);
    assert_eq!(args.format, OutputFormat::Html);
    assert_eq!(args.output, Some(PathBuf::from("report.html")));
    assert_eq!(args.export_dir, Some(PathBuf::from("out")));
}

#[test]
fn report_format_md_alias() {
    assert_eq!(parse_report(&["--format", "md"]).format, OutputFormat::Markdown);
}

#[test]
fn export_sections_repeat() {
    let cli = Cli::parse_from([
        "applicant-insights",
        "export",
        "-d",
        "exports",
        "--section",
        "A",
        "--section",
        "B",
        "--last-days",
        "90",
    ]);
    match cli.command {
        Commands::Export(args) => {
            assert_eq!(args.dir, Some(PathBuf::from("exports")));
            assert_eq!(args.section, vec!["A".to_string(), "B".to_string()]);
            assert_eq!(args.range.last_days, Some(90));
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn init_defaults_to_local_config_name() {
    let cli = Cli::parse_from(["applicant-insights", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".applicant-insights.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn config_validate_default_path() {
    let cli = Cli::parse_from(["applicant-insights", "config", "validate"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => assert_eq!(config, PathBuf::from(".applicant-insights.toml")),
        _ => panic!("Expected Config Validate command"),
    }
}

#[test]
fn config_show_json() {
    let cli = Cli::parse_from(["applicant-insights", "config", "show", "-f", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config, format },
        }) => {
            assert!(config.is_none());
            assert_eq!(format, ConfigOutputFormat::Json);
        }
        _ => panic!("Expected Config Show command"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "applicant-insights",
        "report",
        "-vv",
        "--color",
        "never",
        "--no-config",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
    assert!(!cli.quiet);
}
