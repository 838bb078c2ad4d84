use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader, SectionKind};
use crate::engine::DateFilter;
use crate::output::report_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, InsightsError, Result};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            format!("Configuration is valid: {}\n", config.display())
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli)
        }
    };
    match result {
        Ok(output) => {
            if !cli.quiet {
                print!("{output}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(InsightsError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }
    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let load = load_config(config_path, cli.no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&load.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => {
            let source = load
                .source
                .as_ref()
                .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
            Ok(format!("# Source: {source}\n{}", format_config_text(&load.config)))
        }
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[filter]\n");
    match config.filter.date_filter() {
        Ok(filter) => {
            let _ = writeln!(output, "  mode = {}", describe_filter(config, filter));
        }
        Err(e) => {
            let _ = writeln!(output, "  invalid: {e}");
        }
    }

    output.push_str("\n[export]\n");
    let _ = writeln!(output, "  dir = {:?}", config.export.dir.display().to_string());
    let _ = writeln!(output, "  palette = {:?}", config.palette);

    for dataset in &config.datasets {
        output.push_str("\n[[dataset]]\n");
        let _ = writeln!(output, "  name = {:?}", dataset.name);
        let _ = writeln!(output, "  path = {:?}", dataset.path.display().to_string());
        let _ = writeln!(output, "  date_column = {:?}", dataset.date_column);
    }

    for section in &config.sections {
        output.push_str("\n[[section]]\n");
        let kind = match section.kind {
            SectionKind::Distribution => "distribution",
            SectionKind::Breakdown => "breakdown",
        };
        let _ = writeln!(output, "  kind = {kind:?}");
        let _ = writeln!(output, "  title = {:?}", section.title);
        let _ = writeln!(output, "  dataset = {:?}", section.dataset);
        let _ = writeln!(output, "  category = {:?}", section.category);
        if let Some(breakdown) = &section.breakdown {
            let _ = writeln!(output, "  breakdown = {breakdown:?}");
        }
        if !section.exclude.is_empty() {
            let _ = writeln!(output, "  exclude = {:?}", section.exclude);
        }
        if let Some(include) = &section.include {
            let _ = writeln!(output, "  include = {include:?}");
        }
        let _ = writeln!(output, "  export_name = {:?}", section.export_stem());
        for (value, color) in &section.colors {
            let _ = writeln!(output, "  colors.{value} = {color:?}");
        }
    }

    output
}

fn describe_filter(config: &Config, filter: DateFilter) -> String {
    match filter {
        DateFilter::Explicit(range) => format!("explicit ({range})"),
        DateFilter::Relative(window) => match config.filter.window {
            Some(preset) => format!("{preset} ({} days)", window.days()),
            None => format!("last {} days", window.days()),
        },
        DateFilter::DataBounds => "data bounds".to_string(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
