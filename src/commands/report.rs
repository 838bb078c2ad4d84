use crate::cli::{Cli, ReportArgs};
use crate::output::report_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SECTION_ERROR, EXIT_SUCCESS, Result};

use super::context::{build_report, color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the report and, with `--export-dir`, exports each rendered
/// section's rows.
///
/// # Errors
/// Returns an error if configuration, datasets, or output cannot be
/// processed. Misconfigured sections are not errors; they set the exit code.
pub fn run_report_impl(args: &ReportArgs, cli: &Cli) -> Result<i32> {
    let load = load_config(args.config.as_deref(), cli.no_config)?;
    let report = build_report(&load, &args.range)?;

    let formatter = args.format.formatter(color_choice_to_mode(cli.color));
    let content = formatter.format(&report)?;
    write_output(args.output.as_deref(), &content, cli.quiet)?;

    if let Some(dir) = &args.export_dir {
        report.write_exports(dir)?;
    }

    if report.has_configuration_errors() {
        Ok(EXIT_SECTION_ERROR)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
