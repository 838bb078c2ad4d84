use crate::cli::{Cli, ExportArgs};
use crate::output::{print_warning, report_error};
use crate::report::SectionOutcome;
use crate::{EXIT_CONFIG_ERROR, EXIT_SECTION_ERROR, EXIT_SUCCESS, Result};

use super::context::{build_report, color_choice_to_mode, load_config};

#[must_use]
pub fn run_export(args: &ExportArgs, cli: &Cli) -> i32 {
    match run_export_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes one `Filtered_<name>_<start>_to_<end>.csv` per section with rows.
///
/// Empty sections are skipped with a warning; misconfigured sections are
/// skipped and set the exit code.
///
/// # Errors
/// Returns an error for an unknown `--section` title, or if configuration,
/// datasets, or export files cannot be processed.
pub fn run_export_impl(args: &ExportArgs, cli: &Cli) -> Result<i32> {
    let load = load_config(args.config.as_deref(), cli.no_config)?;
    let mut report = build_report(&load, &args.range)?;
    if !args.section.is_empty() {
        report.retain_titles(&args.section)?;
    }

    if !cli.quiet {
        for section in &report.sections {
            if let SectionOutcome::Empty { message } | SectionOutcome::Misconfigured { message } =
                &section.outcome
            {
                print_warning(&format!("'{}' not exported: {message}", section.title));
            }
        }
    }

    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| load.resolve(&load.config.export.dir));
    let written = report.write_exports(&dir)?;
    if !cli.quiet {
        for path in &written {
            println!("Exported {}", path.display());
        }
    }

    if report.has_configuration_errors() {
        Ok(EXIT_SECTION_ERROR)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
