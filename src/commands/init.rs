use std::fs;

use crate::cli::Cli;
use crate::output::report_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, InsightsError, Result};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(InsightsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;
    log::info!("wrote configuration template to {}", output_path.display());
    Ok(())
}

/// The built-in dashboard as an editable TOML file.
#[must_use]
pub fn generate_config_template() -> String {
    r##"# applicant-insights configuration file
# Dataset paths are relative to this file's directory.

# Colors cycled across slices and stack segments without a fixed color.
# palette = ["#001E44", "#F5F5F5", "#E53855", "#B4BBBE", "#2F76B9", "#3B9790", "#F5BA2E", "#6A4C93", "#F77F00"]

# Date filter. Set at most one of: start + end, window, last_days.
# With none, the report spans the earliest to latest date in the data.
[filter]
# start = "2023-01-01"
# end = "2023-12-31"
# window = "last-6-months"   # or "last-12-months"
# last_days = 90

# Where `export` and `report --export-dir` write filtered CSV files.
[export]
dir = "."

[[dataset]]
name = "Prev_Jobs"
path = "Prev_jobs.csv"
date_column = "INVITATIONDT"

[[dataset]]
name = "Pje"
path = "Previous_jobs_EmpStat.csv"
date_column = "INVITATIONDT"

# Pie chart of one category column.
[[section]]
kind = "distribution"
title = "Breakdown of Previous Jobs"
dataset = "Prev_Jobs"
category = "PREVIOUS_JOBS"
export_name = "Prev_Jobs"

# Stacked bars of category by a second column. `exclude` drops category
# values, `include` keeps only the listed breakdown values (both ignore case).
[[section]]
kind = "breakdown"
title = "Distribution of Previous Jobs Categories by Shortlisted/Hired Status"
dataset = "Pje"
category = "PREVIOUS_JOBS"
breakdown = "FOLDER"
exclude = ["unknown"]
include = ["shortlisted", "hired"]
export_name = "Pje_Shortlisted_Hired"
colors = { Shortlisted = "#F77F00", Hired = "#001E44" }

[[section]]
kind = "breakdown"
title = "Distribution of Previous Jobs Categories by Employment Status"
dataset = "Pje"
category = "PREVIOUS_JOBS"
breakdown = "EMPLOYMENTSTATUS"
exclude = ["unknown"]
export_name = "Pje_EmploymentStatus"
# x_title = "Previous Jobs"
# y_title = "Count"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
